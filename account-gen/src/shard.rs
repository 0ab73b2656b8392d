use std::ops::Range;

use rand::Rng;

use crate::account::AccountRecord;
use crate::config::OutputFormat;

/// Id of the first row of shard 0
pub const ID_BASE: u64 = 12_500_000;
/// Distance between the first ids of two consecutive shards
pub const SHARD_STRIDE: u64 = 10_000;

#[must_use]
pub fn shard_offset(shard_index: u32) -> u64 {
    SHARD_STRIDE * u64::from(shard_index)
}

/// `account00.txt`, `account01.txt`, ... The index is padded to two digits, wider indexes are kept whole.
#[must_use]
pub fn file_name(shard_index: u32, format: OutputFormat) -> String {
    format!("account{shard_index:02}.{}", format.extension())
}

/// Lazily produces the records of one shard in row order, drawing a fresh balance for each row.
/// Nothing is retained once a record has been yielded.
pub struct ShardRecords<'a, R: ?Sized> {
    offset: u64,
    rows: Range<u64>,
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> ShardRecords<'a, R> {
    #[must_use]
    pub fn new(shard_index: u32, rows: u32, rng: &'a mut R) -> Self {
        ShardRecords {
            offset: shard_offset(shard_index),
            rows: 0..u64::from(rows),
            rng,
        }
    }
}

impl<R: Rng + ?Sized> Iterator for ShardRecords<'_, R> {
    type Item = AccountRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let row_index = self.rows.next()?;
        let sequence = self.offset + row_index;
        Some(AccountRecord::new(
            ID_BASE + sequence,
            format!("name{sequence}"),
            self.rng.gen(),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::account::Balance;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_shard_offset() {
        assert_eq!(shard_offset(0), 0);
        assert_eq!(shard_offset(1), 10_000);
        assert_eq!(shard_offset(9), 90_000);
        assert_eq!(shard_offset(u32::MAX), 10_000 * u64::from(u32::MAX));
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name(0, OutputFormat::Sql), "account00.txt");
        assert_eq!(file_name(7, OutputFormat::Sql), "account07.txt");
        assert_eq!(file_name(12, OutputFormat::Sql), "account12.txt");
        assert_eq!(file_name(3, OutputFormat::Csv), "account03.csv");
    }

    #[test]
    fn test_first_shard_records() {
        let mut rng = StdRng::seed_from_u64(1);
        let records: Vec<AccountRecord> = ShardRecords::new(0, 3, &mut rng).collect();
        assert_eq!(records.len(), 3);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.id, 12_500_000 + i as u64);
            assert_eq!(record.name, format!("name{i}"));
            assert!(record.balance >= Balance::min() && record.balance <= Balance::max());
        }
    }

    #[test]
    fn test_second_shard_records() {
        let mut rng = StdRng::seed_from_u64(1);
        let records: Vec<AccountRecord> = ShardRecords::new(1, 2, &mut rng).collect();
        let ids: Vec<u64> = records.iter().map(|r| r.id).collect();
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(ids, vec![12_510_000, 12_510_001]);
        assert_eq!(names, vec!["name10000", "name10001"]);
    }

    #[test]
    fn test_name_suffix_matches_id() {
        let mut rng = StdRng::seed_from_u64(5);
        for record in ShardRecords::new(6, 500, &mut rng) {
            let suffix: u64 = record.name.strip_prefix("name").unwrap().parse().unwrap();
            assert_eq!(suffix, record.id - ID_BASE);
        }
    }

    #[test]
    fn test_empty_shard() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut records = ShardRecords::new(4, 0, &mut rng);
        assert_eq!(records.size_hint(), (0, Some(0)));
        assert!(records.next().is_none());
    }
}
