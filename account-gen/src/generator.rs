use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::account::AccountRecord;
use crate::config::{GeneratorConfig, OutputFormat};
use crate::error::GenError;
use crate::shard::{ShardRecords, SHARD_STRIDE};

/// What a finished shard left on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShardSummary {
    pub shard_index: u32,
    pub path: PathBuf,
    pub rows: u64,
}

#[derive(Debug, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Generator { config }
    }

    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Writes every shard, seeding balances from `config.seed` when present and from
    /// OS entropy otherwise.
    ///
    /// # Errors
    /// See [`Generator::run_with_rng`]
    pub fn run(&self) -> Result<Vec<ShardSummary>, GenError> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.run_with_rng(&mut rng)
    }

    /// Writes shards `0..shard_count` in increasing order, stopping at the first failure.
    /// Shards written before the failure are left on disk.
    ///
    /// # Errors
    /// Returns the first I/O or CSV error raised while writing a shard
    pub fn run_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<ShardSummary>, GenError> {
        if self.config.rows_overlap_next_shard() {
            warn!(
                "{} rows per shard exceeds the shard stride of {}, ids will collide across shards",
                self.config.rows_per_shard, SHARD_STRIDE
            );
        }

        (0..self.config.shard_count)
            .map(|shard_index| self.write_shard(shard_index, rng))
            .collect()
    }

    /// Creates (or truncates) the shard's file and fills it with `rows_per_shard` records.
    ///
    /// # Errors
    /// Errors when the file cannot be created, written or flushed. A partially written
    /// file is not removed.
    pub fn write_shard<R: Rng + ?Sized>(
        &self,
        shard_index: u32,
        rng: &mut R,
    ) -> Result<ShardSummary, GenError> {
        let path = self.config.shard_path(shard_index);
        debug!("Generating shard {} into {}", shard_index, path.display());

        let records = ShardRecords::new(shard_index, self.config.rows_per_shard, rng);
        let file = File::create(&path)?;
        let rows = match self.config.format {
            OutputFormat::Sql => write_sql(file, records)?,
            OutputFormat::Csv => write_csv(file, records)?,
        };

        info!("Wrote {} records to {}", rows, path.display());
        Ok(ShardSummary {
            shard_index,
            path,
            rows,
        })
    }
}

fn write_sql(file: File, records: impl Iterator<Item = AccountRecord>) -> Result<u64, GenError> {
    let mut writer = BufWriter::new(file);
    let mut rows = 0;
    for record in records {
        writeln!(writer, "{record}")?;
        rows += 1;
    }
    // dropping the writer would swallow a failed final write
    writer.flush()?;
    Ok(rows)
}

fn write_csv(file: File, records: impl Iterator<Item = AccountRecord>) -> Result<u64, GenError> {
    let mut writer = csv::WriterBuilder::new().from_writer(file);
    let mut rows = 0;
    for record in records {
        writer.serialize(&record)?;
        rows += 1;
    }
    writer.flush()?;
    Ok(rows)
}
