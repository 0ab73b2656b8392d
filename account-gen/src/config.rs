use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::GenError;
use crate::shard::{file_name, SHARD_STRIDE};

pub const DEFAULT_SHARD_COUNT: u32 = 10;
pub const DEFAULT_ROWS_PER_SHARD: u32 = 10_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `insert into account values(..);` statement per line
    #[default]
    Sql,
    /// A header row followed by one `id,name,balance` row per record
    Csv,
}

/// Everything a [Generator](crate::generator::Generator) needs to know about a run.
/// The `Default` reproduces the classic fixture set: ten shards of 10000 rows each,
/// written as SQL into the working directory with unseeded balances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub shard_count: u32,
    /// Must not exceed [`SHARD_STRIDE`](crate::shard::SHARD_STRIDE) for ids to stay unique
    pub rows_per_shard: u32,
    pub output_dir: PathBuf,
    pub format: OutputFormat,
    pub seed: Option<u64>,
}

impl OutputFormat {
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Sql => "txt",
            OutputFormat::Csv => "csv",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = GenError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("sql") {
            Ok(OutputFormat::Sql)
        } else if s.eq_ignore_ascii_case("csv") {
            Ok(OutputFormat::Csv)
        } else {
            Err(GenError::UnknownFormat(s.to_string()))
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Sql => write!(f, "sql"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            shard_count: DEFAULT_SHARD_COUNT,
            rows_per_shard: DEFAULT_ROWS_PER_SHARD,
            output_dir: PathBuf::from("."),
            format: OutputFormat::default(),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    #[must_use]
    pub fn with_shard_count(mut self, shard_count: u32) -> Self {
        self.shard_count = shard_count;
        self
    }

    #[must_use]
    pub fn with_rows_per_shard(mut self, rows_per_shard: u32) -> Self {
        self.rows_per_shard = rows_per_shard;
        self
    }

    #[must_use]
    pub fn with_output_dir(mut self, output_dir: impl AsRef<Path>) -> Self {
        self.output_dir = output_dir.as_ref().to_path_buf();
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn shard_path(&self, shard_index: u32) -> PathBuf {
        self.output_dir.join(file_name(shard_index, self.format))
    }

    /// True when a shard's ids would run into the next shard's range
    #[must_use]
    pub fn rows_overlap_next_shard(&self) -> bool {
        u64::from(self.rows_per_shard) > SHARD_STRIDE
    }
}
