use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::{debug, error};

use account_gen::config::{
    GeneratorConfig, OutputFormat, DEFAULT_ROWS_PER_SHARD, DEFAULT_SHARD_COUNT,
};
use account_gen::generator::Generator;

/// Writes shards of synthetic `account` rows as SQL insert statements
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Number of shard files to generate
    #[clap(long, default_value_t = DEFAULT_SHARD_COUNT)]
    pub(crate) shards: u32,
    /// Records per shard, ids collide across shards above 10000
    #[clap(long, default_value_t = DEFAULT_ROWS_PER_SHARD)]
    pub(crate) rows: u32,
    /// Directory the shard files are written into
    #[clap(long, parse(from_os_str), default_value = ".")]
    pub(crate) output_dir: PathBuf,
    /// Output format, `sql` or `csv`
    #[clap(long, default_value = "sql")]
    pub(crate) format: OutputFormat,
    /// Seed for the balance generator
    #[clap(long)]
    pub(crate) seed: Option<u64>,
}

fn config_from(cli: &Cli) -> GeneratorConfig {
    let config = GeneratorConfig::default()
        .with_shard_count(cli.shards)
        .with_rows_per_shard(cli.rows)
        .with_output_dir(&cli.output_dir)
        .with_format(cli.format);
    match cli.seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();
    let config = config_from(&cli);

    let summaries = Generator::new(config).run().map_err(|e| {
        error!("Generation failed: {:?}", e);
        e
    })?;
    debug!("Generated {} shards", summaries.len());

    Ok(())
}
