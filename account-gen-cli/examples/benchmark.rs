use std::error::Error;
use std::time::Instant;

use log::warn;
use tempfile::tempdir;

use account_gen::config::{GeneratorConfig, OutputFormat};
use account_gen::generator::Generator;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // removed on drop, including when a run fails
    let output_dir = tempdir()?;

    let start = Instant::now();
    for format in [OutputFormat::Sql, OutputFormat::Csv] {
        let config = GeneratorConfig::default()
            .with_output_dir(output_dir.path())
            .with_format(format)
            .with_seed(42);
        let start_format = Instant::now();
        let summaries = Generator::new(config).run()?;
        let rows: u64 = summaries.iter().map(|s| s.rows).sum();
        warn!(
            "Writing {} {} rows took: {:.2?}",
            rows,
            format,
            start_format.elapsed()
        );
    }
    warn!("Total took: {:.2?}", start.elapsed());

    Ok(())
}
