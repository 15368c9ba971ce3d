use crate::emit;
use crate::fetch::{self, Fetch, FetchError};
use crate::io::{self, IoError};
use crate::parsing;
use emoji_tablegen_config::Config;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Summary of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub accepted: usize,
    pub disabled: usize,
    pub malformed: usize,
    pub output_path: PathBuf,
}

/// Regenerate the table from the cached data file.
///
/// Runs offline; the output file is fully rewritten on success and left
/// untouched on failure.
pub fn generate(config: &Config) -> Result<GenerationReport, GenerateError> {
    let parsed = parsing::read_emoji_data(&config.data_path)?;

    let sorted = parsed.ranges.sorted();
    let output = emit::render_table(&sorted, &config.source_url);
    io::write_file(&config.output_path, output.as_bytes())?;

    let report = GenerationReport {
        accepted: sorted.len(),
        disabled: parsed.disabled,
        malformed: parsed.rejected.len(),
        output_path: config.output_path.clone(),
    };
    log::info!(
        "Wrote {} ranges to {} ({} disabled, {} malformed)",
        report.accepted,
        report.output_path.display(),
        report.disabled,
        report.malformed
    );
    Ok(report)
}

/// Fetch the data file, then generate from it.
pub fn run<F: Fetch + ?Sized>(
    config: &Config,
    fetcher: &F,
) -> Result<GenerationReport, GenerateError> {
    fetch::fetch_to_file(fetcher, &config.source_url, &config.data_path)?;
    generate(config)
}
