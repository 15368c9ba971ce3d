use anyhow::{Context, Result};
use emoji_tablegen_config::Config;
use emoji_tablegen_engine::{HttpFetcher, run};
use std::{env, process};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // Everything is fixed; there is nothing to configure
    let args: Vec<String> = env::args().collect();
    if args.len() > 1 {
        eprintln!("Usage: {}", args[0]);
        eprintln!("Takes no arguments; downloads the emoji data and regenerates the table");
        process::exit(1);
    }

    let config = Config::default();
    log::info!(
        "Generating {} from {}",
        config.output_path.display(),
        config.source_url
    );

    let report = run(&config, &HttpFetcher).with_context(|| {
        format!(
            "Failed to generate {} from {}",
            config.output_path.display(),
            config.source_url
        )
    })?;

    if report.malformed > 0 {
        log::warn!(
            "{} malformed lines were skipped, see above",
            report.malformed
        );
    }
    log::info!("Done: {} ranges", report.accepted);
    Ok(())
}
