//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `whois_enrich` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use whois_enrich::config::Opt;
use whois_enrich::initialization::init_logger_with;
use whois_enrich::{run_enrichment, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // WHOIS_ENRICH_* settings may live in a .env file: current directory first,
    // then next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::from(Opt::parse());

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_enrichment(config).await {
        Ok(report) => {
            println!(
                "Enriched {} row{} ({} succeeded, {} failed) in {:.1}s",
                report.total_rows,
                if report.total_rows == 1 { "" } else { "s" },
                report.successful,
                report.failed,
                report.elapsed_seconds
            );
            println!("Results saved in {}", report.output_path.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("whois_enrich error: {:#}", e);
            process::exit(1);
        }
    }
}
