//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_WHOIS_SERVER, WHOIS_TIMEOUT_SECS};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Basic usage: writes data/report_results.csv
/// whois_enrich data/report.csv
///
/// # Against another WHOIS server with a longer timeout
/// whois_enrich data/report.csv --whois-server whois.example.net:43 --timeout-seconds 15
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "whois_enrich",
    about = "Adds WHOIS ASN description and CIDR columns to a CSV of IP records."
)]
pub struct Opt {
    /// CSV file to enrich (must contain an `IPs` column)
    #[arg(value_parser)]
    pub file: PathBuf,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// WHOIS server as host:port
    #[arg(long, env = "WHOIS_ENRICH_SERVER", default_value = DEFAULT_WHOIS_SERVER)]
    pub whois_server: String,

    /// WHOIS lookup timeout in seconds
    #[arg(long, env = "WHOIS_ENRICH_TIMEOUT_SECS", default_value_t = WHOIS_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Output path (defaults to `<input stem>_results.csv` next to the input)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use whois_enrich::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: PathBuf::from("report.csv"),
///     timeout_seconds: 10,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// CSV file to enrich
    pub file: PathBuf,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// WHOIS server as host:port
    pub whois_server: String,

    /// WHOIS lookup timeout in seconds
    pub timeout_seconds: u64,

    /// Explicit output path; derived from `file` when `None`
    pub output: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::new(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            whois_server: DEFAULT_WHOIS_SERVER.to_string(),
            timeout_seconds: WHOIS_TIMEOUT_SECS,
            output: None,
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            file: opt.file,
            log_level: opt.log_level,
            log_format: opt.log_format,
            whois_server: opt.whois_server,
            timeout_seconds: opt.timeout_seconds,
            output: opt.output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opt_single_positional_uses_defaults() {
        let opt = Opt::try_parse_from(["whois_enrich", "report.csv"]).expect("Should parse");
        assert_eq!(opt.file, PathBuf::from("report.csv"));
        assert!(opt.output.is_none());

        let config = Config::from(opt);
        assert_eq!(config.timeout_seconds, WHOIS_TIMEOUT_SECS);
        assert!(matches!(config.log_format, LogFormat::Plain));
    }

    #[test]
    fn test_opt_with_options() {
        let opt = Opt::try_parse_from([
            "whois_enrich",
            "report.csv",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "--whois-server",
            "127.0.0.1:4343",
            "--timeout-seconds",
            "12",
            "--output",
            "out.csv",
        ])
        .expect("Should parse with options");

        assert_eq!(
            log::LevelFilter::from(opt.log_level.clone()),
            log::LevelFilter::Debug
        );
        assert!(matches!(opt.log_format, LogFormat::Json));
        assert_eq!(opt.whois_server, "127.0.0.1:4343");
        assert_eq!(opt.timeout_seconds, 12);
        assert_eq!(opt.output, Some(PathBuf::from("out.csv")));
    }

    #[test]
    fn test_opt_requires_file() {
        assert!(Opt::try_parse_from(["whois_enrich"]).is_err());
    }
}
