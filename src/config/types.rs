//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_MIN_SERVERS, DEFAULT_RESOLVE_CONCURRENCY, MAX_RESOLVE_CONCURRENCY,
};

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

/// Updater configuration.
///
/// Parsed from the command line by the binary, or constructed programmatically.
///
/// # Examples
///
/// ```no_run
/// use vpn_updater::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     dir: PathBuf::from("./configs"),
///     min_servers: 100,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "vpn_updater",
    version,
    about = "Builds a resolved, sorted VPN server list from OpenVPN configuration files"
)]
pub struct Config {
    /// Directory containing the extracted `.ovpn` configuration files
    pub dir: PathBuf,

    /// Minimum number of servers the update must produce
    #[arg(long, default_value_t = DEFAULT_MIN_SERVERS)]
    pub min_servers: usize,

    /// Maximum number of concurrent DNS lookups
    #[arg(long, default_value_t = DEFAULT_RESOLVE_CONCURRENCY)]
    pub concurrency: usize,

    /// Write the server list as JSON to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

/// A configuration value outside its accepted range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending option
    pub field: &'static str,
    /// What the accepted values are
    pub message: String,
}

impl Config {
    /// Checks option ranges that clap cannot express.
    ///
    /// # Errors
    ///
    /// Returns the first offending option.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.concurrency == 0 {
            return Err(ConfigValidationError {
                field: "concurrency",
                message: "must be greater than 0".to_string(),
            });
        }
        if self.concurrency > MAX_RESOLVE_CONCURRENCY {
            return Err(ConfigValidationError {
                field: "concurrency",
                message: format!(
                    "must be at most {MAX_RESOLVE_CONCURRENCY} to avoid flooding the DNS server"
                ),
            });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            min_servers: DEFAULT_MIN_SERVERS,
            concurrency: DEFAULT_RESOLVE_CONCURRENCY,
            output: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
