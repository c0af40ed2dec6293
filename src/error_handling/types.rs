//! Error type definitions.
//!
//! This module defines the error and warning types used throughout the application.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Fatal errors of a server list update.
///
/// Per-file and per-host failures never surface here; they are demoted to
/// warnings. Only the minimum-count checkpoints and cancellation abort an update.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpdateError {
    /// Fewer servers than the configured minimum survived a checkpoint.
    #[error("not enough servers found: {got} and expected at least {want}")]
    NotEnoughServers {
        /// Number of items left at the checkpoint
        got: usize,
        /// Configured minimum
        want: usize,
    },

    /// The caller cancelled the update.
    #[error("server list update cancelled")]
    Cancelled,
}

/// Errors extracting data from a single configuration file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `proto` directive names something other than TCP or UDP.
    #[error("network protocol not supported: {0}")]
    ProtocolNotSupported(String),

    /// No `remote` directive with a hostname was found.
    #[error("remote host not found")]
    RemoteHostNotFound,

    /// The filename starts with a country code missing from the code table.
    #[error("country code is unknown: {0}")]
    CountryCodeUnknown(String),
}

/// Failed batch resolution, carrying the warnings gathered before failing.
#[derive(Error, Debug)]
#[error("{source}")]
pub struct ResolveError {
    /// Per-host failures collected before the batch failed
    pub warnings: Vec<String>,
    /// The batch failure
    pub source: UpdateError,
}

/// Categories of non-fatal problems met during an update.
///
/// Each warning drops one file or one host from the result without failing
/// the update as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum WarningType {
    ProtocolExtraction, // Unsupported `proto` directive
    HostExtraction,     // No usable `remote` directive
    MultipleRemotes,    // Several `remote` hosts, only the first is kept
    FilenameDecoding,   // Country/city could not be derived from the filename
    Resolution,         // DNS lookup failed or returned no address
}

impl WarningType {
    /// Returns a human-readable string representation of the warning type.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::ProtocolExtraction => "Protocol extraction failed",
            WarningType::HostExtraction => "Host extraction failed",
            WarningType::MultipleRemotes => "Multiple remote hosts",
            WarningType::FilenameDecoding => "Filename decoding failed",
            WarningType::Resolution => "Host resolution failed",
        }
    }
}

impl std::fmt::Display for WarningType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
