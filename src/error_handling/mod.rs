//! Error handling and update statistics.
//!
//! This module provides:
//! - Error type definitions (fatal update errors, per-file parse errors)
//! - Warning categories and thread-safe warning counters
//!
//! Problems are split into:
//! - **Errors**: threshold violations and cancellation, which abort an update
//! - **Warnings**: a dropped file or host, which the update survives

mod stats;
mod types;

// Re-export public API
pub use stats::UpdateStats;
pub use types::{
    InitializationError, ParseError, ResolveError, UpdateError, WarningType,
};

/// Verifies that a checkpoint kept at least `min_servers` items.
///
/// # Errors
///
/// Returns `UpdateError::NotEnoughServers` carrying both counts otherwise.
pub fn check_minimum(count: usize, min_servers: usize) -> Result<(), UpdateError> {
    if count < min_servers {
        return Err(UpdateError::NotEnoughServers {
            got: count,
            want: min_servers,
        });
    }
    Ok(())
}
