//! vpn_updater library: VPN server list building
//!
//! This library turns a directory of OpenVPN configuration files into a
//! deduplicated, DNS-resolved and deterministically sorted list of servers.
//! Files that cannot be parsed and hosts that cannot be resolved are reported
//! as warnings and skipped; the update only fails when fewer servers than the
//! configured minimum survive, or when it is cancelled.
//!
//! # Example
//!
//! ```no_run
//! use vpn_updater::{run_update, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     dir: std::path::PathBuf::from("./configs"),
//!     min_servers: 100,
//!     ..Default::default()
//! };
//!
//! let summary = run_update(config).await?;
//! println!("{} servers from {} files", summary.servers.len(), summary.total_files);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

mod app;
pub mod config;
pub mod dns;
pub mod error_handling;
pub mod hosts;
pub mod initialization;
pub mod input;
pub mod naming;
pub mod openvpn;
pub mod servers;
pub mod updater;
pub mod warner;

#[cfg(test)]
mod test_helpers;

// Re-export public API
pub use config::{Config, ConfigValidationError, LogFormat, LogLevel};
pub use error_handling::{check_minimum, UpdateError};
pub use run::{run_update, RunSummary};
pub use servers::ServerRecord;
pub use updater::{UpdateReport, Updater};

// Internal run module (wires the updater to its real collaborators)
mod run {
    use std::path::PathBuf;
    use std::sync::Arc;

    use anyhow::{Context, Result};
    use log::info;
    use tokio_util::sync::CancellationToken;

    use crate::app::{cancel_on_ctrl_c, print_update_statistics};
    use crate::config::Config;
    use crate::initialization::init_resolver;
    use crate::input::load_contents;
    use crate::servers::ServerRecord;
    use crate::updater::Updater;
    use crate::warner::LogWarner;

    /// Results of an update run.
    #[derive(Debug, Clone)]
    pub struct RunSummary {
        /// Number of files found in the input directory
        pub total_files: usize,
        /// Sorted servers
        pub servers: Vec<ServerRecord>,
        /// Number of files or hosts dropped with a warning
        pub warnings: usize,
        /// File the servers were written to, if any
        pub output: Option<PathBuf>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs a server list update with the provided configuration.
    ///
    /// Reads every file in `config.dir`, resolves the hosts they name with the
    /// default upstream resolver and, when `config.output` is set,
    /// writes the servers there as a JSON array. Ctrl-C cancels the update.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The configuration is invalid
    /// - The input directory cannot be read
    /// - The DNS resolver cannot be initialized
    /// - The update fails (not enough servers, or cancelled)
    /// - The output file cannot be written
    pub async fn run_update(config: Config) -> Result<RunSummary> {
        config.validate()?;
        let start_time = std::time::Instant::now();

        let contents = load_contents(&config.dir)
            .await
            .context("Failed to load configuration files")?;
        info!(
            "Loaded {} files from {}",
            contents.len(),
            config.dir.display()
        );

        let resolver = init_resolver();
        let updater = Updater::new(resolver, Arc::new(LogWarner), config.min_servers)
            .with_concurrency(config.concurrency);

        let cancel = CancellationToken::new();
        let ctrl_c = cancel_on_ctrl_c(cancel.clone());
        let result = updater.get_servers(&contents, &cancel).await;
        ctrl_c.abort();
        let report = result.context("Server list update failed")?;

        print_update_statistics(&report.stats);

        if let Some(path) = &config.output {
            let json = serde_json::to_string_pretty(&report.servers)
                .context("Failed to serialize servers")?;
            tokio::fs::write(path, json)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} servers to {}", report.servers.len(), path.display());
        }

        Ok(RunSummary {
            total_files: contents.len(),
            warnings: report.stats.total_warnings(),
            servers: report.servers,
            output: config.output,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
