//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `vpn_updater` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use vpn_updater::initialization::init_logger_with;
use vpn_updater::{run_update, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_update(config).await {
        Ok(summary) => {
            if summary.output.is_none() {
                let json = serde_json::to_string_pretty(&summary.servers)
                    .context("Failed to serialize servers")?;
                println!("{json}");
            }
            eprintln!(
                "✅ Built {} server{} from {} file{} ({} warning{}) in {:.1}s",
                summary.servers.len(),
                if summary.servers.len() == 1 { "" } else { "s" },
                summary.total_files,
                if summary.total_files == 1 { "" } else { "s" },
                summary.warnings,
                if summary.warnings == 1 { "" } else { "s" },
                summary.elapsed_seconds
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("vpn_updater error: {:#}", e);
            process::exit(1);
        }
    }
}
