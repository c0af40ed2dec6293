//! Server list update pipeline.
//!
//! Turns raw configuration files into a sorted list of resolved servers:
//!
//! 1. check there are enough files at all
//! 2. parse each file and aggregate by hostname, then check the host count
//! 3. resolve every hostname concurrently (the resolver checks its own count)
//! 4. expand hosts into one server per IP, then check the server count
//! 5. sort
//!
//! Any file or host that cannot be used is reported to the [`Warner`] and
//! skipped. Only the count checks and cancellation fail the update.

use std::sync::Arc;

use log::{debug, info};
use tokio_util::sync::CancellationToken;

use crate::config::{DEFAULT_RESOLVE_CONCURRENCY, OVPN_EXTENSION};
use crate::dns::{resolve_hosts, HostResolver};
use crate::error_handling::{check_minimum, ResolveError, UpdateError, UpdateStats, WarningType};
use crate::hosts::HostAggregator;
use crate::input::Contents;
use crate::naming::parse_filename;
use crate::openvpn::{extract_host, extract_proto};
use crate::servers::{sort_servers, ServerRecord};
use crate::warner::Warner;

/// Result of a successful update.
#[derive(Debug)]
pub struct UpdateReport {
    /// Servers sorted by country, city, hostname and IP
    pub servers: Vec<ServerRecord>,
    /// Warnings raised along the way, by category
    pub stats: UpdateStats,
}

/// Builds server lists from configuration files.
///
/// Holds no state between updates; every call to
/// [`get_servers`](Updater::get_servers) aggregates into its own store.
pub struct Updater {
    resolver: Arc<dyn HostResolver>,
    warner: Arc<dyn Warner>,
    min_servers: usize,
    concurrency: usize,
}

impl Updater {
    pub fn new(
        resolver: Arc<dyn HostResolver>,
        warner: Arc<dyn Warner>,
        min_servers: usize,
    ) -> Self {
        Self {
            resolver,
            warner,
            min_servers,
            concurrency: DEFAULT_RESOLVE_CONCURRENCY,
        }
    }

    /// Sets the maximum number of DNS lookups in flight.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Runs the full pipeline over `contents`.
    ///
    /// # Errors
    ///
    /// - `UpdateError::NotEnoughServers` when the file count, the distinct
    ///   host count, the resolved host count or the final server count falls
    ///   below the configured minimum
    /// - `UpdateError::Cancelled` when `cancel` fires before the update completes
    pub async fn get_servers(
        &self,
        contents: &Contents,
        cancel: &CancellationToken,
    ) -> Result<UpdateReport, UpdateError> {
        check_minimum(contents.len(), self.min_servers)?;
        if cancel.is_cancelled() {
            return Err(UpdateError::Cancelled);
        }

        let stats = UpdateStats::new();

        let mut hosts = self.aggregate(contents, &stats);
        info!(
            "Found {} distinct hosts in {} files",
            hosts.len(),
            contents.len()
        );
        check_minimum(hosts.len(), self.min_servers)?;

        let resolution = match resolve_hosts(
            Arc::clone(&self.resolver),
            &hosts.hosts(),
            self.min_servers,
            self.concurrency,
            cancel,
        )
        .await
        {
            Ok(resolution) => resolution,
            Err(ResolveError { warnings, source }) => {
                for warning in &warnings {
                    self.warn(&stats, WarningType::Resolution, warning);
                }
                return Err(source);
            }
        };
        for warning in &resolution.warnings {
            self.warn(&stats, WarningType::Resolution, warning);
        }

        hosts.adapt_with_ips(&resolution.host_to_ips);
        let mut servers = hosts.to_servers();
        info!(
            "Resolved {} hosts into {} servers",
            resolution.host_to_ips.len(),
            servers.len()
        );
        check_minimum(servers.len(), self.min_servers)?;

        sort_servers(&mut servers);

        Ok(UpdateReport { servers, stats })
    }

    fn aggregate(&self, contents: &Contents, stats: &UpdateStats) -> HostAggregator {
        let mut hosts = HostAggregator::new();

        for (filename, content) in contents {
            if !filename.ends_with(OVPN_EXTENSION) {
                debug!("Skipping {filename}: not an OpenVPN file");
                continue;
            }

            let (tcp, udp) = match extract_proto(content) {
                Ok(protocols) => protocols,
                Err(e) => {
                    self.warn(
                        stats,
                        WarningType::ProtocolExtraction,
                        &format!("{e} in {filename}"),
                    );
                    continue;
                }
            };

            let hostname = match extract_host(content) {
                Ok((hostname, warning)) => {
                    if let Some(warning) = warning {
                        self.warn(stats, WarningType::MultipleRemotes, &warning);
                    }
                    hostname
                }
                Err(e) => {
                    self.warn(
                        stats,
                        WarningType::HostExtraction,
                        &format!("{e} in {filename}"),
                    );
                    continue;
                }
            };

            let (country, city) = match parse_filename(filename, &hostname) {
                Ok(location) => location,
                Err(e) => {
                    self.warn(
                        stats,
                        WarningType::FilenameDecoding,
                        &format!("{e} in {filename}"),
                    );
                    continue;
                }
            };

            hosts.add(&hostname, &country, &city, tcp, udp);
        }

        hosts
    }

    fn warn(&self, stats: &UpdateStats, kind: WarningType, message: &str) {
        stats.increment_warning(kind);
        self.warner.warn(message);
    }
}
