use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Arc;

use futures::stream::FuturesUnordered;
use futures::StreamExt;
use log::debug;
use tokio_util::sync::CancellationToken;

use super::HostResolver;
use crate::error_handling::{check_minimum, ResolveError, UpdateError};
use crate::initialization::init_semaphore;

/// Outcome of a successful batch resolution.
#[derive(Debug, Default)]
pub struct Resolution {
    /// Resolved hosts; each IP list is sorted and free of duplicates
    pub host_to_ips: HashMap<String, Vec<IpAddr>>,
    /// One entry per host that failed to resolve
    pub warnings: Vec<String>,
}

/// Resolves `hosts` concurrently, at most `concurrency` lookups at a time.
///
/// A host whose lookup fails, or returns no address, is left out of the
/// mapping and reported as a warning. Each lookup runs in its own task and
/// hands its result back through its join handle, so only this function ever
/// writes the mapping.
///
/// # Errors
///
/// - `UpdateError::NotEnoughServers` if fewer than `min_servers` hosts
///   resolved; the returned error still carries the warnings.
/// - `UpdateError::Cancelled` if `cancel` fires first. Outstanding lookups
///   are aborted and partial results are discarded.
pub async fn resolve_hosts(
    resolver: Arc<dyn HostResolver>,
    hosts: &[String],
    min_servers: usize,
    concurrency: usize,
    cancel: &CancellationToken,
) -> Result<Resolution, ResolveError> {
    let semaphore = init_semaphore(concurrency);
    let mut tasks = FuturesUnordered::new();

    for host in hosts {
        let resolver = Arc::clone(&resolver);
        let semaphore = Arc::clone(&semaphore);
        let host = host.clone();
        tasks.push(tokio::spawn(async move {
            let result = match semaphore.acquire_owned().await {
                Ok(_permit) => resolver.lookup_ips(&host).await,
                Err(e) => Err(anyhow::Error::new(e)),
            };
            (host, result)
        }));
    }

    let mut host_to_ips = HashMap::with_capacity(hosts.len());
    let mut warnings = Vec::new();

    loop {
        let next = tokio::select! {
            biased;
            _ = cancel.cancelled() => None,
            next = tasks.next() => Some(next),
        };

        let Some(next) = next else {
            for task in tasks.iter() {
                task.abort();
            }
            return Err(ResolveError {
                warnings: Vec::new(),
                source: UpdateError::Cancelled,
            });
        };
        let Some(joined) = next else {
            break;
        };

        match joined {
            Ok((host, Ok(mut ips))) => {
                ips.sort();
                ips.dedup();
                if ips.is_empty() {
                    warnings.push(format!("{host}: no IP address found"));
                } else {
                    debug!("Resolved {host} to {} address(es)", ips.len());
                    host_to_ips.insert(host, ips);
                }
            }
            Ok((host, Err(e))) => warnings.push(format!("{host}: {e:#}")),
            Err(join_error) => warnings.push(format!("resolution task failed: {join_error}")),
        }
    }

    if let Err(source) = check_minimum(host_to_ips.len(), min_servers) {
        return Err(ResolveError { warnings, source });
    }

    Ok(Resolution {
        host_to_ips,
        warnings,
    })
}
