//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{DNS_ATTEMPTS, DNS_TIMEOUT_SECS};
use crate::dns::HickoryResolver;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::TokioAsyncResolver;

/// Initializes the DNS resolver for hostname lookups.
///
/// Nameservers come from the system configuration, falling back to the
/// library defaults when it cannot be read. Timeouts are aggressive so that a
/// slow server cannot stall a whole batch. Search domains are disabled
/// (`ndots = 0`), hostnames from configuration files are always fully qualified.
pub fn init_resolver() -> Arc<HickoryResolver> {
    let (config, mut opts) = match read_system_conf() {
        Ok(system) => system,
        Err(e) => {
            log::warn!("Failed to read system DNS configuration, using defaults: {e}");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };
    opts.timeout = Duration::from_secs(DNS_TIMEOUT_SECS);
    opts.attempts = DNS_ATTEMPTS;
    opts.ndots = 0;

    Arc::new(HickoryResolver::new(TokioAsyncResolver::tokio(config, opts)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_resolver() {
        let resolver = init_resolver();
        assert_eq!(Arc::strong_count(&resolver), 1);
    }
}
