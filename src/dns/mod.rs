//! DNS resolution of server hostnames.
//!
//! This module provides:
//! - The [`HostResolver`] primitive (one hostname to its IP addresses)
//! - A hickory-backed implementation of it
//! - Concurrent batch resolution with a minimum-success threshold

mod resolution;

use std::net::IpAddr;

use anyhow::Error;
use async_trait::async_trait;
use hickory_resolver::TokioAsyncResolver;

// Re-export public API
pub use resolution::{resolve_hosts, Resolution};

/// Resolves a single hostname to its IP addresses.
///
/// Implementations are expected to enforce their own timeout.
#[async_trait]
pub trait HostResolver: Send + Sync {
    async fn lookup_ips(&self, host: &str) -> Result<Vec<IpAddr>, Error>;
}

/// [`HostResolver`] backed by a hickory tokio resolver (A and AAAA records).
pub struct HickoryResolver {
    inner: TokioAsyncResolver,
}

impl HickoryResolver {
    pub fn new(inner: TokioAsyncResolver) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl HostResolver for HickoryResolver {
    async fn lookup_ips(&self, host: &str) -> Result<Vec<IpAddr>, Error> {
        let response = self.inner.lookup_ip(host).await.map_err(Error::new)?;
        Ok(response.iter().collect())
    }
}
