//! Shared test doubles for the resolver and the warning sink.

use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Error;
use async_trait::async_trait;

use crate::dns::HostResolver;
use crate::warner::Warner;

/// In-memory resolver answering from a fixed table.
///
/// Hosts missing from the table fail to resolve. Tracks the highest number of
/// lookups observed in flight at once.
#[derive(Default)]
pub(crate) struct FakeResolver {
    answers: HashMap<String, Vec<IpAddr>>,
    delay: Option<Duration>,
    in_flight: AtomicUsize,
    pub(crate) max_in_flight: AtomicUsize,
}

impl FakeResolver {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_host(mut self, host: &str, ips: &[&str]) -> Self {
        let ips = ips
            .iter()
            .map(|ip| ip.parse().expect("valid test IP"))
            .collect();
        self.answers.insert(host.to_string(), ips);
        self
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl HostResolver for FakeResolver {
    async fn lookup_ips(&self, host: &str) -> Result<Vec<IpAddr>, Error> {
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        self.answers
            .get(host)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no such host"))
    }
}

/// Resolver whose lookups never complete.
pub(crate) struct PendingResolver;

#[async_trait]
impl HostResolver for PendingResolver {
    async fn lookup_ips(&self, _host: &str) -> Result<Vec<IpAddr>, Error> {
        std::future::pending().await
    }
}

/// Warner keeping every message for later assertions.
#[derive(Default)]
pub(crate) struct RecordingWarner {
    messages: Mutex<Vec<String>>,
}

impl RecordingWarner {
    pub(crate) fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("warner lock poisoned").clone()
    }
}

impl Warner for RecordingWarner {
    fn warn(&self, message: &str) {
        self.messages
            .lock()
            .expect("warner lock poisoned")
            .push(message.to_string());
    }
}

/// Builds a minimal OpenVPN configuration for `host`.
pub(crate) fn ovpn(host: &str, proto: &str) -> Vec<u8> {
    format!("client\ndev tun\nproto {proto}\nremote {host} 443\n").into_bytes()
}
