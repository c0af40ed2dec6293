// Shared test helpers for building configuration directories and fake resolvers.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::collections::HashMap;
use std::net::IpAddr;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Error;
use async_trait::async_trait;
use vpn_updater::dns::HostResolver;
use vpn_updater::warner::Warner;

/// Resolver answering from a fixed table; unknown hosts fail.
#[derive(Default)]
pub struct StaticResolver {
    answers: HashMap<String, Vec<IpAddr>>,
}

impl StaticResolver {
    pub fn with_host(mut self, host: &str, ips: &[&str]) -> Self {
        let ips = ips
            .iter()
            .map(|ip| ip.parse().expect("valid test IP"))
            .collect();
        self.answers.insert(host.to_string(), ips);
        self
    }
}

#[async_trait]
impl HostResolver for StaticResolver {
    async fn lookup_ips(&self, host: &str) -> Result<Vec<IpAddr>, Error> {
        self.answers
            .get(host)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("NXDOMAIN"))
    }
}

/// Warner keeping every message.
#[derive(Default)]
pub struct CollectingWarner {
    pub messages: Mutex<Vec<String>>,
}

impl Warner for CollectingWarner {
    fn warn(&self, message: &str) {
        self.messages
            .lock()
            .expect("warner lock poisoned")
            .push(message.to_string());
    }
}

/// Writes an OpenVPN configuration file named `filename` into `dir`.
pub fn write_config(dir: &Path, filename: &str, host: &str, proto: &str) {
    let content = format!(
        "client\ndev tun\nproto {proto}\nremote {host} 443\nresolv-retry infinite\nnobind\n"
    );
    std::fs::write(dir.join(filename), content).expect("Failed to write config file");
}
