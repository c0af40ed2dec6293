//! Per-hostname aggregation of parsed configuration files.
//!
//! Several configuration files can point at the same hostname (one per
//! protocol, typically). [`HostAggregator`] folds them into a single
//! [`HostRecord`] per hostname, carries the resolved IPs, and finally expands
//! every record into one [`ServerRecord`] per IP address.

use std::collections::HashMap;
use std::net::IpAddr;

use crate::servers::ServerRecord;

/// Server metadata accumulated for one hostname.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostRecord {
    pub country: String,
    pub city: String,
    pub tcp: bool,
    pub udp: bool,
    pub ips: Vec<IpAddr>,
}

/// Hostname-keyed store of [`HostRecord`]s, remembering insertion order.
#[derive(Debug, Default)]
pub struct HostAggregator {
    records: HashMap<String, HostRecord>,
    order: Vec<String>,
}

impl HostAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new host or merges into the existing record for `hostname`.
    ///
    /// Protocol flags are OR-merged. Country and city are overwritten by the
    /// latest entry.
    pub fn add(&mut self, hostname: &str, country: &str, city: &str, tcp: bool, udp: bool) {
        match self.records.get_mut(hostname) {
            Some(record) => {
                record.tcp |= tcp;
                record.udp |= udp;
                record.country = country.to_string();
                record.city = city.to_string();
            }
            None => {
                self.order.push(hostname.to_string());
                self.records.insert(
                    hostname.to_string(),
                    HostRecord {
                        country: country.to_string(),
                        city: city.to_string(),
                        tcp,
                        udp,
                        ips: Vec::new(),
                    },
                );
            }
        }
    }

    /// Number of distinct hostnames.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, hostname: &str) -> Option<&HostRecord> {
        self.records.get(hostname)
    }

    /// Unique hostnames in the order they were first added.
    pub fn hosts(&self) -> Vec<String> {
        self.order.clone()
    }

    /// Stores resolved IPs on every host present in `host_to_ips`.
    ///
    /// Hosts missing from the mapping are left without IPs and will not
    /// produce any server.
    pub fn adapt_with_ips(&mut self, host_to_ips: &HashMap<String, Vec<IpAddr>>) {
        for (hostname, ips) in host_to_ips {
            if let Some(record) = self.records.get_mut(hostname) {
                record.ips = ips.clone();
            }
        }
    }

    /// Expands every host into one server per IP address, in host insertion order.
    pub fn to_servers(&self) -> Vec<ServerRecord> {
        self.order
            .iter()
            .filter_map(|hostname| self.records.get(hostname).map(|r| (hostname, r)))
            .flat_map(|(hostname, record)| {
                record.ips.iter().map(move |ip| ServerRecord {
                    hostname: hostname.clone(),
                    country: record.country.clone(),
                    city: record.city.clone(),
                    ip: *ip,
                    tcp: record.tcp,
                    udp: record.udp,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests;
