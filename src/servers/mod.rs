//! Server records and their canonical ordering.

use std::cmp::Ordering;
use std::net::IpAddr;

use serde::Serialize;

/// One reachable VPN endpoint: a host at a single IP address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerRecord {
    pub hostname: String,
    pub country: String,
    pub city: String,
    pub ip: IpAddr,
    pub tcp: bool,
    pub udp: bool,
}

/// Sorts servers by country, city, hostname and IP address.
///
/// Countries compare case-insensitively first, with the exact spelling as a
/// tiebreak so the order stays total. IPs compare by their textual form.
/// Sorting an already sorted slice leaves it unchanged.
pub fn sort_servers(servers: &mut [ServerRecord]) {
    servers.sort_by(compare_servers);
}

fn compare_servers(a: &ServerRecord, b: &ServerRecord) -> Ordering {
    a.country
        .to_lowercase()
        .cmp(&b.country.to_lowercase())
        .then_with(|| a.country.cmp(&b.country))
        .then_with(|| a.city.cmp(&b.city))
        .then_with(|| a.hostname.cmp(&b.hostname))
        .then_with(|| a.ip.to_string().cmp(&b.ip.to_string()))
}
