//! Host aggregation tests.

use super::*;

fn ip(s: &str) -> IpAddr {
    s.parse().expect("valid test IP")
}

#[test]
fn test_add_merges_protocols() {
    let mut hosts = HostAggregator::new();
    hosts.add("a.example.com", "Canada", "Toronto", true, false);
    hosts.add("a.example.com", "Canada", "Toronto", false, true);

    assert_eq!(hosts.len(), 1);
    let record = hosts.get("a.example.com").expect("host should exist");
    assert!(record.tcp);
    assert!(record.udp);
}

#[test]
fn test_add_last_location_wins() {
    let mut hosts = HostAggregator::new();
    hosts.add("a.example.com", "Canada", "Toronto", false, true);
    hosts.add("a.example.com", "Canada", "Montreal", false, true);

    let record = hosts.get("a.example.com").expect("host should exist");
    assert_eq!(record.city, "Montreal");
}

#[test]
fn test_hosts_in_insertion_order() {
    let mut hosts = HostAggregator::new();
    hosts.add("c.example.com", "Canada", "", false, true);
    hosts.add("a.example.com", "Canada", "", false, true);
    hosts.add("c.example.com", "Canada", "", true, false);
    hosts.add("b.example.com", "Canada", "", false, true);

    assert_eq!(
        hosts.hosts(),
        vec!["c.example.com", "a.example.com", "b.example.com"]
    );
}

#[test]
fn test_empty_aggregator() {
    let hosts = HostAggregator::new();
    assert!(hosts.is_empty());
    assert!(hosts.hosts().is_empty());
    assert!(hosts.to_servers().is_empty());
}

#[test]
fn test_to_servers_one_per_ip() {
    let mut hosts = HostAggregator::new();
    hosts.add("a.example.com", "Canada", "Toronto", true, true);
    hosts.add("b.example.com", "Germany", "Berlin", false, true);

    let mut host_to_ips = HashMap::new();
    host_to_ips.insert(
        "a.example.com".to_string(),
        vec![ip("10.0.0.1"), ip("10.0.0.2")],
    );
    host_to_ips.insert("b.example.com".to_string(), vec![ip("10.0.1.1")]);
    hosts.adapt_with_ips(&host_to_ips);

    let servers = hosts.to_servers();
    assert_eq!(servers.len(), 3);
    assert_eq!(servers[0].hostname, "a.example.com");
    assert_eq!(servers[0].ip, ip("10.0.0.1"));
    assert_eq!(servers[1].ip, ip("10.0.0.2"));
    assert!(servers[1].tcp && servers[1].udp);
    assert_eq!(servers[2].country, "Germany");
    assert!(!servers[2].tcp);
}

#[test]
fn test_unresolved_host_produces_no_servers() {
    let mut hosts = HostAggregator::new();
    hosts.add("a.example.com", "Canada", "Toronto", true, true);
    hosts.add("b.example.com", "Canada", "Toronto", true, true);

    let mut host_to_ips = HashMap::new();
    host_to_ips.insert("a.example.com".to_string(), vec![ip("10.0.0.1")]);
    host_to_ips.insert("unknown.example.com".to_string(), vec![ip("10.0.0.9")]);
    hosts.adapt_with_ips(&host_to_ips);

    let servers = hosts.to_servers();
    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].hostname, "a.example.com");
    assert_eq!(hosts.len(), 2);
}
