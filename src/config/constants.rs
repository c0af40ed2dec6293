//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including DNS timeouts, concurrency limits and file naming conventions.

// Network operation timeouts
/// DNS query timeout in seconds
/// Most lookups complete in well under a second, 3s fails fast on dead servers
pub const DNS_TIMEOUT_SECS: u64 = 3;
/// Number of attempts the resolver makes per query before giving up
pub const DNS_ATTEMPTS: usize = 2;

// Concurrency
/// Maximum number of hostname lookups in flight at once (semaphore limit)
pub const DEFAULT_RESOLVE_CONCURRENCY: usize = 16;
/// Upper bound accepted for `--concurrency`
pub const MAX_RESOLVE_CONCURRENCY: usize = 256;

// Result size
/// Minimum number of servers an update must produce to be accepted
pub const DEFAULT_MIN_SERVERS: usize = 1;

// Configuration file conventions
/// Extension of OpenVPN configuration files; other files are ignored
pub const OVPN_EXTENSION: &str = ".ovpn";
/// Provider prefix carried by every configuration filename
/// (e.g. `ipvanish-CA-Toronto-tor-a01.ovpn`)
pub const FILENAME_PREFIX: &str = "ipvanish-";
