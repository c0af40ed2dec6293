use std::net::IpAddr;

use super::lines;
use crate::error_handling::ParseError;

const REMOTE_PREFIX: &str = "remote ";

/// Extracts the server hostname from an OpenVPN configuration.
///
/// Looks at the first field after `remote` on every `remote` line. IP literals
/// are skipped since the updater resolves hostnames itself.
///
/// # Returns
///
/// The first hostname found, and a warning if other hostnames were discarded.
///
/// # Errors
///
/// Returns `ParseError::RemoteHostNotFound` if no `remote` line carries a hostname.
pub fn extract_host(content: &[u8]) -> Result<(String, Option<String>), ParseError> {
    let hosts = remote_hosts(content);

    let Some(first) = hosts.first() else {
        return Err(ParseError::RemoteHostNotFound);
    };

    let warning = (hosts.len() > 1).then(|| {
        format!(
            "only using the first host {:?} and discarding {} other hosts",
            first,
            hosts.len() - 1
        )
    });

    Ok((first.clone(), warning))
}

fn remote_hosts(content: &[u8]) -> Vec<String> {
    lines(content)
        .into_iter()
        .filter(|line| line.starts_with(REMOTE_PREFIX))
        .filter_map(|line| line.split_whitespace().nth(1).map(str::to_string))
        .filter(|host| host.parse::<IpAddr>().is_err())
        .collect()
}
