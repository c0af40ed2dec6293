use super::lines;
use crate::error_handling::ParseError;

const PROTO_PREFIX: &str = "proto ";

/// Extracts the supported transport protocols from an OpenVPN configuration.
///
/// Every `proto` line is considered, so a file listing both `proto tcp` and
/// `proto udp` supports both. A file without any `proto` line uses OpenVPN's
/// default of UDP.
///
/// # Returns
///
/// `(tcp, udp)` support flags.
///
/// # Errors
///
/// Returns `ParseError::ProtocolNotSupported` if a `proto` line names anything
/// other than TCP or UDP.
pub fn extract_proto(content: &[u8]) -> Result<(bool, bool), ParseError> {
    let mut tcp = false;
    let mut udp = false;

    for line in lines(content) {
        let Some(value) = line.strip_prefix(PROTO_PREFIX) else {
            continue;
        };
        let value = value.trim().to_lowercase();
        match value.as_str() {
            "tcp" | "tcp-client" => tcp = true,
            "udp" => udp = true,
            _ => return Err(ParseError::ProtocolNotSupported(value)),
        }
    }

    if !tcp && !udp {
        udp = true;
    }

    Ok((tcp, udp))
}
