//! OpenVPN configuration file parsing.
//!
//! Only the two directives an updater needs are understood:
//! - `proto` - which transport protocols the server accepts
//! - `remote` - the server hostname
//!
//! Everything else in the file is ignored.

mod host;
mod proto;

// Re-export public API
pub use host::extract_host;
pub use proto::extract_proto;

/// Splits raw file content into lines, tolerating `\r\n` endings and
/// non-UTF-8 bytes.
fn lines(content: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(content)
        .split('\n')
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect()
}
