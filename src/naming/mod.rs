//! Server location decoding from configuration filenames.
//!
//! Configuration files are named `<prefix><country code>-<city words>-<host>.ovpn`,
//! for example `ipvanish-US-New-York-nyc-a01.ovpn` for host `nyc-a01.ipvanish.com`.

mod countries;

use crate::config::{FILENAME_PREFIX, OVPN_EXTENSION};
use crate::error_handling::ParseError;

pub use countries::country_name;

/// Derives the country and city of a server from its configuration filename.
///
/// The provider prefix, the extension and the trailing host label are stripped;
/// the first remaining dash-separated part is a country code and the rest
/// forms the city. Both labels are returned title-cased. The city is empty when
/// the filename only carries a country.
///
/// # Errors
///
/// Returns `ParseError::CountryCodeUnknown` if the country code is not recognized.
pub fn parse_filename(filename: &str, hostname: &str) -> Result<(String, String), ParseError> {
    let s = filename.strip_prefix(FILENAME_PREFIX).unwrap_or(filename);

    let host_label = hostname.split('.').next().unwrap_or(hostname);
    let host_suffix = format!("-{host_label}{OVPN_EXTENSION}");
    let s = s
        .strip_suffix(host_suffix.as_str())
        .or_else(|| s.strip_suffix(OVPN_EXTENSION))
        .unwrap_or(s);

    let mut parts = s.split('-');
    let code = parts.next().unwrap_or_default();
    let country = country_name(code)
        .ok_or_else(|| ParseError::CountryCodeUnknown(code.to_lowercase()))?;

    let city = parts
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    Ok((title_case(country), title_case(&city)))
}

/// Upper-cases the first letter of every word and lower-cases the rest.
pub fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
