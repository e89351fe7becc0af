//! IPv4 address validation.

use std::net::Ipv4Addr;

use crate::error::LookupError;

/// Validates that `raw` is a syntactically valid IPv4 dotted-quad.
///
/// Runs before any cache or network access on every invocation and has no
/// side effects. Anything that is not a strict dotted-quad — empty input,
/// IPv6, out-of-range octets, surrounding whitespace, non-numeric text —
/// fails with [`LookupError::InvalidAddress`].
pub(crate) fn validate(raw: &str) -> Result<Ipv4Addr, LookupError> {
    raw.parse::<Ipv4Addr>()
        .map_err(|_| LookupError::InvalidAddress(raw.to_string()))
}
