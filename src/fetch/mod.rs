//! Remote geo service fetcher.

mod encoding;

use std::net::Ipv4Addr;

use log::debug;

use crate::error::LookupError;

/// Fetches the raw payload for `address` from the geo service and returns it
/// transcoded to UTF-8.
///
/// A single attempt with the client's configured timeouts; only a failure to
/// complete the exchange (connect, timeout, body transfer) surfaces as
/// [`LookupError::RemoteUnavailable`]. The HTTP status is not inspected:
/// whatever body the service sends flows to the decoder, which classifies it.
pub(crate) async fn fetch_payload(
    http: &reqwest::Client,
    service_url: &str,
    address: Ipv4Addr,
) -> Result<String, LookupError> {
    let url = format!("{service_url}?ip={address}");
    debug!("Requesting {url}");

    let response = http
        .get(&url)
        .send()
        .await
        .map_err(|source| LookupError::RemoteUnavailable { address, source })?;

    let body = response
        .bytes()
        .await
        .map_err(|source| LookupError::RemoteUnavailable { address, source })?;

    Ok(encoding::transcode_payload(&body))
}
