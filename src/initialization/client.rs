//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::ClientConfig;
use crate::error::InitializationError;

/// Initializes the HTTP client used for geo service requests.
///
/// Creates a `reqwest::Client` configured with:
/// - Total request timeout from the config (default 3 seconds)
/// - Connection-establishment timeout from the config (default 3 seconds)
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_http_client(config: &ClientConfig) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .build()?;
    Ok(client)
}
