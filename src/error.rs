//! Error type definitions.
//!
//! Lookup failures are a closed taxonomy: callers branch on the variant
//! rather than inspecting messages. Every failure is terminal for its
//! invocation; the crate never retries internally.

use std::net::Ipv4Addr;

use log::SetLoggerError;
use thiserror::Error;

/// Errors from a single lookup invocation.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The input is not a valid IPv4 dotted-quad. Raised before any cache or
    /// network I/O happens.
    #[error("IP address {0:?} is invalid")]
    InvalidAddress(String),

    /// The geo service exchange could not be completed: timeout, connection
    /// failure, or a transfer error. Never conflated with "address not
    /// found", and never raised for a completed exchange whatever its HTTP
    /// status.
    #[error("unable to get geo information for {address}")]
    RemoteUnavailable {
        /// The address being resolved when the transport failed.
        address: Ipv4Addr,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The service payload could not be parsed as XML.
    #[error("malformed geo service response: {0}")]
    MalformedResponse(#[from] roxmltree::Error),

    /// The payload parsed, but one or more of the four geo fields is missing
    /// for the queried address.
    #[error("IP address {0} not found")]
    AddressNotFound(Ipv4Addr),

    /// The cache store failed (connect, get, or set). Propagated as-is so a
    /// broken store never masquerades as a missing address.
    #[error("cache store failure: {0}")]
    CacheStore(#[from] anyhow::Error),
}

/// Errors from constructing the client or the logger.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] reqwest::Error),
}
