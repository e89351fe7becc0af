//! Configuration types and CLI options.

use clap::ValueEnum;

use crate::config::constants::{
    CONNECT_TIMEOUT_SECS, DEFAULT_CACHE_EXPIRE, DEFAULT_CACHE_HOST, DEFAULT_CACHE_PORT,
    DEFAULT_CACHE_PREFIX, GEO_SERVICE_URL, REQUEST_TIMEOUT_SECS,
};

/// Logging level for the application.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// Constructed programmatically; `Default` matches the behavior of the geo
/// service client with caching disabled.
///
/// # Examples
///
/// ```
/// use ipgeobase_client::ClientConfig;
///
/// let config = ClientConfig {
///     use_cache: true,
///     cache_expire: 3600,
///     ..Default::default()
/// };
/// assert_eq!(config.cache_port, 11211);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Cache lookups in the key-value store
    pub use_cache: bool,

    /// Cache store host
    pub cache_host: String,

    /// Cache store port
    pub cache_port: u16,

    /// Cache entry TTL in seconds, 0 = no expiration
    pub cache_expire: u32,

    /// Namespacing prefix for cache keys
    pub cache_prefix: String,

    /// Geo service URL
    pub service_url: String,

    /// Total request timeout in seconds
    pub timeout_secs: u64,

    /// Connection-establishment timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            use_cache: false,
            cache_host: DEFAULT_CACHE_HOST.to_string(),
            cache_port: DEFAULT_CACHE_PORT,
            cache_expire: DEFAULT_CACHE_EXPIRE,
            cache_prefix: DEFAULT_CACHE_PREFIX.to_string(),
            service_url: GEO_SERVICE_URL.to_string(),
            timeout_secs: REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: CONNECT_TIMEOUT_SECS,
        }
    }
}
