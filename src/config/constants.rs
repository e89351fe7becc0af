//! Configuration constants.
//!
//! Defaults for the lookup client and the fixed parameters of the geo
//! service wire format.

/// Geo service endpoint queried for address lookups.
pub const GEO_SERVICE_URL: &str = "http://ipgeobase.ru:7020/geo";

/// Total request timeout in seconds (connect + transfer).
pub const REQUEST_TIMEOUT_SECS: u64 = 3;

/// Connection-establishment timeout in seconds.
pub const CONNECT_TIMEOUT_SECS: u64 = 3;

/// Charset the geo service encodes its payload in.
pub const SOURCE_CHARSET: &str = "windows-1251";

/// Charset name substituted for [`SOURCE_CHARSET`] inside the payload after
/// transcoding, so the XML declaration matches the bytes the parser sees.
pub const TARGET_CHARSET: &str = "utf-8";

/// Default cache store host.
pub const DEFAULT_CACHE_HOST: &str = "127.0.0.1";

/// Default cache store port (memcached).
pub const DEFAULT_CACHE_PORT: u16 = 11211;

/// Default cache key prefix.
///
/// Shared with other clients of the same store; see
/// [`crate::cache::cache_key`] for the full key format.
pub const DEFAULT_CACHE_PREFIX: &str = "ipgeoclient";

/// Default cache entry TTL in seconds. 0 means entries never expire.
pub const DEFAULT_CACHE_EXPIRE: u32 = 0;
