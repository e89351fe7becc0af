//! Lookup client and pipeline orchestration.

use std::sync::Arc;

use log::debug;

use crate::address;
use crate::cache::{CacheGateway, KeyValueStore, MemcachedStore};
use crate::config::ClientConfig;
use crate::error::{InitializationError, LookupError};
use crate::fetch;
use crate::initialization::init_http_client;
use crate::parse;
use crate::record::GeoRecord;

/// Client for the geo lookup service.
///
/// One instance serves any number of addresses. Every [`GeoClient::lookup`]
/// call owns its request and result values, so sharing an instance across
/// tasks is safe.
pub struct GeoClient {
    config: ClientConfig,
    http: reqwest::Client,
    store: Option<Arc<dyn KeyValueStore>>,
}

impl GeoClient {
    /// Creates a client from `config`.
    ///
    /// When caching is enabled the cache store connection is not opened
    /// here; it is established lazily, once per lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, InitializationError> {
        let http = init_http_client(&config)?;
        Ok(Self {
            config,
            http,
            store: None,
        })
    }

    /// Creates a client that caches through `store` instead of connecting to
    /// memcached. The `use_cache` flag still controls whether the cache
    /// layer runs at all.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_store(
        config: ClientConfig,
        store: Arc<dyn KeyValueStore>,
    ) -> Result<Self, InitializationError> {
        let http = init_http_client(&config)?;
        Ok(Self {
            config,
            http,
            store: Some(store),
        })
    }

    /// Resolves `address` to its geographic attributes.
    ///
    /// Pipeline: validate, cache check, remote fetch, decode, cache write. A
    /// cache hit returns without touching the network; both cache steps are
    /// skipped when caching is disabled. Every failure is terminal for this
    /// call, there are no retries.
    ///
    /// # Errors
    ///
    /// See [`LookupError`] for the failure taxonomy.
    pub async fn lookup(&self, address: &str) -> Result<GeoRecord, LookupError> {
        let address = address::validate(address)?;

        let cache = self.cache_gateway().await?;

        if let Some(gateway) = &cache {
            if let Some(record) = gateway.load(address).await? {
                debug!("Serving {address} from cache");
                return Ok(record);
            }
        }

        let payload = fetch::fetch_payload(&self.http, &self.config.service_url, address).await?;
        let record = parse::decode_record(&payload, address)?;

        if let Some(gateway) = &cache {
            gateway.save(address, &record).await?;
            debug!("Cached geo record for {address}");
        }

        Ok(record)
    }

    /// Builds the per-invocation cache gateway, connecting to memcached on
    /// demand unless a store was injected.
    async fn cache_gateway(&self) -> Result<Option<CacheGateway>, LookupError> {
        if !self.config.use_cache {
            return Ok(None);
        }
        let store: Arc<dyn KeyValueStore> = match &self.store {
            Some(store) => Arc::clone(store),
            None => Arc::new(
                MemcachedStore::connect(&self.config.cache_host, self.config.cache_port).await?,
            ),
        };
        Ok(Some(CacheGateway::new(
            store,
            &self.config.cache_prefix,
            self.config.cache_expire,
        )))
    }
}
