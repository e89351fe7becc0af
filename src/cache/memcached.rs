//! memcached-backed store.

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use tokio::task;

use super::store::KeyValueStore;

/// Store backed by a memcached server.
///
/// The memcached protocol client is blocking, so every call runs on the
/// tokio blocking pool. Per-call timeouts are the store client's own
/// defaults; making them configurable is a possible improvement.
pub struct MemcachedStore {
    client: Arc<memcache::Client>,
}

impl MemcachedStore {
    /// Connects to the memcached server at `host:port`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP connection to the store cannot be
    /// established.
    pub async fn connect(host: &str, port: u16) -> Result<Self> {
        let url = format!("memcache://{host}:{port}");
        debug!("Connecting to cache store at {url}");
        let client = task::spawn_blocking(move || memcache::Client::connect(url.as_str()))
            .await
            .context("cache store task failed")?
            .with_context(|| format!("failed to connect to cache store at {host}:{port}"))?;
        Ok(Self {
            client: Arc::new(client),
        })
    }
}

#[async_trait]
impl KeyValueStore for MemcachedStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let client = Arc::clone(&self.client);
        let owned = key.to_string();
        let value = task::spawn_blocking(move || client.get::<String>(&owned))
            .await
            .context("cache store task failed")?
            .with_context(|| format!("cache store get failed for key {key}"))?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, expire_secs: u32) -> Result<()> {
        let client = Arc::clone(&self.client);
        let owned_key = key.to_string();
        let owned_value = value.to_string();
        task::spawn_blocking(move || client.set(&owned_key, owned_value.as_str(), expire_secs))
            .await
            .context("cache store task failed")?
            .with_context(|| format!("cache store set failed for key {key}"))?;
        Ok(())
    }
}
