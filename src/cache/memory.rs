//! In-process store.

use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;

use super::store::KeyValueStore;

/// In-memory store, usable as a test double or an ephemeral per-process
/// cache. Expiration values are accepted but not enforced.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: DashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    async fn set(&self, key: &str, value: &str, _expire_secs: u32) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
