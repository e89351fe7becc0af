//! The key-value store capability.

use anyhow::Result;
use async_trait::async_trait;

/// A string key-value store with per-entry expiration.
///
/// The lookup client treats the store as an injected collaborator: the
/// production implementation is [`super::MemcachedStore`], tests substitute
/// their own. `get` must distinguish an absent key (`None`) from an empty
/// stored value (`Some("")`).
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetches the value stored under `key`, or `None` if the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key` with a TTL of `expire_secs` seconds.
    /// 0 means the entry never expires.
    async fn set(&self, key: &str, value: &str, expire_secs: u32) -> Result<()>;
}
