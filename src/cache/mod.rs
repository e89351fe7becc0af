//! Cache-aside access to geo records.
//!
//! Records are cached one field per key so that independent producers and
//! consumers can share the same store. A record counts as cached only when
//! all four field keys are present.

mod memcached;
mod memory;
mod store;

pub use memcached::MemcachedStore;
pub use memory::MemoryStore;
pub use store::KeyValueStore;

use std::net::Ipv4Addr;
use std::sync::Arc;

use log::debug;
use strum::IntoEnumIterator;

use crate::error::LookupError;
use crate::record::{GeoField, GeoRecord};

/// Builds the external key for one record field: `{prefix}_{address}_{field}`.
///
/// This format is a persisted contract shared with other clients of the same
/// store; changing it breaks interoperability.
pub fn cache_key(prefix: &str, address: Ipv4Addr, field: GeoField) -> String {
    format!("{prefix}_{address}_{}", field.as_str())
}

/// Cache-aside gateway over a [`KeyValueStore`].
pub(crate) struct CacheGateway {
    store: Arc<dyn KeyValueStore>,
    prefix: String,
    expire_secs: u32,
}

impl CacheGateway {
    pub(crate) fn new(store: Arc<dyn KeyValueStore>, prefix: &str, expire_secs: u32) -> Self {
        Self {
            store,
            prefix: prefix.to_string(),
            expire_secs,
        }
    }

    /// Reads the four field keys for `address`. A hit requires every field
    /// to be present; any absent key is a full miss and the partial values
    /// are discarded.
    pub(crate) async fn load(&self, address: Ipv4Addr) -> Result<Option<GeoRecord>, LookupError> {
        let Some(country) = self.field_value(address, GeoField::Country).await? else {
            return Ok(None);
        };
        let Some(city) = self.field_value(address, GeoField::City).await? else {
            return Ok(None);
        };
        let Some(region) = self.field_value(address, GeoField::Region).await? else {
            return Ok(None);
        };
        let Some(district) = self.field_value(address, GeoField::District).await? else {
            return Ok(None);
        };

        debug!("Cache hit for {address}");
        Ok(Some(GeoRecord {
            country,
            city,
            region,
            district,
        }))
    }

    /// Writes all four fields unconditionally with the configured
    /// expiration (0 = no expiration).
    pub(crate) async fn save(
        &self,
        address: Ipv4Addr,
        record: &GeoRecord,
    ) -> Result<(), LookupError> {
        for field in GeoField::iter() {
            self.store
                .set(
                    &cache_key(&self.prefix, address, field),
                    record.field(field),
                    self.expire_secs,
                )
                .await?;
        }
        Ok(())
    }

    async fn field_value(
        &self,
        address: Ipv4Addr,
        field: GeoField,
    ) -> Result<Option<String>, LookupError> {
        let value = self
            .store
            .get(&cache_key(&self.prefix, address, field))
            .await?;
        if value.is_none() {
            debug!("Cache miss for {address}: {field} not cached");
        }
        Ok(value)
    }
}
