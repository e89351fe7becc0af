//! Shared fixtures for the integration suite.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::{bail, Result};
use async_trait::async_trait;
use encoding_rs::WINDOWS_1251;

use ipgeobase_client::{ClientConfig, KeyValueStore};

/// The address most fixtures answer for.
pub const ADDRESS: &str = "5.102.159.150";

/// Store double that counts traffic and can be preloaded.
#[derive(Default)]
pub struct RecordingStore {
    entries: Mutex<HashMap<String, String>>,
    /// Number of `get` calls observed.
    pub gets: AtomicUsize,
    /// Number of `set` calls observed.
    pub sets: AtomicUsize,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preload(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    pub fn get_count(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn set_count(&self) -> usize {
        self.sets.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KeyValueStore for RecordingStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str, _expire_secs: u32) -> Result<()> {
        self.sets.fetch_add(1, Ordering::SeqCst);
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store whose every call fails, for fail-closed coverage.
pub struct FailingStore;

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        bail!("store connection reset")
    }

    async fn set(&self, _key: &str, _value: &str, _expire_secs: u32) -> Result<()> {
        bail!("store connection reset")
    }
}

/// Config pointing at a mock server instead of the real endpoint.
pub fn test_config(service_url: String) -> ClientConfig {
    ClientConfig {
        service_url,
        ..ClientConfig::default()
    }
}

/// XML answer for [`ADDRESS`] with the given field elements, as UTF-8 text
/// carrying a windows-1251 declaration (what the service emits, pre-encode).
pub fn xml_answer(fields: &[(&str, &str)]) -> String {
    let mut payload = String::from(
        "<?xml version=\"1.0\" encoding=\"windows-1251\"?>\n<ip-answer>\n<ip value=\"5.102.159.150\">\n",
    );
    for (tag, text) in fields {
        payload.push_str(&format!("<{tag}>{text}</{tag}>\n"));
    }
    payload.push_str("</ip>\n</ip-answer>\n");
    payload
}

/// The canonical found-answer, with the extra fields the service returns.
pub fn full_answer() -> String {
    xml_answer(&[
        ("inetnum", "5.102.152.0 - 5.102.159.255"),
        ("country", "RU"),
        ("city", "Екатеринбург"),
        ("region", "Свердловская область"),
        ("district", "Уральский федеральный округ"),
        ("lat", "56.837814"),
        ("lng", "60.596844"),
    ])
}

/// Encodes an answer into the windows-1251 bytes that go on the wire.
pub fn to_wire(answer: &str) -> Vec<u8> {
    let (bytes, _, _) = WINDOWS_1251.encode(answer);
    bytes.to_vec()
}
