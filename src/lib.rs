//! ipgeobase_client library: IPv4 geolocation lookups.
//!
//! Resolves an IPv4 address to its country, city, region, and federal
//! district by querying the ipgeobase.ru service, with optional cache-aside
//! storage of the result fields in memcached (or any injected key-value
//! store).
//!
//! # Example
//!
//! ```no_run
//! use ipgeobase_client::{ClientConfig, GeoClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeoClient::new(ClientConfig::default())?;
//! let record = client.lookup("5.102.159.150").await?;
//! println!("{} / {}", record.country, record.city);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

mod address;
pub mod cache;
mod client;
pub mod config;
mod error;
mod fetch;
pub mod initialization;
mod parse;
mod record;

// Re-export public API
pub use cache::{KeyValueStore, MemcachedStore, MemoryStore};
pub use client::GeoClient;
pub use config::{ClientConfig, LogFormat, LogLevel};
pub use error::{InitializationError, LookupError};
pub use record::{GeoField, GeoRecord};
