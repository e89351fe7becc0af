//! HTTP client and logger initialization.

mod client;
mod logger;

pub use client::init_http_client;
pub use logger::init_logger_with;
