//! Client configuration.
//!
//! This module provides:
//! - Configuration constants (endpoint, timeouts, cache defaults)
//! - The [`ClientConfig`] struct and logging option types

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{ClientConfig, LogFormat, LogLevel};
