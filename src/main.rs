//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ipgeobase_client` library that
//! handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use ipgeobase_client::initialization::init_logger_with;
use ipgeobase_client::{ClientConfig, GeoClient, LogFormat, LogLevel};

/// Resolve an IPv4 address to country, city, region, and district.
#[derive(Debug, Parser)]
#[command(name = "ipgeobase_client", version, about)]
struct Opt {
    /// IPv4 address to resolve
    address: String,

    /// Cache lookup results in memcached
    #[arg(long)]
    use_cache: bool,

    /// Cache store host
    #[arg(long)]
    cache_host: Option<String>,

    /// Cache store port
    #[arg(long)]
    cache_port: Option<u16>,

    /// Cache entry TTL in seconds (0 = no expiration)
    #[arg(long)]
    cache_expire: Option<u32>,

    /// Cache key prefix
    #[arg(long)]
    cache_prefix: Option<String>,

    /// Geo service URL
    #[arg(long)]
    service_url: Option<String>,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    log_format: LogFormat,
}

impl Opt {
    fn into_config(self) -> (String, ClientConfig) {
        let defaults = ClientConfig::default();
        let config = ClientConfig {
            use_cache: self.use_cache,
            cache_host: self.cache_host.unwrap_or(defaults.cache_host),
            cache_port: self.cache_port.unwrap_or(defaults.cache_port),
            cache_expire: self.cache_expire.unwrap_or(defaults.cache_expire),
            cache_prefix: self.cache_prefix.unwrap_or(defaults.cache_prefix),
            service_url: self.service_url.unwrap_or(defaults.service_url),
            timeout_secs: defaults.timeout_secs,
            connect_timeout_secs: defaults.connect_timeout_secs,
        };
        (self.address, config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();

    let log_level = opt.log_level.clone();
    let log_format = opt.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let (address, config) = opt.into_config();
    let client = GeoClient::new(config).context("Failed to initialize HTTP client")?;

    match client.lookup(&address).await {
        Ok(record) => {
            println!("country:  {}", record.country);
            println!("city:     {}", record.city);
            println!("region:   {}", record.region);
            println!("district: {}", record.district);
            Ok(())
        }
        Err(e) => {
            eprintln!("ipgeobase_client error: {:#}", anyhow::Error::from(e));
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opt_defaults_fill_the_config() {
        let opt = Opt::parse_from(["ipgeobase_client", "5.102.159.150"]);
        let (address, config) = opt.into_config();
        assert_eq!(address, "5.102.159.150");
        assert!(!config.use_cache);
        assert_eq!(config.cache_port, 11211);
        assert_eq!(config.cache_prefix, "ipgeoclient");
    }

    #[test]
    fn test_opt_cache_flags_override_defaults() {
        let opt = Opt::parse_from([
            "ipgeobase_client",
            "5.102.159.150",
            "--use-cache",
            "--cache-host",
            "cache.internal",
            "--cache-port",
            "11311",
            "--cache-expire",
            "600",
            "--cache-prefix",
            "geo",
        ]);
        let (_, config) = opt.into_config();
        assert!(config.use_cache);
        assert_eq!(config.cache_host, "cache.internal");
        assert_eq!(config.cache_port, 11311);
        assert_eq!(config.cache_expire, 600);
        assert_eq!(config.cache_prefix, "geo");
    }
}
