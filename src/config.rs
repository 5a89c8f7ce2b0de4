use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_MAX_WORKERS: usize = 8;
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} is not a valid URL: {reason}")]
    InvalidUrl { key: &'static str, reason: String },

    #[error("{key} is not a valid socket address: {value}")]
    InvalidAddr { key: &'static str, value: String },

    #[error("{key} must be a positive number, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base: Url,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub fetch_timeout: Duration,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        let _ = dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_raw = get("DIRECTORY_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_base = Url::parse(api_raw.trim()).map_err(|e| ConfigError::InvalidUrl {
            key: "DIRECTORY_API_URL",
            reason: e.to_string(),
        })?;

        let addr_raw = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = addr_raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidAddr {
                key: "BIND_ADDR",
                value: addr_raw.clone(),
            })?;

        let max_workers = positive(get("MAX_WORKERS"), "MAX_WORKERS", DEFAULT_MAX_WORKERS)?;
        let timeout_secs = positive(
            get("FETCH_TIMEOUT_SECS"),
            "FETCH_TIMEOUT_SECS",
            DEFAULT_FETCH_TIMEOUT_SECS as usize,
        )?;

        Ok(Self {
            api_base,
            bind_addr,
            max_workers,
            fetch_timeout: Duration::from_secs(timeout_secs as u64),
        })
    }
}

fn positive(raw: Option<String>, key: &'static str, default: usize) -> Result<usize, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => match value.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(ConfigError::InvalidNumber { key, value }),
        },
    }
}
