//! Configuration module

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Default Attestation Collector base URL (in-cluster service name)
pub const DEFAULT_COLLECTOR_URL: &str = "http://attestation-collector:8080";

/// Default listen port
pub const DEFAULT_PORT: u16 = 8080;

/// How often the collector is polled
pub const POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Upper bound for a single collector request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the frontend bundle is mounted in the container image
pub const STATIC_DIR: &str = "/app/static";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Attestation Collector base URL
    pub collector_url: String,

    /// Server port
    pub port: u16,

    /// Collector poll period
    pub poll_interval: Duration,

    /// Collector request timeout
    pub request_timeout: Duration,

    /// Frontend bundle directory
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            collector_url: DEFAULT_COLLECTOR_URL.to_string(),
            port: DEFAULT_PORT,
            poll_interval: POLL_INTERVAL,
            request_timeout: REQUEST_TIMEOUT,
            static_dir: PathBuf::from(STATIC_DIR),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    /// Empty values count as unset.
    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let defaults = Self::default();

        Self {
            collector_url: get("COLLECTOR_URL").unwrap_or(defaults.collector_url),

            port: get("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),

            ..defaults
        }
    }
}
