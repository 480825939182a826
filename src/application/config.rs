use crate::constants::{
    DEFAULT_CACHE_DIR, DEFAULT_RATE_LIMIT_BURST_SIZE, DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
    DEFAULT_TIMEOUT_SECS,
};
use crate::utils::config::{get_env_flag, get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration used to build the default HTTP client
pub struct Config {
    /// Base URI every resource path is resolved against
    pub base_uri: String,
    /// Timeout in seconds for each request
    pub timeout: u64,
    /// Logs every request and response through the `debug` middleware
    pub debug: bool,
    /// Headers sent with every request
    pub default_headers: BTreeMap<String, String>,
    /// HTTP cache configuration
    pub cache: CacheConfig,
    /// Optional client-side rate limiting
    pub rate_limiter: Option<RateLimiterConfig>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the HTTP cache middleware
pub struct CacheConfig {
    /// Attaches the cache middleware when true
    pub enabled: bool,
    /// Directory used by the disk cache manager
    pub dir: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for rate limiting API requests
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Maximum number of requests that can be made at once
    pub burst_size: u32,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            dir: DEFAULT_CACHE_DIR.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_uri: String::new(),
            timeout: DEFAULT_TIMEOUT_SECS,
            debug: false,
            default_headers: BTreeMap::new(),
            cache: CacheConfig::default(),
            rate_limiter: None,
        }
    }
}

impl Config {
    /// Creates a configuration from environment variables
    ///
    /// A `.env` file is loaded first when present. Recognised variables:
    ///
    /// * `SNORLAX_BASE_URI`
    /// * `SNORLAX_TIMEOUT` (seconds)
    /// * `SNORLAX_DEBUG`
    /// * `SNORLAX_CACHE`
    /// * `SNORLAX_CACHE_DIR`
    /// * `SNORLAX_RATE_LIMIT_MAX_REQUESTS` (enables rate limiting)
    /// * `SNORLAX_RATE_LIMIT_PERIOD_SECONDS`
    /// * `SNORLAX_RATE_LIMIT_BURST_SIZE`
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let rate_limiter =
            get_env_or_none::<u32>("SNORLAX_RATE_LIMIT_MAX_REQUESTS").map(|max_requests| {
                RateLimiterConfig {
                    max_requests,
                    period_seconds: get_env_or_default(
                        "SNORLAX_RATE_LIMIT_PERIOD_SECONDS",
                        DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
                    ),
                    burst_size: get_env_or_default(
                        "SNORLAX_RATE_LIMIT_BURST_SIZE",
                        DEFAULT_RATE_LIMIT_BURST_SIZE,
                    ),
                }
            });

        Config {
            base_uri: get_env_or_default("SNORLAX_BASE_URI", String::new()),
            timeout: get_env_or_default("SNORLAX_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            debug: get_env_flag("SNORLAX_DEBUG", false),
            default_headers: BTreeMap::new(),
            cache: CacheConfig {
                enabled: get_env_flag("SNORLAX_CACHE", false),
                dir: get_env_or_default("SNORLAX_CACHE_DIR", DEFAULT_CACHE_DIR.to_string()),
            },
            rate_limiter,
        }
    }

    /// Sets the base URI
    #[must_use]
    pub fn with_base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.base_uri = base_uri.into();
        self
    }

    /// Sets the request timeout in seconds
    #[must_use]
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enables or disables request logging
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Enables or disables the HTTP cache
    #[must_use]
    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.cache.enabled = enabled;
        self
    }

    /// Sets the cache directory
    #[must_use]
    pub fn with_cache_dir(mut self, dir: impl Into<String>) -> Self {
        self.cache.dir = dir.into();
        self
    }

    /// Adds a header sent with every request
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    /// Enables client-side rate limiting
    #[must_use]
    pub fn with_rate_limiter(mut self, rate_limiter: RateLimiterConfig) -> Self {
        self.rate_limiter = Some(rate_limiter);
        self
    }
}
