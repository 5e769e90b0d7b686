//! App state: top story service and config.

use std::sync::Arc;

use tracing::warn;

use topstory_client::{CachedTopStoryService, ServiceConfig};
use topstory_core::constants::{DEFAULT_BASE_URL, DEFAULT_CACHE_TTL_SECS, DEFAULT_TIMEOUT_SECS};
use topstory_core::error::Result;
use topstory_core::traits::TopStoryService;

/// Server configuration, usually read from the environment.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Upstream item API base URL
    pub base_url: String,
    /// Upstream request timeout in seconds
    pub timeout_seconds: u64,
    /// Absolute expiration of the cached story in seconds
    pub cache_ttl_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            cache_ttl_seconds: DEFAULT_CACHE_TTL_SECS,
        }
    }
}

impl ApiConfig {
    /// Loads `.env` if present, then reads `HN_API_BASE_URL`,
    /// `HN_TIMEOUT_SECONDS` and `TOP_STORY_CACHE_TTL_SECS`.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        Self {
            base_url: std::env::var("HN_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.into()),
            timeout_seconds: env_u64("HN_TIMEOUT_SECONDS")
                .filter(|&secs| {
                    if secs == 0 {
                        warn!("HN_TIMEOUT_SECONDS=0 would fail every request, using default");
                    }
                    secs > 0
                })
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            cache_ttl_seconds: env_u64("TOP_STORY_CACHE_TTL_SECS")
                .unwrap_or(DEFAULT_CACHE_TTL_SECS),
        }
    }

    /// Converts into the client service configuration.
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig::with_base_url(&self.base_url)
            .timeout_seconds(self.timeout_seconds)
            .cache_ttl_seconds(self.cache_ttl_seconds)
    }
}

fn env_u64(key: &str) -> Option<u64> {
    parse_u64(key, std::env::var(key).ok())
}

fn parse_u64(key: &str, raw: Option<String>) -> Option<u64> {
    let raw = raw?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, value = %raw, error = %e, "Ignoring unparsable setting, using default");
            None
        }
    }
}

/// Shared state handed to every handler.
pub struct AppState {
    /// Active configuration
    pub config: ApiConfig,
    /// The top story capability
    pub service: Arc<dyn TopStoryService>,
}

impl AppState {
    /// Builds the state with the cached Hacker News service.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let service = CachedTopStoryService::with_config(config.service_config())?;
        Ok(Self::with_service(config, Arc::new(service)))
    }

    /// Builds the state around any service implementation.
    pub fn with_service(config: ApiConfig, service: Arc<dyn TopStoryService>) -> Self {
        Self { config, service }
    }
}
