//! Read-through cache in front of the remote fetch pipeline.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use topstory_cache::{CacheConfig, TtlCache};
use topstory_core::constants::TOP_STORY_CACHE_KEY;
use topstory_core::error::Result;
use topstory_core::traits::{StoryFetcher, TopStoryService};
use topstory_core::types::Story;

use crate::client::{ClientConfig, HackerNewsClient};

/// Service configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Upstream HTTP configuration
    pub client: ClientConfig,
    /// Cache configuration
    pub cache: CacheConfig,
}

impl ServiceConfig {
    /// Creates a config with the given upstream base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: ClientConfig::new(base_url),
            ..Default::default()
        }
    }

    /// Sets the absolute expiration of the cached story.
    pub fn cache_ttl_seconds(mut self, seconds: u64) -> Self {
        self.cache.default_ttl_seconds = seconds;
        self
    }

    /// Sets the upstream request timeout.
    pub fn timeout_seconds(mut self, seconds: u64) -> Self {
        self.client.timeout_seconds = seconds;
        self
    }
}

/// Top story service backed by a [`StoryFetcher`] and an owned [`TtlCache`].
///
/// Serves the top story by:
/// 1. Returning the cached story if it was stored less than one TTL ago
/// 2. Otherwise running the fetcher's full pipeline
/// 3. Storing the fresh story with a new absolute expiration
///
/// Failures are never cached. Concurrent misses are not coalesced, so each may
/// reach the upstream on its own.
pub struct CachedTopStoryService<F = HackerNewsClient> {
    fetcher: F,
    cache: Arc<TtlCache<Story>>,
}

impl CachedTopStoryService<HackerNewsClient> {
    /// Creates a service talking to the real API with default configuration.
    pub fn new_default() -> Result<Self> {
        Self::with_config(ServiceConfig::default())
    }

    /// Creates a service with custom configuration.
    pub fn with_config(config: ServiceConfig) -> Result<Self> {
        let client = HackerNewsClient::with_config(config.client)?;
        let cache = Arc::new(TtlCache::with_config(config.cache));
        Ok(Self::new(client, cache))
    }
}

impl<F: StoryFetcher> CachedTopStoryService<F> {
    /// Creates a service from a fetcher and the cache it should own.
    pub fn new(fetcher: F, cache: Arc<TtlCache<Story>>) -> Self {
        Self { fetcher, cache }
    }

    /// Returns the cache holding the top story.
    pub fn cache(&self) -> &Arc<TtlCache<Story>> {
        &self.cache
    }

    /// Returns the top story, fetching it only when the cached copy is missing or expired.
    #[instrument(skip(self))]
    pub async fn top_story(&self) -> Result<Story> {
        if let Some(story) = self.cache.get(TOP_STORY_CACHE_KEY) {
            debug!("Top story cache hit");
            return Ok(story);
        }

        debug!("Top story cache miss, fetching");

        let story = self.fetcher.fetch_top_story().await?;

        info!(title = %story.title, author = %story.author, "Fetched top story");

        self.cache.set(TOP_STORY_CACHE_KEY, story.clone());

        Ok(story)
    }
}

#[async_trait]
impl<F: StoryFetcher> TopStoryService for CachedTopStoryService<F> {
    async fn top_story(&self) -> Result<Story> {
        CachedTopStoryService::top_story(self).await
    }
}
