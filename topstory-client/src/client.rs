//! HTTP client for the Hacker News item API.
//!
//! Builds a [`Story`] from three GETs: the ranked top story list, then the
//! title and author of the first item.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};
use url::Url;

use topstory_core::constants::{
    item_field_path, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, TOP_STORIES_PATH,
};
use topstory_core::error::{Result, TopStoryError};
use topstory_core::traits::StoryFetcher;
use topstory_core::types::{ItemId, Story};

/// HTTP client configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the item API (e.g., "https://hacker-news.firebaseio.com")
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Creates a config pointing at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

/// Client for the three upstream lookups.
pub struct HackerNewsClient {
    base_url: Url,
    http_client: reqwest::Client,
}

impl HackerNewsClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a new client with custom configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut base_url = Url::parse(&config.base_url).map_err(|e| {
            TopStoryError::ConfigError(format!("Invalid base URL '{}': {}", config.base_url, e))
        })?;

        if base_url.cannot_be_a_base() {
            return Err(TopStoryError::ConfigError(format!(
                "Base URL cannot be joined: {}",
                config.base_url
            )));
        }

        // Relative joins replace the last segment unless the path ends in '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        if config.timeout_seconds == 0 {
            return Err(TopStoryError::ConfigError(
                "Request timeout must be at least one second".into(),
            ));
        }

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                TopStoryError::ConfigError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            base_url,
            http_client,
        })
    }

    /// Returns the normalized base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetches the ranked list of top stories and returns the first identifier.
    #[instrument(skip(self))]
    pub async fn top_item_id(&self) -> Result<ItemId> {
        let ids: Vec<ItemId> = self.get_json(TOP_STORIES_PATH).await?;

        let top = ids.into_iter().next().ok_or_else(|| {
            warn!("Top stories list is empty");
            TopStoryError::EmptyTopStories
        })?;

        debug!(id = %top, "Found top item");
        Ok(top)
    }

    /// Fetches the title of an item.
    #[instrument(skip(self))]
    pub async fn title(&self, id: &ItemId) -> Result<String> {
        self.get_json(&item_field_path(id.as_str(), "title")).await
    }

    /// Fetches the handle of the user who submitted an item.
    #[instrument(skip(self))]
    pub async fn author(&self, id: &ItemId) -> Result<String> {
        self.get_json(&item_field_path(id.as_str(), "by")).await
    }

    /// GETs a path under the base URL and decodes the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path)?;

        let response = self
            .http_client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| TopStoryError::HttpError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "Upstream request failed");
            return Err(TopStoryError::UpstreamStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| TopStoryError::HttpError(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| TopStoryError::DecodeError {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| TopStoryError::ConfigError(format!("Invalid endpoint '{}': {}", path, e)))
    }
}

#[async_trait]
impl StoryFetcher for HackerNewsClient {
    #[instrument(skip(self))]
    async fn fetch_top_story(&self) -> Result<Story> {
        let id = self.top_item_id().await?;

        // Both lookups depend only on the id
        let (title, author) = tokio::try_join!(self.title(&id), self.author(&id))?;

        debug!(id = %id, "Fetched top story");
        Ok(Story { title, author })
    }
}
