//! DTOs for API responses.

use serde::Serialize;
use topstory_core::types::Story;

/// Response for the top story endpoint.
#[derive(Debug, Serialize)]
pub struct TopStoryResponse {
    /// Story headline
    pub title: String,
    /// Submitter's handle
    pub author: String,
}

impl From<Story> for TopStoryResponse {
    fn from(story: Story) -> Self {
        Self {
            title: story.title,
            author: story.author,
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status
    pub status: String,
    /// Version
    pub version: String,
    /// Uptime in seconds
    pub uptime_seconds: u64,
    /// Absolute expiration of the cached story in seconds
    pub cache_ttl_seconds: u64,
}
