//! Common traits for topstory.
//!
//! These traits define the interfaces that different implementations can satisfy,
//! so hosts and tests can substitute fakes for the network-backed pieces.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::Story;

// ═══════════════════════════════════════════════════════════════════════════════
// SERVICE TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// The "get top story" capability exposed to callers.
///
/// The production implementation is a read-through cache over a
/// [`StoryFetcher`]; tests and hosts can provide their own.
#[async_trait]
pub trait TopStoryService: Send + Sync {
    /// Returns the current top story, or the upstream failure that prevented it.
    async fn top_story(&self) -> Result<Story>;
}

// ═══════════════════════════════════════════════════════════════════════════════
// FETCHER TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// Interface for the remote pipeline that builds a [`Story`] from scratch.
///
/// # Flow
/// 1. Fetch the ranked list of top item identifiers, take the first
/// 2. Fetch that item's title
/// 3. Fetch that item's author
#[async_trait]
pub trait StoryFetcher: Send + Sync {
    /// Runs the full pipeline. No caching happens at this level.
    async fn fetch_top_story(&self) -> Result<Story>;
}

#[async_trait]
impl<T: StoryFetcher + ?Sized> StoryFetcher for Arc<T> {
    async fn fetch_top_story(&self) -> Result<Story> {
        (**self).fetch_top_story().await
    }
}

#[async_trait]
impl<T: TopStoryService + ?Sized> TopStoryService for Arc<T> {
    async fn top_story(&self) -> Result<Story> {
        (**self).top_story().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TopStoryError;

    struct Fixed(Option<Story>);

    #[async_trait]
    impl StoryFetcher for Fixed {
        async fn fetch_top_story(&self) -> Result<Story> {
            self.0.clone().ok_or(TopStoryError::EmptyTopStories)
        }
    }

    #[async_trait]
    impl TopStoryService for Fixed {
        async fn top_story(&self) -> Result<Story> {
            self.fetch_top_story().await
        }
    }

    #[tokio::test]
    async fn test_arc_forwards_fetcher() {
        let fetcher = Arc::new(Fixed(Some(Story::new("t", "a"))));
        let story = fetcher.fetch_top_story().await.unwrap();
        assert_eq!(story, Story::new("t", "a"));
    }

    #[tokio::test]
    async fn test_service_as_trait_object() {
        let service: Arc<dyn TopStoryService> = Arc::new(Fixed(None));
        let err = service.top_story().await.unwrap_err();
        assert!(matches!(err, TopStoryError::EmptyTopStories));
    }
}
