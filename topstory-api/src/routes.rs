//! API route configuration.

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers;
use crate::state::AppState;

/// Creates the API router with all routes configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    handlers::mark_started();

    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))

        // Top story
        .route("/api/v1/top-story", get(handlers::top_story))

        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use topstory_core::error::{Result, TopStoryError};
    use topstory_core::traits::TopStoryService;
    use topstory_core::types::Story;

    use crate::state::ApiConfig;

    struct FakeService {
        story: Option<Story>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl TopStoryService for FakeService {
        async fn top_story(&self) -> Result<Story> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.story.clone().ok_or(TopStoryError::EmptyTopStories)
        }
    }

    fn test_app(story: Option<Story>) -> (Router, Arc<FakeService>) {
        let service = Arc::new(FakeService {
            story,
            calls: AtomicUsize::new(0),
        });
        let state = Arc::new(AppState::with_service(ApiConfig::default(), service.clone()));
        (create_router(state), service)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let (app, _) = test_app(None);

        let response = app.oneshot(get("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["cache_ttl_seconds"], 10);
    }

    #[tokio::test]
    async fn test_top_story() {
        let (app, service) = test_app(Some(Story::new("Example Headline", "alice")));

        let response = app.oneshot(get("/api/v1/top-story")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["title"], "Example Headline");
        assert_eq!(body["author"], "alice");
        assert_eq!(service.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_top_story_upstream_failure() {
        let (app, _) = test_app(None);

        let response = app.oneshot(get("/api/v1/top-story")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (app, _) = test_app(None);

        let response = app.oneshot(get("/api/v1/nope")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
