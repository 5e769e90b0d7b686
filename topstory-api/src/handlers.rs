//! API route handlers.

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, Json};
use tracing::debug;

use topstory_core::traits::TopStoryService;

use crate::dto::{HealthResponse, TopStoryResponse};
use crate::error::ApiError;
use crate::state::AppState;

type Result<T> = std::result::Result<T, ApiError>;

static START_TIME: std::sync::OnceLock<Instant> = std::sync::OnceLock::new();

/// Records the process start for uptime reporting. Later calls are no-ops.
pub(crate) fn mark_started() {
    START_TIME.get_or_init(Instant::now);
}

/// GET /api/v1/top-story
pub async fn top_story(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TopStoryResponse>> {
    let story = state.service.top_story().await?;

    debug!(title = %story.title, "Serving top story");

    Ok(Json(TopStoryResponse::from(story)))
}

/// GET /health
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> Json<HealthResponse> {
    let start = START_TIME.get_or_init(Instant::now);

    Json(HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        uptime_seconds: start.elapsed().as_secs(),
        cache_ttl_seconds: state.config.cache_ttl_seconds,
    })
}
