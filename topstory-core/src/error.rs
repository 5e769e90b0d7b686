//! Error types for topstory.
//!
//! Every failure on the way to a [`Story`](crate::Story) is an upstream failure
//! of some kind. The variants keep transport, status, and decoding problems apart
//! for logging; callers that only care about "could not retrieve top story" can
//! use [`TopStoryError::is_upstream_failure`].

use thiserror::Error;

/// Result type alias using `TopStoryError`.
pub type Result<T> = std::result::Result<T, TopStoryError>;

/// Main error type for all topstory operations.
#[derive(Debug, Error)]
pub enum TopStoryError {
    // ═══════════════════════════════════════════════════════════════════════════
    // UPSTREAM ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Transport-level failure (connect, timeout, body read).
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// The upstream answered with a non-success status.
    #[error("Upstream returned HTTP {status} for {url}")]
    UpstreamStatus { url: String, status: u16 },

    /// The response body did not have the expected JSON shape.
    #[error("Failed to decode response from {url}: {reason}")]
    DecodeError { url: String, reason: String },

    /// The ranked list of top stories was empty.
    #[error("No items found in top stories")]
    EmptyTopStories,

    // ═══════════════════════════════════════════════════════════════════════════
    // CONFIGURATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Invalid configuration (base URL, HTTP client setup).
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl TopStoryError {
    /// Returns true if the error came from talking to the upstream API.
    pub fn is_upstream_failure(&self) -> bool {
        !matches!(self, TopStoryError::ConfigError(_))
    }

    /// Returns the upstream status code, if the failure was a non-success response.
    pub fn status(&self) -> Option<u16> {
        match self {
            TopStoryError::UpstreamStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
