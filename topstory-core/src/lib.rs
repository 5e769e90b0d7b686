//! # topstory core
//!
//! Core types, errors, and traits shared by every topstory crate:
//!
//! - **Types**: the [`Story`] record and the transient [`ItemId`]
//! - **Errors**: [`TopStoryError`] and the crate-wide [`Result`] alias
//! - **Constants**: upstream endpoint paths, cache key, and default TTL
//! - **Traits**: [`TopStoryService`] and [`StoryFetcher`], the seams hosts and tests plug into
//!
//! ## Example
//!
//! ```rust
//! use topstory_core::Story;
//!
//! let story = Story::new("Example Headline", "alice");
//! let json = serde_json::to_string(&story).unwrap();
//! assert_eq!(json, r#"{"title":"Example Headline","author":"alice"}"#);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use constants::*;
pub use error::{Result, TopStoryError};
pub use traits::*;
pub use types::*;
