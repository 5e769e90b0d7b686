//! # topstory client
//!
//! Fetches the current Hacker News top story and caches it briefly.
//!
//! - [`HackerNewsClient`]: the three-step remote pipeline (list, title, author)
//! - [`CachedTopStoryService`]: read-through cache in front of any [`StoryFetcher`]
//!
//! ```rust,ignore
//! use topstory_client::{CachedTopStoryService, ServiceConfig};
//!
//! let service = CachedTopStoryService::with_config(ServiceConfig::default())?;
//! let story = service.top_story().await?;
//! println!("{} by {}", story.title, story.author);
//! ```
//!
//! [`StoryFetcher`]: topstory_core::StoryFetcher

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod client;
mod service;

pub use client::{ClientConfig, HackerNewsClient};
pub use service::{CachedTopStoryService, ServiceConfig};
pub use topstory_cache::{CacheConfig, TtlCache};
