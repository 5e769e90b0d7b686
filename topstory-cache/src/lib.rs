//! TTL cache for topstory.
//!
//! Generic in-memory cache with absolute (non-sliding) expiration.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod cache;

pub use cache::{CacheConfig, TtlCache};
