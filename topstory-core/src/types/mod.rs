//! Domain types for topstory.
//!
//! - [`Story`]: the cached result record (title and author)
//! - [`ItemId`]: transient identifier used while fetching, never cached

mod item;
mod story;

pub use item::ItemId;
pub use story::Story;
