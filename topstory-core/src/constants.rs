//! Upstream endpoints and cache defaults.

/// Public base URL of the Hacker News item API.
pub const DEFAULT_BASE_URL: &str = "https://hacker-news.firebaseio.com";

/// Path of the ranked list of top story identifiers.
pub const TOP_STORIES_PATH: &str = "v0/topstories.json";

/// Cache key under which the single top story is stored.
pub const TOP_STORY_CACHE_KEY: &str = "top-story";

/// Absolute expiration of a cached top story, in seconds.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 10;

/// Request timeout for upstream calls, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Path of a single field of an item, e.g. `v0/item/101/title.json`.
pub fn item_field_path(id: &str, field: &str) -> String {
    format!("v0/item/{}/{}.json", id, field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_field_path() {
        assert_eq!(item_field_path("101", "title"), "v0/item/101/title.json");
        assert_eq!(item_field_path("101", "by"), "v0/item/101/by.json");
    }

    #[test]
    fn test_paths_are_relative() {
        // Joined onto the base URL, so they must not start with a slash
        assert!(!TOP_STORIES_PATH.starts_with('/'));
        assert!(!item_field_path("1", "by").starts_with('/'));
    }
}
