//! The top story record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A story as returned to callers: its headline and the submitter's handle.
///
/// Built fresh on every cache miss and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    /// Headline of the story
    pub title: String,
    /// Handle of the user who submitted it
    pub author: String,
}

impl Story {
    /// Creates a story from its title and author.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }
}

impl fmt::Display for Story {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (by {})", self.title, self.author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_serialization() {
        let story = Story::new("Example Headline", "alice");

        let json = serde_json::to_value(&story).unwrap();
        assert_eq!(json["title"], "Example Headline");
        assert_eq!(json["author"], "alice");

        let parsed: Story = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, story);
    }

    #[test]
    fn test_story_display() {
        let story = Story::new("Show HN: A thing", "bob");
        assert_eq!(story.to_string(), "Show HN: A thing (by bob)");
    }
}
