//! Upstream item identifiers.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque identifier of an upstream item.
///
/// The live API returns numbers while older mirrors return strings, so both
/// JSON forms are accepted. Only used between the list call and the field
/// lookups; a [`Story`](crate::Story) does not keep it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Creates an identifier from its textual form.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as it appears in item URLs.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => ItemId(s),
            Raw::Number(n) => ItemId(n.to_string()),
        })
    }
}
