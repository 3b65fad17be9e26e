//! Upstream item records.

use serde::{Deserialize, Serialize};

/// Identifier of an upstream item. Unique across every kind.
pub type ItemId = u64;

/// An item as returned by the upstream detail endpoint.
///
/// Stories, comments, jobs and polls share this shape; fields that a kind
/// does not carry default to empty. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// Item kind tag ("story", "comment", "job", "poll", ...).
    #[serde(rename = "type", default)]
    pub kind: String,
    /// External link. Empty for text posts and non-story kinds.
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub by: String,
    #[serde(default)]
    pub score: i64,
    /// Creation time, unix seconds.
    #[serde(default)]
    pub time: i64,
    /// Total comment count.
    #[serde(default)]
    pub descendants: u32,
    #[serde(default)]
    pub kids: Vec<ItemId>,
    #[serde(default)]
    pub text: String,
}

impl Item {
    /// Create an item with the given id and kind, every other field empty.
    pub fn new(id: ItemId, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
            ..Default::default()
        }
    }

    /// Set the external link.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}
