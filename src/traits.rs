//! Collaborator traits consumed by the front page pipeline.

use std::time::Duration;

use async_trait::async_trait;

use crate::types::{Item, ItemId, Stories};
use crate::Result;

/// Upstream source of ranked item ids and item details.
///
/// [`HackerNewsClient`](crate::providers::HackerNewsClient) is the production
/// implementation; tests substitute in-memory sources.
#[async_trait]
pub trait ItemSource: Send + Sync {
    /// Ranked identifiers, best first.
    async fn top_items(&self) -> Result<Vec<ItemId>>;

    /// Detail record for a single identifier.
    async fn item(&self, id: ItemId) -> Result<Item>;
}

/// Everything the rendering layer needs for one response.
#[derive(Debug, Clone)]
pub struct FrontPageView {
    pub stories: Stories,
    /// Time spent obtaining `stories`, cache lookup included.
    pub elapsed: Duration,
}

/// Turns a [`FrontPageView`] into a response body.
pub trait Renderer: Send + Sync {
    fn render(&self, page: &FrontPageView) -> Result<String>;
}
