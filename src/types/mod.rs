//! Public types for the quiet-hn API.

mod item;
mod limit;
mod story;

use std::sync::Arc;

pub use item::{Item, ItemId};
pub use limit::Limit;
pub use story::{STORY_KIND, Story, UNSAFE_HREF};

/// A collected, sorted set of front page stories.
///
/// Shared read-only between the cache and every request that reads it.
pub type Stories = Arc<[Story]>;
