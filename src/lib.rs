//! quiet-hn - A quiet Hacker News front page
//!
//! This crate fetches the ranked list of top items, retrieves every item
//! concurrently, keeps the stories that link somewhere, and serves the first
//! N of them from a short-lived single-slot cache so upstream is not hit on
//! every request.
//!
//! The moving parts, leaves first:
//!
//! - [`Story::enrich`] / [`Story::qualifies`]: host extraction and the
//!   "is a story with a link" rule
//! - [`pipeline::fan_out`]: one task per id, unordered output stream
//! - [`pipeline::take`]: bounded collection with advisory early stop
//! - [`StoryCache`]: single-slot TTL cache, refreshes serialised by a lock
//! - [`FrontPage`]: per-request entry point handing results to a
//!   [`Renderer`]
//!
//! # Example
//!
//! ```rust,no_run
//! use quiet_hn::{Limit, QuietHn};
//!
//! #[tokio::main]
//! async fn main() -> quiet_hn::Result<()> {
//!     let front_page = QuietHn::builder()
//!         .hacker_news()
//!         .num_stories(Limit::AtMost(10))
//!         .build()?;
//!
//!     let page = front_page.load().await?;
//!     for story in page.stories.iter() {
//!         println!("{} ({})", story.title(), story.host());
//!     }
//!     println!("loaded in {:?}", page.elapsed);
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod error;
pub mod frontpage;
pub mod pipeline;
pub mod providers;
#[cfg(feature = "server")]
pub mod server;
pub mod telemetry;
pub mod traits;
pub mod types;

// Re-export main types at crate root
pub use cache::{CacheConfig, StoryCache};
pub use error::{QuietHnError, Result};
pub use frontpage::{FrontPage, QuietHn, QuietHnBuilder};
pub use pipeline::Pipeline;
pub use traits::{FrontPageView, ItemSource, Renderer};
pub use types::{Item, ItemId, Limit, STORY_KIND, Stories, Story, UNSAFE_HREF};
