//! Upstream clients.
//!
//! Each client implements [`ItemSource`](crate::traits::ItemSource); the
//! pipeline only ever talks to the trait.

#[cfg(feature = "hacker-news")]
pub mod hacker_news;

#[cfg(feature = "hacker-news")]
pub use hacker_news::HackerNewsClient;
