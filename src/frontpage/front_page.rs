//! FrontPage - per-request entry point over the cache and pipeline

use tokio::time::Instant;
use tracing::{debug, error};

use crate::cache::StoryCache;
use crate::pipeline::Pipeline;
use crate::traits::{FrontPageView, Renderer};
use crate::types::Limit;
use crate::{QuietHnError, Result};

/// Serves the front page from a [`StoryCache`], refreshing it through a
/// [`Pipeline`] when needed.
///
/// Construct once at startup via [`QuietHn::builder()`](super::QuietHn::builder)
/// and share by reference (e.g. behind an `Arc`) across requests.
pub struct FrontPage {
    cache: StoryCache,
    pipeline: Pipeline,
}

impl FrontPage {
    pub(crate) fn new(cache: StoryCache, pipeline: Pipeline) -> Self {
        Self { cache, pipeline }
    }

    pub fn cache(&self) -> &StoryCache {
        &self.cache
    }

    pub fn num_stories(&self) -> Limit {
        self.pipeline.limit()
    }

    /// Fetch the current stories and how long that took.
    ///
    /// Fails only when a refresh was needed and the id listing failed.
    pub async fn load(&self) -> Result<FrontPageView> {
        let started = Instant::now();
        let stories = self
            .cache
            .get_or_refresh(|| self.pipeline.run())
            .await?;
        let elapsed = started.elapsed();
        debug!(stories = stories.len(), ?elapsed, "front page loaded");
        Ok(FrontPageView { stories, elapsed })
    }

    /// Load and render in one step.
    ///
    /// Any failure of `renderer` surfaces as [`QuietHnError::Render`], so
    /// callers can tell a load failure from a render failure through
    /// [`QuietHnError::public_message`].
    pub async fn serve(&self, renderer: &dyn Renderer) -> Result<String> {
        let page = self.load().await?;
        renderer.render(&page).map_err(|e| {
            error!(error = %e, "rendering front page failed");
            match e {
                QuietHnError::Render(_) => e,
                other => QuietHnError::Render(other.to_string()),
            }
        })
    }
}
