//! Builder for configuring front page instances

use std::sync::Arc;
use std::time::Duration;

use super::FrontPage;
use crate::cache::{CacheConfig, StoryCache};
use crate::pipeline::Pipeline;
use crate::traits::ItemSource;
use crate::types::Limit;
use crate::{QuietHnError, Result};

/// Main entry point for creating front page instances.
pub struct QuietHn;

impl QuietHn {
    /// Create a new builder for configuring the front page.
    pub fn builder() -> QuietHnBuilder {
        QuietHnBuilder::new()
    }
}

/// Builder for configuring front page instances.
///
/// ```rust,no_run
/// # use quiet_hn::{Limit, QuietHn};
/// # use std::time::Duration;
/// let front_page = QuietHn::builder()
///     .hacker_news()
///     .num_stories(Limit::AtMost(30))
///     .cache_ttl(Duration::from_secs(3))
///     .build()?;
/// # Ok::<(), quiet_hn::QuietHnError>(())
/// ```
pub struct QuietHnBuilder {
    source: Option<Arc<dyn ItemSource>>,
    num_stories: Limit,
    cache: CacheConfig,
    #[cfg(feature = "hacker-news")]
    hacker_news_url: Option<String>,
    #[cfg(feature = "hacker-news")]
    upstream_timeout: Option<Duration>,
}

impl QuietHnBuilder {
    pub fn new() -> Self {
        Self {
            source: None,
            num_stories: Limit::default(),
            cache: CacheConfig::default(),
            #[cfg(feature = "hacker-news")]
            hacker_news_url: None,
            #[cfg(feature = "hacker-news")]
            upstream_timeout: None,
        }
    }

    /// Use a custom item source. Takes precedence over [`hacker_news`](Self::hacker_news).
    pub fn source(mut self, source: Arc<dyn ItemSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Read from the public Hacker News API.
    #[cfg(feature = "hacker-news")]
    pub fn hacker_news(self) -> Self {
        self.hacker_news_url(crate::providers::hacker_news::DEFAULT_BASE_URL)
    }

    /// Read from a Hacker News compatible API at `base_url`.
    #[cfg(feature = "hacker-news")]
    pub fn hacker_news_url(mut self, base_url: impl Into<String>) -> Self {
        self.hacker_news_url = Some(base_url.into());
        self
    }

    /// Per-request timeout for the Hacker News client.
    #[cfg(feature = "hacker-news")]
    pub fn upstream_timeout(mut self, timeout: Duration) -> Self {
        self.upstream_timeout = Some(timeout);
        self
    }

    /// How many qualifying stories a refresh collects (default 30).
    pub fn num_stories(mut self, limit: Limit) -> Self {
        self.num_stories = limit;
        self
    }

    /// How long a refreshed set is served.
    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache = self.cache.ttl(ttl);
        self
    }

    /// Replace the whole cache configuration.
    pub fn cache(mut self, config: CacheConfig) -> Self {
        self.cache = config;
        self
    }

    /// Build the front page.
    pub fn build(self) -> Result<FrontPage> {
        let source = match self.source {
            Some(source) => source,
            None => self.default_source()?,
        };

        let pipeline = Pipeline::new(source, self.num_stories);
        Ok(FrontPage::new(StoryCache::new(&self.cache), pipeline))
    }

    #[cfg(feature = "hacker-news")]
    fn default_source(&self) -> Result<Arc<dyn ItemSource>> {
        use crate::providers::HackerNewsClient;
        use crate::providers::hacker_news::DEFAULT_TIMEOUT;

        let url = self
            .hacker_news_url
            .as_deref()
            .ok_or_else(|| QuietHnError::Configuration("no item source configured".into()))?;
        let timeout = self.upstream_timeout.unwrap_or(DEFAULT_TIMEOUT);
        Ok(Arc::new(HackerNewsClient::with_timeout(url, timeout)))
    }

    #[cfg(not(feature = "hacker-news"))]
    fn default_source(&self) -> Result<Arc<dyn ItemSource>> {
        Err(QuietHnError::Configuration(
            "no item source configured".into(),
        ))
    }
}

impl Default for QuietHnBuilder {
    fn default() -> Self {
        Self::new()
    }
}
