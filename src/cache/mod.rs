//! Single-slot TTL cache for the front page.
//!
//! [`StoryCache`] keeps exactly one [`Stories`] set plus its expiry
//! instant. Every [`StoryCache::get_or_refresh`] call holds one async mutex
//! for its whole duration, refresh included:
//!
//! - a fresh entry is returned without touching upstream;
//! - an empty or expired entry is rebuilt by the caller-supplied refresh,
//!   and concurrent callers queue on the lock and then all see that result;
//! - a failed refresh leaves the previous entry exactly as it was.
//!
//! Time comes from [`tokio::time::Instant`], so tests can pause and advance
//! the clock.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::Result;
use crate::telemetry;
use crate::types::{Stories, Story};

/// Configuration for the story cache.
///
/// ```rust
/// # use quiet_hn::CacheConfig;
/// # use std::time::Duration;
/// let config = CacheConfig::new().ttl(Duration::from_secs(30));
/// assert_eq!(config.ttl, Duration::from_secs(30));
/// ```
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// How long a refreshed set is served before the next refresh. Default: 3s.
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(3),
        }
    }
}

impl CacheConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the time-to-live of a refreshed set.
    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

struct CacheEntry {
    stories: Stories,
    expires_at: Instant,
}

impl CacheEntry {
    /// The start-of-process entry: empty, hence already stale.
    fn empty() -> Self {
        Self {
            stories: Arc::from(Vec::new()),
            expires_at: Instant::now(),
        }
    }

    /// Fresh means non-empty and strictly before expiry.
    fn is_fresh(&self, now: Instant) -> bool {
        !self.stories.is_empty() && now < self.expires_at
    }
}

/// Holds the last collected front page and serialises refreshes.
///
/// The entry is only reachable through the lock.
pub struct StoryCache {
    entry: Mutex<CacheEntry>,
    ttl: Duration,
}

impl StoryCache {
    /// Create an empty cache from the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            entry: Mutex::new(CacheEntry::empty()),
            ttl: config.ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the cached set if it is fresh, otherwise rebuild it with
    /// `refresh`.
    ///
    /// A rebuilt set is sorted by descending id (newest first) before it is
    /// stored. An error from `refresh` is returned as is and the stored
    /// entry is left untouched.
    pub async fn get_or_refresh<F, Fut>(&self, refresh: F) -> Result<Stories>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<Story>>>,
    {
        let mut entry = self.entry.lock().await;

        if entry.is_fresh(Instant::now()) {
            metrics::counter!(telemetry::CACHE_HITS_TOTAL).increment(1);
            debug!("returning cached stories");
            return Ok(Arc::clone(&entry.stories));
        }
        metrics::counter!(telemetry::CACHE_MISSES_TOTAL).increment(1);

        let started = Instant::now();
        let mut stories = refresh().await?;
        stories.sort_unstable_by(|a, b| b.id().cmp(&a.id()));

        let now = Instant::now();
        metrics::histogram!(telemetry::REFRESH_DURATION_SECONDS)
            .record(now.duration_since(started).as_secs_f64());

        *entry = CacheEntry {
            stories: stories.into(),
            expires_at: now + self.ttl,
        };
        info!(
            stories = entry.stories.len(),
            ttl_secs = self.ttl.as_secs_f64(),
            "refreshed story cache"
        );
        Ok(Arc::clone(&entry.stories))
    }

    /// The stored set, fresh or not.
    pub async fn snapshot(&self) -> Stories {
        Arc::clone(&self.entry.lock().await.stories)
    }

    /// When the stored set stops being served.
    pub async fn expires_at(&self) -> Instant {
        self.entry.lock().await.expires_at
    }
}

impl Default for StoryCache {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}
