//! The fetch → filter → collect pipeline behind every cache refresh.
//!
//! ```text
//! top_items ──► fan_out (one task per id) ──► take(limit) ──► Vec<Story>
//!                    ▲                              │
//!                    └──────── CancellationToken ◄──┘
//! ```
//!
//! [`take`] asserts the shared token once it has enough stories, and
//! [`FanOut::shutdown`] then waits for the remaining workers so that no
//! task outlives [`Pipeline::run`].

pub mod fan_out;
pub mod take;

pub use fan_out::{FAN_IN_BUFFER, FanOut, fan_out};
pub use take::take;

use std::sync::Arc;

use futures_util::StreamExt;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::telemetry;
use crate::traits::ItemSource;
use crate::types::{Limit, Story};
use crate::{QuietHnError, Result};

/// One full listing + fan-out + collection pass against an [`ItemSource`].
#[derive(Clone)]
pub struct Pipeline {
    source: Arc<dyn ItemSource>,
    limit: Limit,
}

impl Pipeline {
    pub fn new(source: Arc<dyn ItemSource>, limit: Limit) -> Self {
        Self { source, limit }
    }

    pub fn limit(&self) -> Limit {
        self.limit
    }

    /// List the top ids and collect up to `limit` qualifying stories.
    ///
    /// The result is in completion order. A listing failure is the only
    /// error; per-item failures just shrink the result.
    pub async fn run(&self) -> Result<Vec<Story>> {
        let ids = self.source.top_items().await.map_err(|e| {
            metrics::counter!(telemetry::LISTING_FAILURES_TOTAL).increment(1);
            warn!(error = %e, "listing top items failed");
            QuietHnError::Listing
        })?;
        debug!(ids = ids.len(), limit = %self.limit, "listed top items");

        let capacity = self.limit.capacity_hint().min(ids.len());
        let cancel = CancellationToken::new();
        let mut workers = fan_out(Arc::clone(&self.source), ids, cancel.clone());

        let mut stories = Vec::with_capacity(capacity);
        {
            let mut taken = take(&mut workers, cancel.clone(), self.limit);
            while let Some(story) = taken.next().await {
                stories.push(story);
            }
        }

        cancel.cancel();
        workers.shutdown().await;
        debug!(stories = stories.len(), "collected stories");
        Ok(stories)
    }
}
