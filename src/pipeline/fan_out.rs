//! Concurrent detail fetching with a single unordered output stream.
//!
//! One tokio task per identifier. Every task owns a clone of the channel
//! sender, so the stream ends exactly when the last task has finished.
//! Tasks honour a [`CancellationToken`] at two checkpoints: before the
//! upstream call and while emitting. In-flight upstream calls are never
//! interrupted.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::Stream;
use pin_project_lite::pin_project;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_stream::wrappers::ReceiverStream;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::telemetry;
use crate::traits::ItemSource;
use crate::types::{ItemId, Story};

/// Stories buffered between workers and the consumer.
///
/// Kept at the minimum so a worker only runs ahead of the consumer by a
/// single story; everything else waits in `send`.
pub const FAN_IN_BUFFER: usize = 1;

pin_project! {
    /// Unordered stream of qualifying stories produced by [`fan_out`].
    ///
    /// Owns the worker tasks. Call [`FanOut::shutdown`] once done reading to
    /// wait for every worker; dropping a `FanOut` instead aborts whatever is
    /// still running.
    pub struct FanOut {
        #[pin]
        stories: ReceiverStream<Story>,
        workers: JoinSet<()>,
    }
}

impl FanOut {
    /// Number of workers that have not been joined yet.
    pub fn pending_workers(&self) -> usize {
        self.workers.len()
    }

    /// Stop reading and wait for every worker to finish.
    ///
    /// Closing the receiving side first means no worker can stay parked on a
    /// full channel; workers in the middle of an upstream call finish that
    /// call and then exit without emitting.
    pub async fn shutdown(self) {
        let FanOut {
            stories,
            mut workers,
        } = self;
        drop(stories);

        while let Some(joined) = workers.join_next().await {
            if let Err(e) = joined {
                if e.is_panic() {
                    warn!(error = %e, "fan-out worker panicked");
                }
            }
        }
    }
}

impl Stream for FanOut {
    type Item = Story;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Story>> {
        self.project().stories.poll_next(cx)
    }
}

/// Fetch every id concurrently and stream the stories that qualify.
///
/// Fetch errors drop the id silently (logged at debug level). Output order
/// follows completion order, not `ids` order.
///
/// # Panics
///
/// Requires a tokio runtime context (called within an async fn).
pub fn fan_out(
    source: Arc<dyn ItemSource>,
    ids: impl IntoIterator<Item = ItemId>,
    cancel: CancellationToken,
) -> FanOut {
    let (tx, rx) = mpsc::channel(FAN_IN_BUFFER);
    let mut workers = JoinSet::new();

    for id in ids {
        workers.spawn(fetch_one(
            Arc::clone(&source),
            id,
            tx.clone(),
            cancel.clone(),
        ));
    }

    FanOut {
        stories: ReceiverStream::new(rx),
        workers,
    }
}

async fn fetch_one(
    source: Arc<dyn ItemSource>,
    id: ItemId,
    tx: mpsc::Sender<Story>,
    cancel: CancellationToken,
) {
    if cancel.is_cancelled() {
        metrics::counter!(telemetry::ITEMS_FETCHED_TOTAL, "status" => "skipped").increment(1);
        return;
    }

    let item = match source.item(id).await {
        Ok(item) => item,
        Err(e) => {
            metrics::counter!(telemetry::ITEMS_FETCHED_TOTAL, "status" => "error").increment(1);
            debug!(id, error = %e, "dropping item");
            return;
        }
    };
    metrics::counter!(telemetry::ITEMS_FETCHED_TOTAL, "status" => "ok").increment(1);

    let story = Story::enrich(item);
    if !story.qualifies() {
        return;
    }

    tokio::select! {
        biased;
        _ = cancel.cancelled() => {}
        // Err only means the consumer is gone.
        _ = tx.send(story) => {}
    }
}
