//! Bounded collection from an unordered stream.

use std::pin::Pin;

use futures_util::stream::{self, Stream, StreamExt};
use tokio_util::sync::{CancellationToken, DropGuard};

use crate::types::Limit;

struct TakeState<S> {
    source: S,
    cancel: CancellationToken,
    limit: Limit,
    taken: usize,
    // Cancels `cancel` when the stream finishes or is dropped.
    _guard: DropGuard,
}

/// Forward at most `limit` items from `source`.
///
/// `cancel` is asserted as soon as the last allowed item is taken, when
/// `source` ends, or when the returned stream is dropped early, telling the
/// producers behind `source` to stop. If the caller cancels `cancel` first,
/// the stream ends without reading further. `source` itself is never closed
/// here; that stays with whoever produces it.
pub fn take<'a, S, T>(
    source: S,
    cancel: CancellationToken,
    limit: Limit,
) -> Pin<Box<dyn Stream<Item = T> + Send + 'a>>
where
    S: Stream<Item = T> + Send + Unpin + 'a,
    T: Send + 'a,
{
    let state = TakeState {
        source,
        _guard: cancel.clone().drop_guard(),
        cancel,
        limit,
        taken: 0,
    };

    Box::pin(stream::unfold(state, |mut state| async move {
        if state.limit.is_reached(state.taken) {
            return None;
        }

        let next = tokio::select! {
            biased;
            _ = state.cancel.cancelled() => None,
            item = state.source.next() => item,
        };
        let item = next?;

        state.taken += 1;
        if state.limit.is_reached(state.taken) {
            state.cancel.cancel();
        }
        Some((item, state))
    }))
}
