//! Telemetry metric name constants.
//!
//! Centralised metric names for the front page pipeline. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `quiet_hn_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `status`: per-item outcome: "ok", "error" or "skipped"

/// Total requests answered straight from the cache.
pub const CACHE_HITS_TOTAL: &str = "quiet_hn_cache_hits_total";

/// Total requests that found the cache empty or expired.
pub const CACHE_MISSES_TOTAL: &str = "quiet_hn_cache_misses_total";

/// Duration of a full refresh (listing, fan-out and collection) in seconds.
pub const REFRESH_DURATION_SECONDS: &str = "quiet_hn_refresh_duration_seconds";

/// Item detail fetches attempted by fan-out workers.
///
/// Labels: `status` ("ok" | "error" | "skipped"). "skipped" counts workers
/// that saw cancellation before fetching.
pub const ITEMS_FETCHED_TOTAL: &str = "quiet_hn_items_fetched_total";

/// Total failed calls to the listing collaborator.
pub const LISTING_FAILURES_TOTAL: &str = "quiet_hn_listing_failures_total";
