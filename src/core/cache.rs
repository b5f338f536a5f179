//! Staleness policy for the cached item list.

use crate::core::models::Item;

/// How long a fetched item list stays fresh. Remounts inside this window
/// reuse the cached result instead of re-issuing the request.
pub const STALE_TIME_MS: f64 = 5.0 * 60.0 * 1000.0;

/// Last-known item list plus the time it was fetched, in milliseconds since
/// the epoch. There is a single slot for the whole app; an explicit refetch
/// always replaces it regardless of freshness.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemsCache {
    pub items: Vec<Item>,
    pub fetched_at_ms: f64,
}

impl ItemsCache {
    pub fn new(items: Vec<Item>, fetched_at_ms: f64) -> Self {
        Self {
            items,
            fetched_at_ms,
        }
    }

    /// Whether a mount may reuse this entry instead of issuing a request.
    pub fn is_fresh(&self, now_ms: f64) -> bool {
        now_ms - self.fetched_at_ms < STALE_TIME_MS
    }
}
