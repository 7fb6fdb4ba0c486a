//! Short-lived memoization of conflict checks, keyed by zone, date and slot.
//!
//! TTL-on-read alone would let a long-lived process grow without bound under
//! churn, so the cache is also capacity-bounded and a background worker
//! flushes pending maintenance (see `background.rs`).

use crate::domain::models::conflict::ConflictResult;
use chrono::NaiveDate;
use moka::future::Cache;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AvailabilityKey {
    zone_id: String,
    date: NaiveDate,
    time_slot: String,
}

impl AvailabilityKey {
    pub fn new(zone_id: &str, date: NaiveDate, time_slot: &str) -> Self {
        Self {
            zone_id: zone_id.to_string(),
            date,
            time_slot: time_slot.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct AvailabilityCache {
    inner: Cache<AvailabilityKey, ConflictResult>,
}

impl AvailabilityCache {
    pub fn new(ttl: Duration, max_entries: u64) -> Self {
        Self {
            inner: Cache::builder()
                .time_to_live(ttl)
                .max_capacity(max_entries)
                .build(),
        }
    }

    pub async fn get(&self, key: &AvailabilityKey) -> Option<ConflictResult> {
        self.inner.get(key).await
    }

    /// Stores a verdict for the TTL window. Callers decide what is worth
    /// memoizing; verdicts caused by transient collaborator failures are
    /// deliberately kept out so the next check retries.
    pub async fn insert(&self, key: AvailabilityKey, result: ConflictResult) {
        self.inner.insert(key, result).await;
    }

    /// Drops a single entry, used after a booking is created or cancelled
    /// for that slot.
    pub async fn invalidate(&self, key: &AvailabilityKey) {
        self.inner.invalidate(key).await;
    }

    /// Drops everything, used on bulk refreshes such as blackout changes.
    pub fn clear(&self) {
        self.inner.invalidate_all();
    }

    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }

    pub async fn run_pending_tasks(&self) {
        self.inner.run_pending_tasks().await;
    }
}
