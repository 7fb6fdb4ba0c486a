use crate::cache::{AvailabilityCache, AvailabilityKey};
use crate::domain::models::conflict::{ConflictResult, ConflictStatus};
use crate::domain::models::slot::{TimeSlot, TimeSlotOccurrence};
use crate::domain::ports::{BookingStore, CalendarService};
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

#[derive(Debug, Clone, Serialize)]
pub struct ConflictedOccurrence {
    pub occurrence: TimeSlotOccurrence,
    pub result: ConflictResult,
}

/// Outcome of a batch check: candidates split into bookable and blocked,
/// each side keeping the input order.
#[derive(Debug, Clone, Serialize, Default)]
pub struct SlotPartition {
    pub available: Vec<TimeSlotOccurrence>,
    pub conflicted: Vec<ConflictedOccurrence>,
}

pub struct ConflictDetector {
    calendar: Arc<dyn CalendarService>,
    booking_store: Arc<dyn BookingStore>,
    cache: AvailabilityCache,
}

impl ConflictDetector {
    pub fn new(
        calendar: Arc<dyn CalendarService>,
        booking_store: Arc<dyn BookingStore>,
        cache: AvailabilityCache,
    ) -> Self {
        Self { calendar, booking_store, cache }
    }

    /// Evaluates one candidate slot. This is a total function: malformed
    /// slots and collaborator failures fold into the result instead of
    /// erroring, so a caller is never shown a false "available".
    ///
    /// Verdicts caused by a collaborator failure are served but not
    /// memoized; the next check retries instead of pinning the slot for a
    /// full TTL after the collaborator recovers.
    pub async fn check_zone_conflict(
        &self,
        zone_id: &str,
        date: NaiveDate,
        raw_slot: &str,
    ) -> ConflictResult {
        let key = AvailabilityKey::new(zone_id, date, raw_slot);
        if let Some(cached) = self.cache.get(&key).await {
            return cached;
        }

        let (result, memoizable) = self.evaluate(zone_id, date, raw_slot).await;
        if memoizable {
            self.cache.insert(key, result.clone()).await;
        }
        result
    }

    async fn evaluate(&self, zone_id: &str, date: NaiveDate, raw_slot: &str) -> (ConflictResult, bool) {
        // Calendar blackouts win over everything, including booking
        // conflicts; a blacked-out date is never re-evaluated for collisions.
        match self.calendar.is_date_unavailable(date).await {
            Ok(availability) if availability.is_unavailable => {
                return (ConflictResult::unavailable(availability.reason), true);
            }
            Ok(_) => {}
            Err(e) => {
                warn!("calendar lookup failed for {}: {}", date, e);
                return (
                    ConflictResult::unavailable(Some("calendar check failed".to_string())),
                    false,
                );
            }
        }

        let candidate: TimeSlot = match raw_slot.parse() {
            Ok(slot) => slot,
            Err(e) => {
                // May originate from stale cached client data; report the
                // slot as unusable rather than failing the whole check.
                warn!("skipping unusable time slot for zone {}: {}", zone_id, e);
                return (
                    ConflictResult::unavailable(Some(format!("unusable time slot: {}", raw_slot))),
                    true,
                );
            }
        };

        let booked = match self.booking_store.list_booked(zone_id, date).await {
            Ok(booked) => booked,
            Err(e) => {
                warn!("booking lookup failed for zone {} on {}: {}", zone_id, date, e);
                return (
                    ConflictResult {
                        status: ConflictStatus::Busy,
                        conflict: None,
                        reason: Some("booking lookup failed".to_string()),
                    },
                    false,
                );
            }
        };

        for interval in &booked {
            if candidate.overlaps(&interval.time_slot) {
                return (ConflictResult::busy(interval.conflict_details()), true);
            }
        }

        (ConflictResult::available(), true)
    }

    /// Checks a list of candidates and partitions them, preserving input
    /// order within each side.
    pub async fn check_occurrences(&self, occurrences: &[TimeSlotOccurrence]) -> SlotPartition {
        let mut partition = SlotPartition::default();
        for occurrence in occurrences {
            let result = self
                .check_zone_conflict(&occurrence.zone_id, occurrence.date, &occurrence.time_slot.to_string())
                .await;
            if result.status == ConflictStatus::Available {
                partition.available.push(occurrence.clone());
            } else {
                partition.conflicted.push(ConflictedOccurrence {
                    occurrence: occurrence.clone(),
                    result,
                });
            }
        }
        partition
    }

    /// Drops the memoized result for one slot, called after a booking is
    /// created or cancelled there.
    pub async fn invalidate_slot(&self, zone_id: &str, date: NaiveDate, raw_slot: &str) {
        self.cache
            .invalidate(&AvailabilityKey::new(zone_id, date, raw_slot))
            .await;
    }
}
