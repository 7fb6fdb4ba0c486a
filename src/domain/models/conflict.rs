use crate::domain::models::slot::TimeSlot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Three-valued slot status. `Unavailable` is a calendar-level exclusion
/// (holiday, maintenance) and always wins over `Busy`, which denotes a
/// collision with an existing booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictStatus {
    Available,
    Busy,
    Unavailable,
}

/// Display descriptor for a booking collision, tagged by the shape of the
/// colliding booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "conflict_type", rename_all = "snake_case")]
pub enum ConflictDetails {
    ZoneConflict {
        booking_id: String,
        time_slot: TimeSlot,
        created_at: DateTime<Utc>,
    },
    WholeFacilityConflict {
        booking_id: String,
        facility_id: String,
        time_slot: TimeSlot,
        created_at: DateTime<Utc>,
    },
    SubZoneConflict {
        booking_id: String,
        parent_zone_id: String,
        time_slot: TimeSlot,
        created_at: DateTime<Utc>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictResult {
    pub status: ConflictStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflict: Option<ConflictDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ConflictResult {
    pub fn available() -> Self {
        Self { status: ConflictStatus::Available, conflict: None, reason: None }
    }

    pub fn busy(details: ConflictDetails) -> Self {
        Self { status: ConflictStatus::Busy, conflict: Some(details), reason: None }
    }

    pub fn unavailable(reason: Option<String>) -> Self {
        Self { status: ConflictStatus::Unavailable, conflict: None, reason }
    }
}
