use crate::domain::models::slot::TimeSlot;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Everything the conflict resolution wizard knows when it is opened: the
/// partition outcome plus whatever alternatives the caller already gathered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictResolutionInput {
    #[serde(default)]
    pub conflicted_dates: Vec<NaiveDate>,
    #[serde(default)]
    pub available_dates: Vec<NaiveDate>,
    #[serde(default)]
    pub alternative_time_slots: Vec<TimeSlot>,
    #[serde(default)]
    pub suggested_zones: Vec<String>,
    pub original_zone: String,
    pub original_time_slot: TimeSlot,
}

/// What a suggestion strategy proposes back to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionProposal {
    pub alternative_time_slots: Vec<TimeSlot>,
    pub suggested_zones: Vec<String>,
}
