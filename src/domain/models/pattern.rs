use crate::domain::models::slot::TimeSlot;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Biweekly,
    Monthly,
}

/// A recurring reservation rule as built by the booking wizard.
///
/// Weekday indices are Sunday-first (0 = Sunday .. 6 = Saturday), matching
/// the values the selection UI submits. Out-of-range indices never match any
/// date and are silently ignored by expansion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurrencePattern {
    #[serde(rename = "type")]
    pub frequency: Frequency,
    #[serde(default)]
    pub weekdays: Vec<u8>,
    #[serde(default)]
    pub time_slots: Vec<TimeSlot>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub exceptions: BTreeSet<NaiveDate>,
}

impl RecurrencePattern {
    /// Gate applied before any expansion: a pattern without weekdays or
    /// without time slots expands to nothing.
    pub fn has_pattern(&self) -> bool {
        !self.weekdays.is_empty() && !self.time_slots.is_empty()
    }

    pub fn matches_weekday(&self, date: NaiveDate) -> bool {
        let index = date.weekday().num_days_from_sunday() as u8;
        self.weekdays.contains(&index)
    }
}
