use chrono::{NaiveDate, NaiveTime};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid time slot '{0}': expected HH:MM-HH:MM with start before end")]
pub struct TimeSlotError(pub String);

/// Half-open interval within a single day. "10:00-12:00" covers 10:00 up to
/// but not including 12:00, so a slot ending at 12:00 and one starting at
/// 12:00 do not collide. Slots never span midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeSlot {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeSlot {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self, TimeSlotError> {
        if start >= end {
            return Err(TimeSlotError(format!(
                "{}-{}",
                start.format("%H:%M"),
                end.format("%H:%M")
            )));
        }
        Ok(Self { start, end })
    }

    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }
}

impl FromStr for TimeSlot {
    type Err = TimeSlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (raw_start, raw_end) = s.split_once('-').ok_or_else(|| TimeSlotError(s.to_string()))?;
        let start = NaiveTime::parse_from_str(raw_start.trim(), "%H:%M")
            .map_err(|_| TimeSlotError(s.to_string()))?;
        let end = NaiveTime::parse_from_str(raw_end.trim(), "%H:%M")
            .map_err(|_| TimeSlotError(s.to_string()))?;
        TimeSlot::new(start, end)
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// One concrete (zone, date, time-slot) instance, typically produced by
/// expanding a recurrence pattern or by a single calendar-cell selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlotOccurrence {
    pub zone_id: String,
    pub date: NaiveDate,
    pub time_slot: TimeSlot,
    pub duration_hours: u32,
}
