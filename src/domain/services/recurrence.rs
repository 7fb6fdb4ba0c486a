use crate::config::BookingDefaults;
use crate::domain::models::pattern::{Frequency, RecurrencePattern};
use crate::domain::models::slot::TimeSlotOccurrence;
use chrono::{Datelike, Duration, NaiveDate};

const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Ordinal of the date's weekday within its month (0 for the first Monday,
/// 1 for the second, ...). Drives the monthly cadence.
fn weekday_ordinal(date: NaiveDate) -> u32 {
    (date.day() - 1) / 7
}

/// Expands a recurrence pattern into concrete occurrences, scanning forward
/// from `window_start`.
///
/// Termination is guaranteed: the scan stops past `end_date`, after
/// `max_occurrences` emissions, after the configured occurrence cap when the
/// caller supplies no bound at all, and never walks further than
/// `defaults.horizon_days` regardless.
///
/// Occurrences come out in non-decreasing date order; within one date, in
/// the declaration order of `pattern.time_slots`.
pub fn generate_occurrences(
    pattern: &RecurrencePattern,
    window_start: NaiveDate,
    zone_id: &str,
    max_occurrences: Option<usize>,
    defaults: &BookingDefaults,
) -> Vec<TimeSlotOccurrence> {
    if !pattern.has_pattern() {
        return Vec::new();
    }

    let cap = match max_occurrences {
        Some(cap) => cap,
        // An end date bounds the scan on its own; without either bound the
        // configured cap keeps the result finite.
        None if pattern.end_date.is_some() => usize::MAX,
        None => defaults.occurrence_cap,
    };

    let anchor_ordinal = weekday_ordinal(window_start);
    let mut occurrences = Vec::new();

    for offset in 0..=defaults.horizon_days {
        let date = window_start + Duration::days(offset);

        if let Some(end) = pattern.end_date {
            if date > end {
                break;
            }
        }
        if pattern.exceptions.contains(&date) {
            continue;
        }

        let matches = match pattern.frequency {
            Frequency::Daily => true,
            Frequency::Weekly => pattern.matches_weekday(date),
            Frequency::Biweekly => pattern.matches_weekday(date) && (offset / 7) % 2 == 0,
            Frequency::Monthly => {
                pattern.matches_weekday(date) && weekday_ordinal(date) == anchor_ordinal
            }
        };
        if !matches {
            continue;
        }

        for slot in &pattern.time_slots {
            if occurrences.len() >= cap {
                return occurrences;
            }
            occurrences.push(TimeSlotOccurrence {
                zone_id: zone_id.to_string(),
                date,
                time_slot: *slot,
                duration_hours: defaults.duration_hours,
            });
        }
        if occurrences.len() >= cap {
            break;
        }
    }

    occurrences
}

/// Short human-readable rendering of a pattern for UI confirmation, e.g.
/// "Weekly on Mon, Wed at 10:00-12:00".
pub fn describe_pattern(pattern: &RecurrencePattern) -> String {
    let slots = pattern
        .time_slots
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let label = match pattern.frequency {
        Frequency::Daily => "Daily",
        Frequency::Weekly => "Weekly",
        Frequency::Biweekly => "Every other week",
        Frequency::Monthly => "Monthly",
    };

    if pattern.frequency == Frequency::Daily {
        return format!("{} at {}", label, slots);
    }

    let days = pattern
        .weekdays
        .iter()
        .filter(|&&d| d < 7)
        .map(|&d| WEEKDAY_NAMES[d as usize])
        .collect::<Vec<_>>()
        .join(", ");

    format!("{} on {} at {}", label, days, slots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::slot::TimeSlot;
    use std::collections::BTreeSet;

    fn slot(s: &str) -> TimeSlot {
        s.parse().unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn pattern(frequency: Frequency, weekdays: &[u8], slots: &[&str]) -> RecurrencePattern {
        RecurrencePattern {
            frequency,
            weekdays: weekdays.to_vec(),
            time_slots: slots.iter().map(|s| slot(s)).collect(),
            end_date: None,
            exceptions: BTreeSet::new(),
        }
    }

    fn defaults() -> BookingDefaults {
        BookingDefaults::default()
    }

    #[test]
    fn test_weekly_two_weekdays_over_two_weeks() {
        // 2024-05-06 is a Monday. Weekdays 1 and 3 are Monday and Wednesday.
        let mut p = pattern(Frequency::Weekly, &[1, 3], &["10:00-12:00"]);
        p.end_date = Some(date("2024-05-19"));

        let occ = generate_occurrences(&p, date("2024-05-06"), "zone-a", None, &defaults());

        let dates: Vec<_> = occ.iter().map(|o| o.date).collect();
        assert_eq!(
            dates,
            vec![date("2024-05-06"), date("2024-05-08"), date("2024-05-13"), date("2024-05-15")]
        );
        assert!(occ.iter().all(|o| o.time_slot == slot("10:00-12:00")));
        assert!(occ.iter().all(|o| o.zone_id == "zone-a"));
    }

    #[test]
    fn test_unbounded_pattern_falls_back_to_occurrence_cap() {
        let p = pattern(Frequency::Weekly, &[1], &["10:00-11:00"]);
        let occ = generate_occurrences(&p, date("2024-05-06"), "z", None, &defaults());
        assert_eq!(occ.len(), defaults().occurrence_cap);
    }

    #[test]
    fn test_terminates_within_horizon_even_with_huge_limit() {
        let p = pattern(Frequency::Weekly, &[1], &["10:00-11:00"]);
        let occ = generate_occurrences(&p, date("2024-05-06"), "z", Some(10_000), &defaults());
        // 365 scanned days contain at most 53 Mondays.
        assert!(occ.len() <= 53);
        assert!(occ.len() >= 52);
    }

    #[test]
    fn test_empty_weekdays_or_slots_short_circuit() {
        let no_days = pattern(Frequency::Weekly, &[], &["10:00-11:00"]);
        assert!(generate_occurrences(&no_days, date("2024-05-06"), "z", None, &defaults()).is_empty());

        let no_slots = pattern(Frequency::Daily, &[1], &[]);
        assert!(generate_occurrences(&no_slots, date("2024-05-06"), "z", None, &defaults()).is_empty());

        // The gate applies to daily patterns as well, matching the UI check.
        let daily_no_days = pattern(Frequency::Daily, &[], &["10:00-11:00"]);
        assert!(generate_occurrences(&daily_no_days, date("2024-05-06"), "z", None, &defaults()).is_empty());
    }

    #[test]
    fn test_out_of_range_weekday_indices_never_match() {
        let p = pattern(Frequency::Weekly, &[7, 42], &["10:00-11:00"]);
        assert!(generate_occurrences(&p, date("2024-05-06"), "z", None, &defaults()).is_empty());
    }

    #[test]
    fn test_slots_keep_declaration_order_within_a_date() {
        let mut p = pattern(Frequency::Weekly, &[1], &["14:00-15:00", "10:00-11:00"]);
        p.end_date = Some(date("2024-05-13"));

        let occ = generate_occurrences(&p, date("2024-05-06"), "z", None, &defaults());
        let pairs: Vec<_> = occ.iter().map(|o| (o.date, o.time_slot.to_string())).collect();
        assert_eq!(
            pairs,
            vec![
                (date("2024-05-06"), "14:00-15:00".to_string()),
                (date("2024-05-06"), "10:00-11:00".to_string()),
                (date("2024-05-13"), "14:00-15:00".to_string()),
                (date("2024-05-13"), "10:00-11:00".to_string()),
            ]
        );
    }

    #[test]
    fn test_exceptions_are_skipped() {
        let mut p = pattern(Frequency::Weekly, &[1], &["10:00-11:00"]);
        p.end_date = Some(date("2024-05-20"));
        p.exceptions.insert(date("2024-05-13"));

        let occ = generate_occurrences(&p, date("2024-05-06"), "z", None, &defaults());
        let dates: Vec<_> = occ.iter().map(|o| o.date).collect();
        assert_eq!(dates, vec![date("2024-05-06"), date("2024-05-20")]);
    }

    #[test]
    fn test_daily_ignores_weekday_matching() {
        let mut p = pattern(Frequency::Daily, &[1], &["08:00-09:00"]);
        p.end_date = Some(date("2024-05-09"));

        let occ = generate_occurrences(&p, date("2024-05-06"), "z", None, &defaults());
        assert_eq!(occ.len(), 4);
    }

    #[test]
    fn test_biweekly_skips_odd_weeks() {
        let p = pattern(Frequency::Biweekly, &[1], &["10:00-11:00"]);
        let occ = generate_occurrences(&p, date("2024-05-06"), "z", Some(3), &defaults());
        let dates: Vec<_> = occ.iter().map(|o| o.date).collect();
        assert_eq!(dates, vec![date("2024-05-06"), date("2024-05-20"), date("2024-06-03")]);
    }

    #[test]
    fn test_monthly_keeps_weekday_ordinal() {
        // 2024-05-06 is the first Monday of May.
        let p = pattern(Frequency::Monthly, &[1], &["10:00-11:00"]);
        let occ = generate_occurrences(&p, date("2024-05-06"), "z", Some(3), &defaults());
        let dates: Vec<_> = occ.iter().map(|o| o.date).collect();
        assert_eq!(dates, vec![date("2024-05-06"), date("2024-06-03"), date("2024-07-01")]);
    }

    #[test]
    fn test_max_occurrences_takes_precedence_over_end_date() {
        let mut p = pattern(Frequency::Daily, &[1], &["08:00-09:00"]);
        p.end_date = Some(date("2024-06-30"));

        let occ = generate_occurrences(&p, date("2024-05-06"), "z", Some(5), &defaults());
        assert_eq!(occ.len(), 5);
    }

    #[test]
    fn test_occurrences_carry_default_duration() {
        let p = pattern(Frequency::Weekly, &[1], &["10:00-12:00"]);
        let occ = generate_occurrences(&p, date("2024-05-06"), "z", Some(1), &defaults());
        assert_eq!(occ[0].duration_hours, defaults().duration_hours);
    }

    #[test]
    fn test_describe_pattern_renders_days_and_slots() {
        let p = pattern(Frequency::Weekly, &[1, 3], &["10:00-12:00"]);
        assert_eq!(describe_pattern(&p), "Weekly on Mon, Wed at 10:00-12:00");

        let daily = pattern(Frequency::Daily, &[0], &["08:00-09:00", "09:00-10:00"]);
        assert_eq!(describe_pattern(&daily), "Daily at 08:00-09:00, 09:00-10:00");
    }
}
