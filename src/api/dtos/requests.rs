use crate::domain::models::booking::BookingScope;
use crate::domain::models::pattern::RecurrencePattern;
use crate::domain::models::slot::TimeSlotOccurrence;
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct ExpandPatternRequest {
    pub pattern: RecurrencePattern,
    pub window_start: NaiveDate,
    pub max_occurrences: Option<usize>,
}

#[derive(Deserialize)]
pub struct CheckOccurrencesRequest {
    pub occurrences: Vec<TimeSlotOccurrence>,
}

#[derive(Deserialize)]
pub struct AvailabilityQuery {
    pub date: NaiveDate,
    pub time_slot: String,
}

#[derive(Deserialize)]
pub struct AddCartItemRequest {
    pub facility_id: String,
    pub zone_id: String,
    pub date: NaiveDate,
    pub time_slot: String,
    pub duration_hours: Option<u32>,
    #[serde(default)]
    pub services_price: i64,
}

#[derive(Deserialize)]
pub struct CheckoutRequest {
    pub contact_name: String,
    pub contact_email: String,
    pub purpose: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateZoneRequest {
    pub zone_id: String,
    pub facility_id: String,
    pub name: String,
    pub price_per_hour: i64,
}

#[derive(Deserialize)]
pub struct CreateBlackoutRequest {
    pub date: NaiveDate,
    pub reason: String,
}

#[derive(Deserialize)]
pub struct RegisterBookingRequest {
    pub facility_id: String,
    pub zone_id: String,
    pub date: NaiveDate,
    pub time_slot: String,
    pub scope: Option<BookingScope>,
}
