use crate::domain::models::slot::TimeSlot;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One reservation candidate in a session cart. The composite key doubles
/// as the de-duplication key: a second add with the same key is a no-op.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub facility_id: String,
    pub zone_id: String,
    pub date: NaiveDate,
    pub time_slot: TimeSlot,
    pub duration_hours: Option<u32>,
    pub price_per_hour: i64,
    #[serde(default)]
    pub services_price: i64,
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    pub fn composite_key(&self) -> String {
        format!(
            "{}-{}-{}-{}",
            self.facility_id, self.zone_id, self.date, self.time_slot
        )
    }
}

/// Cost breakdown for a cart or a submitted reservation. Amounts are in the
/// catalog's minor currency unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationPricing {
    pub base_price: i64,
    pub services_price: i64,
    pub discounts: i64,
    pub vat: i64,
    pub total: i64,
}
