use crate::domain::models::cart::{CartItem, ReservationPricing};
use crate::domain::models::conflict::ConflictDetails;
use crate::domain::models::slot::TimeSlot;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which part of a facility an existing booking occupies. Only used to shape
/// the conflict descriptor shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BookingScope {
    Zone,
    WholeFacility,
    SubZone { parent_zone_id: String },
}

/// An already-booked interval as reported by the external booking store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookedInterval {
    pub id: String,
    pub facility_id: String,
    pub zone_id: String,
    pub date: NaiveDate,
    pub time_slot: TimeSlot,
    pub scope: BookingScope,
    pub created_at: DateTime<Utc>,
}

impl BookedInterval {
    pub fn new(
        facility_id: String,
        zone_id: String,
        date: NaiveDate,
        time_slot: TimeSlot,
        scope: BookingScope,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            facility_id,
            zone_id,
            date,
            time_slot,
            scope,
            created_at: Utc::now(),
        }
    }

    pub fn conflict_details(&self) -> ConflictDetails {
        match &self.scope {
            BookingScope::Zone => ConflictDetails::ZoneConflict {
                booking_id: self.id.clone(),
                time_slot: self.time_slot,
                created_at: self.created_at,
            },
            BookingScope::WholeFacility => ConflictDetails::WholeFacilityConflict {
                booking_id: self.id.clone(),
                facility_id: self.facility_id.clone(),
                time_slot: self.time_slot,
                created_at: self.created_at,
            },
            BookingScope::SubZone { parent_zone_id } => ConflictDetails::SubZoneConflict {
                booking_id: self.id.clone(),
                parent_zone_id: parent_zone_id.clone(),
                time_slot: self.time_slot,
                created_at: self.created_at,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    pub session_key: String,
    pub items: Vec<CartItem>,
    pub contact_name: String,
    pub contact_email: String,
    pub purpose: Option<String>,
    pub pricing: ReservationPricing,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

pub struct NewReservationParams {
    pub session_key: String,
    pub items: Vec<CartItem>,
    pub contact_name: String,
    pub contact_email: String,
    pub purpose: Option<String>,
    pub pricing: ReservationPricing,
}

impl Reservation {
    pub fn new(params: NewReservationParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            session_key: params.session_key,
            items: params.items,
            contact_name: params.contact_name,
            contact_email: params.contact_email,
            purpose: params.purpose,
            pricing: params.pricing,
            status: "PENDING_APPROVAL".to_string(),
            created_at: Utc::now(),
        }
    }
}
