use crate::domain::models::booking::{BookedInterval, Reservation};
use crate::domain::models::cart::CartItem;
use crate::domain::models::resolution::{ConflictResolutionInput, ResolutionProposal};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateAvailability {
    pub is_unavailable: bool,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneRate {
    pub zone_id: String,
    pub facility_id: String,
    pub name: String,
    pub price_per_hour: i64,
}

/// Existing bookings and submitted reservations, owned by the external
/// booking collaborator. Reads and the subsequent decision are not atomic;
/// callers accept eventual consistency.
#[async_trait]
pub trait BookingStore: Send + Sync {
    async fn list_booked(&self, zone_id: &str, date: NaiveDate) -> Result<Vec<BookedInterval>, AppError>;
    async fn add_booked(&self, interval: &BookedInterval) -> Result<BookedInterval, AppError>;
    async fn submit_reservation(&self, reservation: &Reservation) -> Result<Reservation, AppError>;
    async fn list_reservations(&self) -> Result<Vec<Reservation>, AppError>;
}

/// Calendar-level blackouts (holidays, maintenance), independent of any
/// specific booking.
#[async_trait]
pub trait CalendarService: Send + Sync {
    async fn is_date_unavailable(&self, date: NaiveDate) -> Result<DateAvailability, AppError>;
    async fn add_blackout(&self, date: NaiveDate, reason: &str) -> Result<(), AppError>;
    async fn remove_blackout(&self, date: NaiveDate) -> Result<(), AppError>;
}

#[async_trait]
pub trait PricingCatalog: Send + Sync {
    async fn zone_rate(&self, zone_id: &str) -> Result<Option<ZoneRate>, AppError>;
    async fn upsert_rate(&self, rate: &ZoneRate) -> Result<ZoneRate, AppError>;
    async fn list_rates(&self) -> Result<Vec<ZoneRate>, AppError>;
}

/// Durable key-value mirror for session carts. Convenience cache only, never
/// authoritative; a corrupted entry is discarded, not propagated.
#[async_trait]
pub trait CartStorage: Send + Sync {
    async fn load(&self, session_key: &str) -> Result<Option<Vec<CartItem>>, AppError>;
    async fn save(&self, session_key: &str, items: &[CartItem]) -> Result<(), AppError>;
    async fn remove(&self, session_key: &str) -> Result<(), AppError>;
}

/// Extension point for the conflict resolution wizard. No suggestion
/// heuristic is mandated; implementations plug in here.
pub trait SuggestionStrategy: Send + Sync {
    fn suggest(&self, input: &ConflictResolutionInput) -> ResolutionProposal;
}
