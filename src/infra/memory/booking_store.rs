use crate::domain::models::booking::{BookedInterval, BookingScope, Reservation};
use crate::domain::ports::BookingStore;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

/// Process-local stand-in for the hosted booking collaborator.
#[derive(Default)]
pub struct InMemoryBookingStore {
    booked: RwLock<Vec<BookedInterval>>,
    reservations: RwLock<Vec<Reservation>>,
}

impl InMemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingStore for InMemoryBookingStore {
    async fn list_booked(&self, zone_id: &str, date: NaiveDate) -> Result<Vec<BookedInterval>, AppError> {
        // A whole-facility booking occupies every zone, and a sub-zone
        // booking also occupies its parent zone.
        Ok(self
            .booked
            .read()
            .await
            .iter()
            .filter(|interval| {
                interval.date == date
                    && (interval.zone_id == zone_id
                        || matches!(interval.scope, BookingScope::WholeFacility)
                        || matches!(&interval.scope, BookingScope::SubZone { parent_zone_id } if parent_zone_id == zone_id))
            })
            .cloned()
            .collect())
    }

    async fn add_booked(&self, interval: &BookedInterval) -> Result<BookedInterval, AppError> {
        self.booked.write().await.push(interval.clone());
        Ok(interval.clone())
    }

    async fn submit_reservation(&self, reservation: &Reservation) -> Result<Reservation, AppError> {
        self.reservations.write().await.push(reservation.clone());
        Ok(reservation.clone())
    }

    async fn list_reservations(&self) -> Result<Vec<Reservation>, AppError> {
        Ok(self.reservations.read().await.clone())
    }
}
