use crate::domain::ports::{CalendarService, DateAvailability};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Blackout dates (holidays, maintenance) held in memory, keyed by date.
#[derive(Default)]
pub struct InMemoryCalendarService {
    blackouts: RwLock<HashMap<NaiveDate, String>>,
}

impl InMemoryCalendarService {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CalendarService for InMemoryCalendarService {
    async fn is_date_unavailable(&self, date: NaiveDate) -> Result<DateAvailability, AppError> {
        let blackouts = self.blackouts.read().await;
        Ok(DateAvailability {
            is_unavailable: blackouts.contains_key(&date),
            reason: blackouts.get(&date).cloned(),
        })
    }

    async fn add_blackout(&self, date: NaiveDate, reason: &str) -> Result<(), AppError> {
        self.blackouts.write().await.insert(date, reason.to_string());
        Ok(())
    }

    async fn remove_blackout(&self, date: NaiveDate) -> Result<(), AppError> {
        self.blackouts.write().await.remove(&date);
        Ok(())
    }
}
