use crate::domain::ports::{PricingCatalog, ZoneRate};
use crate::error::AppError;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Zone hourly rates held in memory, keyed by zone id.
#[derive(Default)]
pub struct InMemoryPricingCatalog {
    rates: RwLock<HashMap<String, ZoneRate>>,
}

impl InMemoryPricingCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PricingCatalog for InMemoryPricingCatalog {
    async fn zone_rate(&self, zone_id: &str) -> Result<Option<ZoneRate>, AppError> {
        Ok(self.rates.read().await.get(zone_id).cloned())
    }

    async fn upsert_rate(&self, rate: &ZoneRate) -> Result<ZoneRate, AppError> {
        self.rates.write().await.insert(rate.zone_id.clone(), rate.clone());
        Ok(rate.clone())
    }

    async fn list_rates(&self) -> Result<Vec<ZoneRate>, AppError> {
        let mut rates: Vec<ZoneRate> = self.rates.read().await.values().cloned().collect();
        rates.sort_by(|a, b| a.zone_id.cmp(&b.zone_id));
        Ok(rates)
    }
}
