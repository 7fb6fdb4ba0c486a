use crate::config::BookingDefaults;
use crate::domain::models::cart::{CartItem, ReservationPricing};
use crate::domain::ports::CartStorage;
use crate::domain::services::pricing;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

/// Per-session reservation carts. Memory is authoritative; every mutation is
/// mirrored write-through to the storage port so a cart survives a restart.
/// Mutations hold the write lock across load, change and mirror, so two
/// concurrent requests for one session cannot lose each other's update.
/// Storage failures are logged and absorbed, never surfaced as fatal.
pub struct CartService {
    storage: Arc<dyn CartStorage>,
    carts: RwLock<HashMap<String, Vec<CartItem>>>,
    defaults: BookingDefaults,
}

impl CartService {
    pub fn new(storage: Arc<dyn CartStorage>, defaults: BookingDefaults) -> Self {
        Self {
            storage,
            carts: RwLock::new(HashMap::new()),
            defaults,
        }
    }

    /// Loads the session into the map on first access. The caller holds the
    /// write lock, so the storage read happens at most once per session.
    async fn entry_loaded<'a>(
        &self,
        carts: &'a mut HashMap<String, Vec<CartItem>>,
        session_key: &str,
    ) -> &'a mut Vec<CartItem> {
        if !carts.contains_key(session_key) {
            let loaded = match self.storage.load(session_key).await {
                Ok(Some(items)) => items,
                Ok(None) => Vec::new(),
                Err(e) => {
                    warn!("cart storage read failed for session {}: {}", session_key, e);
                    Vec::new()
                }
            };
            carts.insert(session_key.to_string(), loaded);
        }
        carts.entry(session_key.to_string()).or_default()
    }

    async fn mirror(&self, session_key: &str, items: &[CartItem]) {
        if let Err(e) = self.storage.save(session_key, items).await {
            warn!("cart storage write failed for session {}: {}", session_key, e);
        }
    }

    async fn load_session(&self, session_key: &str) -> Vec<CartItem> {
        if let Some(items) = self.carts.read().await.get(session_key) {
            return items.clone();
        }
        let mut carts = self.carts.write().await;
        self.entry_loaded(&mut carts, session_key).await.clone()
    }

    /// Adds an item unless one with the same composite key is already in the
    /// cart. First write wins; a duplicate add returns false and changes
    /// nothing.
    pub async fn add_item(&self, session_key: &str, item: CartItem) -> bool {
        let mut carts = self.carts.write().await;
        let items = self.entry_loaded(&mut carts, session_key).await;
        let key = item.composite_key();
        if items.iter().any(|existing| existing.composite_key() == key) {
            return false;
        }
        items.push(item);
        let snapshot = items.clone();
        self.mirror(session_key, &snapshot).await;
        true
    }

    /// Removes the item with the given composite key, returning whether
    /// anything was removed.
    pub async fn remove_item(&self, session_key: &str, composite_key: &str) -> bool {
        let mut carts = self.carts.write().await;
        let items = self.entry_loaded(&mut carts, session_key).await;
        let before = items.len();
        items.retain(|item| item.composite_key() != composite_key);
        if items.len() == before {
            return false;
        }
        let snapshot = items.clone();
        self.mirror(session_key, &snapshot).await;
        true
    }

    pub async fn clear(&self, session_key: &str) {
        let mut carts = self.carts.write().await;
        carts.remove(session_key);
        if let Err(e) = self.storage.remove(session_key).await {
            warn!("cart storage delete failed for session {}: {}", session_key, e);
        }
    }

    pub async fn items(&self, session_key: &str) -> Vec<CartItem> {
        self.load_session(session_key).await
    }

    pub async fn item_count(&self, session_key: &str) -> usize {
        self.load_session(session_key).await.len()
    }

    pub async fn total_price(&self, session_key: &str) -> i64 {
        let items = self.load_session(session_key).await;
        pricing::total_price(&items, &self.defaults)
    }

    pub async fn pricing(&self, session_key: &str) -> ReservationPricing {
        let items = self.load_session(session_key).await;
        pricing::price_items(&items, &self.defaults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use async_trait::async_trait;
    use chrono::{NaiveDate, Utc};

    /// Storage that remembers nothing, for exercising the in-memory path.
    struct NullCartStorage;

    #[async_trait]
    impl CartStorage for NullCartStorage {
        async fn load(&self, _session_key: &str) -> Result<Option<Vec<CartItem>>, AppError> {
            Ok(None)
        }
        async fn save(&self, _session_key: &str, _items: &[CartItem]) -> Result<(), AppError> {
            Ok(())
        }
        async fn remove(&self, _session_key: &str) -> Result<(), AppError> {
            Ok(())
        }
    }

    /// Storage that yields at every await point, giving concurrent callers
    /// every chance to interleave.
    struct YieldingCartStorage;

    #[async_trait]
    impl CartStorage for YieldingCartStorage {
        async fn load(&self, _session_key: &str) -> Result<Option<Vec<CartItem>>, AppError> {
            tokio::task::yield_now().await;
            Ok(None)
        }
        async fn save(&self, _session_key: &str, _items: &[CartItem]) -> Result<(), AppError> {
            tokio::task::yield_now().await;
            Ok(())
        }
        async fn remove(&self, _session_key: &str) -> Result<(), AppError> {
            tokio::task::yield_now().await;
            Ok(())
        }
    }

    /// Storage that always fails, for checking that failures are absorbed.
    struct BrokenCartStorage;

    #[async_trait]
    impl CartStorage for BrokenCartStorage {
        async fn load(&self, _session_key: &str) -> Result<Option<Vec<CartItem>>, AppError> {
            Err(AppError::Internal)
        }
        async fn save(&self, _session_key: &str, _items: &[CartItem]) -> Result<(), AppError> {
            Err(AppError::Internal)
        }
        async fn remove(&self, _session_key: &str) -> Result<(), AppError> {
            Err(AppError::Internal)
        }
    }

    fn item(zone: &str, slot: &str) -> CartItem {
        CartItem {
            facility_id: "f1".to_string(),
            zone_id: zone.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            time_slot: slot.parse().unwrap(),
            duration_hours: None,
            price_per_hour: 450,
            services_price: 0,
            added_at: Utc::now(),
        }
    }

    fn service() -> CartService {
        CartService::new(Arc::new(NullCartStorage), BookingDefaults::default())
    }

    #[tokio::test]
    async fn test_duplicate_add_is_a_no_op() {
        let cart = service();
        assert!(cart.add_item("s1", item("z1", "10:00-12:00")).await);
        assert!(!cart.add_item("s1", item("z1", "10:00-12:00")).await);
        assert_eq!(cart.item_count("s1").await, 1);
    }

    #[tokio::test]
    async fn test_distinct_slots_both_stay() {
        let cart = service();
        assert!(cart.add_item("s1", item("z1", "10:00-12:00")).await);
        assert!(cart.add_item("s1", item("z1", "12:00-14:00")).await);
        assert_eq!(cart.item_count("s1").await, 2);
        assert_eq!(cart.total_price("s1").await, 1800);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let cart = service();
        cart.add_item("s1", item("z1", "10:00-12:00")).await;
        assert_eq!(cart.item_count("s1").await, 1);
        assert_eq!(cart.item_count("s2").await, 0);

        cart.clear("s1").await;
        assert_eq!(cart.item_count("s1").await, 0);
    }

    #[tokio::test]
    async fn test_remove_by_composite_key() {
        let cart = service();
        let target = item("z1", "10:00-12:00");
        let key = target.composite_key();
        cart.add_item("s1", target).await;
        cart.add_item("s1", item("z1", "14:00-15:00")).await;

        assert!(cart.remove_item("s1", &key).await);
        assert!(!cart.remove_item("s1", &key).await);
        assert_eq!(cart.item_count("s1").await, 1);
    }

    #[tokio::test]
    async fn test_concurrent_adds_to_one_session_keep_both_items() {
        let cart = CartService::new(Arc::new(YieldingCartStorage), BookingDefaults::default());

        let (first, second) = tokio::join!(
            cart.add_item("s1", item("z1", "10:00-12:00")),
            cart.add_item("s1", item("z1", "12:00-14:00")),
        );

        assert!(first);
        assert!(second);
        assert_eq!(cart.item_count("s1").await, 2);
    }

    #[tokio::test]
    async fn test_storage_failures_are_absorbed() {
        let cart = CartService::new(Arc::new(BrokenCartStorage), BookingDefaults::default());
        assert!(cart.add_item("s1", item("z1", "10:00-12:00")).await);
        assert_eq!(cart.item_count("s1").await, 1);
        cart.clear("s1").await;
        assert_eq!(cart.item_count("s1").await, 0);
    }
}
