use std::sync::Arc;
use std::time::Duration;

use crate::cache::AvailabilityCache;
use crate::config::Config;
use crate::domain::ports::{BookingStore, CalendarService, CartStorage, PricingCatalog};
use crate::domain::services::cart::CartService;
use crate::domain::services::conflict::ConflictDetector;
use crate::domain::services::resolution::PassThroughSuggestions;
use crate::infra::memory::booking_store::InMemoryBookingStore;
use crate::infra::memory::calendar::InMemoryCalendarService;
use crate::infra::memory::pricing::InMemoryPricingCatalog;
use crate::infra::storage::file_cart_storage::FileCartStorage;
use crate::state::AppState;
use tracing::info;

pub fn bootstrap_state(config: &Config) -> AppState {
    info!("Initializing in-memory collaborators and file cart storage at {}", config.cart_storage_dir);

    let availability_cache = AvailabilityCache::new(
        Duration::from_secs(config.defaults.cache_ttl_secs),
        config.defaults.cache_max_entries,
    );

    let booking_store: Arc<dyn BookingStore> = Arc::new(InMemoryBookingStore::new());
    let calendar: Arc<dyn CalendarService> = Arc::new(InMemoryCalendarService::new());
    let pricing_catalog: Arc<dyn PricingCatalog> = Arc::new(InMemoryPricingCatalog::new());
    let cart_storage: Arc<dyn CartStorage> = Arc::new(FileCartStorage::new(&config.cart_storage_dir));

    let detector = Arc::new(ConflictDetector::new(
        calendar.clone(),
        booking_store.clone(),
        availability_cache.clone(),
    ));
    let cart_service = Arc::new(CartService::new(cart_storage, config.defaults.clone()));

    AppState {
        config: config.clone(),
        booking_store,
        calendar,
        pricing_catalog,
        cart_service,
        detector,
        availability_cache,
        suggestion_strategy: Arc::new(PassThroughSuggestions),
    }
}
