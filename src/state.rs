use std::sync::Arc;

use crate::cache::AvailabilityCache;
use crate::config::Config;
use crate::domain::ports::{BookingStore, CalendarService, PricingCatalog, SuggestionStrategy};
use crate::domain::services::cart::CartService;
use crate::domain::services::conflict::ConflictDetector;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub booking_store: Arc<dyn BookingStore>,
    pub calendar: Arc<dyn CalendarService>,
    pub pricing_catalog: Arc<dyn PricingCatalog>,
    pub cart_service: Arc<CartService>,
    pub detector: Arc<ConflictDetector>,
    pub availability_cache: AvailabilityCache,
    pub suggestion_strategy: Arc<dyn SuggestionStrategy>,
}
