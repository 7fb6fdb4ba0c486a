use crate::domain::models::cart::CartItem;
use crate::domain::models::slot::TimeSlotOccurrence;
use crate::domain::services::conflict::ConflictedOccurrence;
use serde::Serialize;

#[derive(Serialize)]
pub struct ExpandPatternResponse {
    pub description: String,
    pub occurrences: Vec<TimeSlotOccurrence>,
}

#[derive(Serialize)]
pub struct PatternPreviewResponse {
    pub description: String,
    pub available: Vec<TimeSlotOccurrence>,
    pub conflicted: Vec<ConflictedOccurrence>,
}

#[derive(Serialize)]
pub struct CartResponse {
    pub session_key: String,
    pub items: Vec<CartItem>,
    pub item_count: usize,
    pub total_price: i64,
}
