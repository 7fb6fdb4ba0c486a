use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::api::dtos::requests::{AvailabilityQuery, CheckOccurrencesRequest};
use crate::domain::models::resolution::ConflictResolutionInput;
use crate::error::AppError;
use crate::state::AppState;

pub async fn check_slot(
    State(state): State<Arc<AppState>>,
    Path(zone_id): Path<String>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<impl IntoResponse, AppError> {
    let result = state
        .detector
        .check_zone_conflict(&zone_id, query.date, &query.time_slot)
        .await;
    Ok(Json(result))
}

pub async fn check_occurrences(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CheckOccurrencesRequest>,
) -> Result<impl IntoResponse, AppError> {
    let partition = state.detector.check_occurrences(&payload.occurrences).await;
    Ok(Json(partition))
}

pub async fn resolve_conflicts(
    State(state): State<Arc<AppState>>,
    Json(input): Json<ConflictResolutionInput>,
) -> Result<impl IntoResponse, AppError> {
    let proposal = state.suggestion_strategy.suggest(&input);
    Ok(Json(proposal))
}
