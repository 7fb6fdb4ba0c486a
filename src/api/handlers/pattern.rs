use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::ExpandPatternRequest;
use crate::api::dtos::responses::{ExpandPatternResponse, PatternPreviewResponse};
use crate::domain::models::pattern::RecurrencePattern;
use crate::domain::services::recurrence::{describe_pattern, generate_occurrences};
use crate::error::AppError;
use crate::state::AppState;

fn validate_pattern(pattern: &RecurrencePattern) -> Result<(), AppError> {
    if pattern.weekdays.iter().any(|&d| d > 6) {
        return Err(AppError::Validation(
            "weekday index out of range (0=Sunday .. 6=Saturday)".into(),
        ));
    }
    Ok(())
}

pub async fn expand_pattern(
    State(state): State<Arc<AppState>>,
    Path(zone_id): Path<String>,
    Json(payload): Json<ExpandPatternRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_pattern(&payload.pattern)?;

    let occurrences = generate_occurrences(
        &payload.pattern,
        payload.window_start,
        &zone_id,
        payload.max_occurrences,
        &state.config.defaults,
    );

    info!("Expanded pattern for zone {}: {} occurrence(s)", zone_id, occurrences.len());

    Ok(Json(ExpandPatternResponse {
        description: describe_pattern(&payload.pattern),
        occurrences,
    }))
}

/// The full selection pipeline: expand the pattern, then split the result
/// into bookable and blocked occurrences.
pub async fn preview_pattern(
    State(state): State<Arc<AppState>>,
    Path(zone_id): Path<String>,
    Json(payload): Json<ExpandPatternRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_pattern(&payload.pattern)?;

    let occurrences = generate_occurrences(
        &payload.pattern,
        payload.window_start,
        &zone_id,
        payload.max_occurrences,
        &state.config.defaults,
    );

    let partition = state.detector.check_occurrences(&occurrences).await;

    info!(
        "Pattern preview for zone {}: {} available, {} conflicted",
        zone_id,
        partition.available.len(),
        partition.conflicted.len()
    );

    Ok(Json(PatternPreviewResponse {
        description: describe_pattern(&payload.pattern),
        available: partition.available,
        conflicted: partition.conflicted,
    }))
}
