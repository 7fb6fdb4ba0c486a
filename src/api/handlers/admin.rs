use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreateBlackoutRequest, CreateZoneRequest, RegisterBookingRequest};
use crate::domain::models::booking::{BookedInterval, BookingScope};
use crate::domain::models::slot::{TimeSlot, TimeSlotError};
use crate::domain::ports::ZoneRate;
use crate::error::AppError;
use crate::state::AppState;

pub async fn create_zone(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateZoneRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.price_per_hour < 0 {
        return Err(AppError::Validation("price_per_hour must not be negative".into()));
    }

    let rate = ZoneRate {
        zone_id: payload.zone_id,
        facility_id: payload.facility_id,
        name: payload.name,
        price_per_hour: payload.price_per_hour,
    };

    let created = state.pricing_catalog.upsert_rate(&rate).await?;
    info!("Zone rate upserted: {} at {}/h", created.zone_id, created.price_per_hour);
    Ok(Json(created))
}

pub async fn list_zones(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.pricing_catalog.list_rates().await?))
}

pub async fn create_blackout(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateBlackoutRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.calendar.add_blackout(payload.date, &payload.reason).await?;
    // A blackout affects every zone on that date, so the whole cache is
    // refreshed rather than hunting individual keys.
    state.availability_cache.clear();
    info!("Blackout added for {}: {}", payload.date, payload.reason);
    Ok(Json(json!({ "status": "created" })))
}

pub async fn delete_blackout(
    State(state): State<Arc<AppState>>,
    Path(date): Path<NaiveDate>,
) -> Result<impl IntoResponse, AppError> {
    state.calendar.remove_blackout(date).await?;
    state.availability_cache.clear();
    info!("Blackout removed for {}", date);
    Ok(Json(json!({ "status": "deleted" })))
}

pub async fn list_reservations(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.booking_store.list_reservations().await?))
}

/// Registers a booking interval as it would arrive from the external booking
/// collaborator, e.g. a confirmed booking made through another channel.
pub async fn register_booking(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let time_slot: TimeSlot = payload
        .time_slot
        .parse()
        .map_err(|e: TimeSlotError| AppError::Validation(e.to_string()))?;

    let interval = BookedInterval::new(
        payload.facility_id,
        payload.zone_id.clone(),
        payload.date,
        time_slot,
        payload.scope.unwrap_or(BookingScope::Zone),
    );

    let created = state.booking_store.add_booked(&interval).await?;
    state
        .detector
        .invalidate_slot(&payload.zone_id, payload.date, &payload.time_slot)
        .await;

    info!("Booking registered: {} on {} {}", created.zone_id, created.date, created.time_slot);
    Ok(Json(created))
}
