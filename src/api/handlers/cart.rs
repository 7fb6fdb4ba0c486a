use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

use crate::api::dtos::requests::{AddCartItemRequest, CheckoutRequest};
use crate::api::dtos::responses::CartResponse;
use crate::domain::models::booking::{BookedInterval, BookingScope, NewReservationParams, Reservation};
use crate::domain::models::cart::CartItem;
use crate::domain::models::slot::{TimeSlot, TimeSlotOccurrence};
use crate::domain::services::pricing::price_items;
use crate::error::AppError;
use crate::state::AppState;

async fn cart_response(state: &AppState, session_key: &str) -> CartResponse {
    CartResponse {
        session_key: session_key.to_string(),
        items: state.cart_service.items(session_key).await,
        item_count: state.cart_service.item_count(session_key).await,
        total_price: state.cart_service.total_price(session_key).await,
    }
}

pub async fn get_cart(
    State(state): State<Arc<AppState>>,
    Path(session_key): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(cart_response(&state, &session_key).await))
}

pub async fn add_item(
    State(state): State<Arc<AppState>>,
    Path(session_key): Path<String>,
    Json(payload): Json<AddCartItemRequest>,
) -> Result<impl IntoResponse, AppError> {
    let time_slot: TimeSlot = payload
        .time_slot
        .parse()
        .map_err(|e: crate::domain::models::slot::TimeSlotError| AppError::Validation(e.to_string()))?;

    let rate = state
        .pricing_catalog
        .zone_rate(&payload.zone_id)
        .await?
        .ok_or(AppError::NotFound("Zone not found in pricing catalog".into()))?;

    let item = CartItem {
        facility_id: payload.facility_id,
        zone_id: payload.zone_id,
        date: payload.date,
        time_slot,
        duration_hours: payload.duration_hours,
        price_per_hour: rate.price_per_hour,
        services_price: payload.services_price,
        added_at: Utc::now(),
    };

    let added = state.cart_service.add_item(&session_key, item).await;
    if !added {
        info!("Duplicate cart item ignored for session {}", session_key);
    }

    Ok(Json(cart_response(&state, &session_key).await))
}

pub async fn remove_item(
    State(state): State<Arc<AppState>>,
    Path((session_key, item_key)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    if !state.cart_service.remove_item(&session_key, &item_key).await {
        return Err(AppError::NotFound("Cart item not found".into()));
    }
    Ok(Json(cart_response(&state, &session_key).await))
}

pub async fn clear_cart(
    State(state): State<Arc<AppState>>,
    Path(session_key): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.cart_service.clear(&session_key).await;
    Ok(Json(json!({ "status": "cleared" })))
}

pub async fn get_pricing(
    State(state): State<Arc<AppState>>,
    Path(session_key): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.cart_service.pricing(&session_key).await))
}

/// Re-checks every item against the current booking state, submits the
/// reservation for approval, registers the booked intervals and drops the
/// now-stale cache entries. The re-check and the submission are not atomic;
/// the approval step downstream is the final arbiter.
pub async fn checkout(
    State(state): State<Arc<AppState>>,
    Path(session_key): Path<String>,
    Json(payload): Json<CheckoutRequest>,
) -> Result<Response, AppError> {
    let items = state.cart_service.items(&session_key).await;
    if items.is_empty() {
        return Err(AppError::Validation("Cart is empty".into()));
    }

    let candidates: Vec<TimeSlotOccurrence> = items
        .iter()
        .map(|item| TimeSlotOccurrence {
            zone_id: item.zone_id.clone(),
            date: item.date,
            time_slot: item.time_slot,
            duration_hours: item.duration_hours.unwrap_or(state.config.defaults.duration_hours),
        })
        .collect();

    let partition = state.detector.check_occurrences(&candidates).await;
    if !partition.conflicted.is_empty() {
        warn!(
            "Checkout rejected for session {}: {} item(s) no longer available",
            session_key,
            partition.conflicted.len()
        );
        return Ok((
            StatusCode::CONFLICT,
            Json(json!({
                "error": "Some cart items are no longer available",
                "conflicted": partition.conflicted,
            })),
        )
            .into_response());
    }

    let pricing = price_items(&items, &state.config.defaults);
    let reservation = Reservation::new(NewReservationParams {
        session_key: session_key.clone(),
        items: items.clone(),
        contact_name: payload.contact_name,
        contact_email: payload.contact_email,
        purpose: payload.purpose,
        pricing,
    });

    let created = state.booking_store.submit_reservation(&reservation).await?;

    for item in &items {
        let interval = BookedInterval::new(
            item.facility_id.clone(),
            item.zone_id.clone(),
            item.date,
            item.time_slot,
            BookingScope::Zone,
        );
        state.booking_store.add_booked(&interval).await?;
        state
            .detector
            .invalidate_slot(&item.zone_id, item.date, &item.time_slot.to_string())
            .await;
    }

    state.cart_service.clear(&session_key).await;

    info!("Reservation submitted for approval: {}", created.id);
    Ok(Json(created).into_response())
}
