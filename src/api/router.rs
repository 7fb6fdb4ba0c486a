use axum::{
    body::Body,
    extract::Request,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{admin, availability, cart, health, pattern};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Zone catalog
        .route("/api/v1/zones", post(admin::create_zone).get(admin::list_zones))

        // Facility calendar
        .route("/api/v1/blackouts", post(admin::create_blackout))
        .route("/api/v1/blackouts/{date}", delete(admin::delete_blackout))

        // Booking registry
        .route("/api/v1/bookings", post(admin::register_booking))
        .route("/api/v1/reservations", get(admin::list_reservations))

        // Recurrence expansion
        .route("/api/v1/zones/{zone_id}/pattern/expand", post(pattern::expand_pattern))
        .route("/api/v1/zones/{zone_id}/pattern/preview", post(pattern::preview_pattern))

        // Availability
        .route("/api/v1/zones/{zone_id}/availability", get(availability::check_slot))
        .route("/api/v1/availability/check", post(availability::check_occurrences))
        .route("/api/v1/availability/resolve", post(availability::resolve_conflicts))

        // Cart & checkout
        .route("/api/v1/sessions/{session_key}/cart", get(cart::get_cart).delete(cart::clear_cart))
        .route("/api/v1/sessions/{session_key}/cart/items", post(cart::add_item))
        .route("/api/v1/sessions/{session_key}/cart/items/{item_key}", delete(cart::remove_item))
        .route("/api/v1/sessions/{session_key}/cart/pricing", get(cart::get_pricing))
        .route("/api/v1/sessions/{session_key}/checkout", post(cart::checkout))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        session_key = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
