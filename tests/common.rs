use facility_booking_backend::{
    api::router::create_router,
    config::{BookingDefaults, Config},
    infra::factory::bootstrap_state,
    state::AppState,
};
use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub cart_dir: String,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub fn new() -> Self {
        let cart_dir = format!("./test-carts-{}", Uuid::new_v4());
        Self::with_cart_dir(cart_dir)
    }

    pub fn with_cart_dir(cart_dir: String) -> Self {
        let config = Config {
            port: 0,
            cart_storage_dir: cart_dir.clone(),
            defaults: BookingDefaults::default(),
        };

        let state = Arc::new(bootstrap_state(&config));
        let router = create_router(state.clone());

        Self { router, cart_dir, state }
    }

    /// Fresh process against the same cart directory. Memory is gone, the
    /// files are not.
    pub fn restarted(&self) -> Self {
        Self::with_cart_dir(self.cart_dir.clone())
    }

    pub async fn post(&self, uri: &str, body: Value) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    pub async fn get(&self, uri: &str) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub async fn delete(&self, uri: &str) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(Request::builder().method("DELETE").uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub async fn create_zone(&self, zone_id: &str, facility_id: &str, price_per_hour: i64) {
        let res = self
            .post(
                "/api/v1/zones",
                json!({
                    "zone_id": zone_id,
                    "facility_id": facility_id,
                    "name": format!("Zone {}", zone_id),
                    "price_per_hour": price_per_hour,
                }),
            )
            .await;
        assert!(res.status().is_success(), "zone setup failed: {}", res.status());
    }

    pub async fn add_blackout(&self, date: &str, reason: &str) {
        let res = self
            .post("/api/v1/blackouts", json!({ "date": date, "reason": reason }))
            .await;
        assert!(res.status().is_success(), "blackout setup failed: {}", res.status());
    }

    pub async fn register_booking(&self, zone_id: &str, facility_id: &str, date: &str, time_slot: &str) -> Value {
        let res = self
            .post(
                "/api/v1/bookings",
                json!({
                    "facility_id": facility_id,
                    "zone_id": zone_id,
                    "date": date,
                    "time_slot": time_slot,
                }),
            )
            .await;
        assert!(res.status().is_success(), "booking setup failed: {}", res.status());
        parse_body(res).await
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.cart_dir);
    }
}

#[allow(dead_code)]
pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
