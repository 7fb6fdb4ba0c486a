#[tokio::main]
async fn main() {
    facility_booking_backend::run().await;
}
