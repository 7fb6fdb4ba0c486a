use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info};
use crate::state::AppState;

/// Periodically flushes the availability cache's pending maintenance work so
/// expired entries are reclaimed even when the service sits idle.
pub async fn start_cache_maintenance(state: Arc<AppState>) {
    info!("Starting cache maintenance worker...");

    loop {
        sleep(Duration::from_secs(60)).await;
        state.availability_cache.run_pending_tasks().await;
        debug!(
            entries = state.availability_cache.entry_count(),
            "availability cache maintenance pass complete"
        );
    }
}
