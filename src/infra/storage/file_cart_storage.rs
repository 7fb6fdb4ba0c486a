use crate::domain::models::cart::CartItem;
use crate::domain::ports::CartStorage;
use crate::error::AppError;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;
use tracing::warn;

/// One JSON file per session key under a configured directory. Dates
/// round-trip through chrono's serde formats, so a reloaded cart carries
/// identical date values.
pub struct FileCartStorage {
    dir: PathBuf,
}

impl FileCartStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, session_key: &str) -> PathBuf {
        // Session keys come from URLs; anything outside a safe alphabet is
        // flattened so a key can never escape the storage directory.
        let sanitized: String = session_key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.json", sanitized))
    }
}

#[async_trait]
impl CartStorage for FileCartStorage {
    async fn load(&self, session_key: &str) -> Result<Option<Vec<CartItem>>, AppError> {
        let path = self.path_for(session_key);
        let raw = match fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(items) => Ok(Some(items)),
            Err(e) => {
                // Corrupted mirror: discard it and let the session start
                // from an empty cart.
                warn!("discarding corrupted cart for session {}: {}", session_key, e);
                let _ = fs::remove_file(&path).await;
                Ok(None)
            }
        }
    }

    async fn save(&self, session_key: &str, items: &[CartItem]) -> Result<(), AppError> {
        fs::create_dir_all(&self.dir).await?;
        let payload = serde_json::to_string_pretty(items)?;
        fs::write(self.path_for(session_key), payload).await?;
        Ok(())
    }

    async fn remove(&self, session_key: &str) -> Result<(), AppError> {
        match fs::remove_file(self.path_for(session_key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
