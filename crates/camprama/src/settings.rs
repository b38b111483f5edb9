//! User preferences stored next to the packlists.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::Result;
use crate::storage::KeyValueStore;

/// Key holding the notifications flag as a JSON boolean.
pub const NOTIFICATIONS_KEY: &str = "settings_notifications_enabled";

/// Text shared when recommending the app.
pub const APP_SHARE_MESSAGE: &str =
    "Check out Frontier CampRama Guide — trail wisdom, packlists and safety tips!";

/// Preference accessors over a key-value backend.
#[derive(Debug, Clone)]
pub struct Settings {
    backend: Arc<dyn KeyValueStore>,
}

impl Settings {
    /// Wrap a backend.
    #[must_use]
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Whether notifications are on. Missing or unreadable values count as on.
    pub async fn notifications_enabled(&self) -> bool {
        match self.backend.get(NOTIFICATIONS_KEY).await {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Ignoring unreadable {}: {}", NOTIFICATIONS_KEY, e);
                true
            }),
            Ok(None) => true,
            Err(e) => {
                warn!("Failed to read {}: {}", NOTIFICATIONS_KEY, e);
                true
            }
        }
    }

    /// Turn notifications on or off.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    pub async fn set_notifications_enabled(&self, enabled: bool) -> Result<()> {
        let raw = serde_json::to_string(&enabled)?;
        self.backend.set(NOTIFICATIONS_KEY, &raw).await?;
        debug!("Notifications {}", if enabled { "enabled" } else { "disabled" });
        Ok(())
    }

    /// Flip notifications and return the new state.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    pub async fn toggle_notifications(&self) -> Result<bool> {
        let next = !self.notifications_enabled().await;
        self.set_notifications_enabled(next).await?;
        Ok(next)
    }
}
