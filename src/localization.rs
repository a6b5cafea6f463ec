//! GCN localization state slice.
//!
//! DESIGN
//! ======
//! The client keeps at most one localization in memory: the one currently on
//! screen, keyed by `(dateobs, localization_name)`. When the server pushes a
//! refresh signal (the transport and message routing live elsewhere), the
//! slice re-requests whatever key it currently holds; before any fetch the
//! signal is a no-op. Failures are logged and returned — the stored payload
//! is only ever replaced by a successful fetch.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::RwLock;

use crate::api::LocalizationApi;
use crate::error::SyncError;

/// One GCN localization payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Localization {
    pub dateobs: String,
    pub localization_name: String,
    /// Flattened 2D probability map. Large; kept opaque.
    pub flat_2d: Value,
    /// GeoJSON probability contour.
    pub contour: Value,
}

/// Holds the current localization and re-fetches it on server signal.
pub struct LocalizationSlice {
    api: Arc<dyn LocalizationApi>,
    current: RwLock<Option<Localization>>,
}

impl LocalizationSlice {
    #[must_use]
    pub fn new(api: Arc<dyn LocalizationApi>) -> Self {
        Self { api, current: RwLock::new(None) }
    }

    /// Snapshot of the currently held localization, if any.
    pub async fn current(&self) -> Option<Localization> {
        self.current.read().await.clone()
    }

    /// Fetch a localization and make it current.
    ///
    /// # Errors
    ///
    /// Returns a [`SyncError`] on failure; the previously held localization
    /// is kept.
    pub async fn fetch(
        &self,
        dateobs: &str,
        localization_name: &str,
    ) -> Result<Localization, SyncError> {
        match self.api.fetch_localization(dateobs, localization_name).await {
            Ok(localization) => {
                *self.current.write().await = Some(localization.clone());
                tracing::info!(%dateobs, %localization_name, "localization loaded");
                Ok(localization)
            }
            Err(e) => {
                tracing::warn!(
                    code = e.error_code(),
                    error = %e,
                    %dateobs,
                    %localization_name,
                    "localization fetch failed"
                );
                Err(e)
            }
        }
    }

    /// Re-request the currently held key after a server-pushed refresh
    /// signal. No-op when nothing has been fetched yet.
    ///
    /// # Errors
    ///
    /// Returns a [`SyncError`] if the re-fetch fails.
    pub async fn handle_refresh_signal(&self) -> Result<(), SyncError> {
        let key = self
            .current
            .read()
            .await
            .as_ref()
            .map(|l| (l.dateobs.clone(), l.localization_name.clone()));
        match key {
            Some((dateobs, name)) => self.fetch(&dateobs, &name).await.map(|_| ()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "localization_test.rs"]
mod tests;
