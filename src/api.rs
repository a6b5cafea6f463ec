//! Portal REST API client.
//!
//! ARCHITECTURE
//! ============
//! The synchronizer and the localization slice depend on the narrow
//! [`PreferencesApi`] / [`LocalizationApi`] traits so tests can script
//! responses without a server. [`HttpApi`] is the production implementation:
//! token-authenticated JSON over HTTP against the portal, whose responses are
//! wrapped in a `{"status": "success", "data": ...}` envelope. An envelope
//! with a non-success status is a rejection even when the HTTP status is 200.
//!
//! The server merges preference patches per section (shallow), so concurrent
//! submits touching different sections do not clobber each other.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::SyncError;
use crate::localization::Localization;
use crate::model::{PatchDocument, PreferenceDocument};

/// Read/write capability for the user's notification preferences.
#[async_trait::async_trait]
pub trait PreferencesApi: Send + Sync {
    /// Fetch the authenticated user's current notification preferences.
    ///
    /// # Errors
    ///
    /// Returns a [`SyncError`] when the request fails or the response is
    /// malformed.
    async fn fetch_preferences(&self) -> Result<PreferenceDocument, SyncError>;

    /// Apply a partial preference update and return the full updated
    /// document. Sections absent from the patch are left untouched.
    ///
    /// # Errors
    ///
    /// Returns a [`SyncError`] when the request fails, the server rejects
    /// the patch, or the response is malformed.
    async fn update_preferences(&self, patch: &PatchDocument)
    -> Result<PreferenceDocument, SyncError>;
}

/// Read capability for GCN localizations.
#[async_trait::async_trait]
pub trait LocalizationApi: Send + Sync {
    /// Fetch one localization by `(dateobs, localization_name)`.
    ///
    /// # Errors
    ///
    /// Returns a [`SyncError`] when the request fails or the localization
    /// does not exist.
    async fn fetch_localization(
        &self,
        dateobs: &str,
        localization_name: &str,
    ) -> Result<Localization, SyncError>;
}

// =============================================================================
// HTTP IMPLEMENTATION
// =============================================================================

/// Token-authenticated portal API client.
pub struct HttpApi {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl HttpApi {
    /// Build a client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::HttpClientBuild`] if the HTTP client cannot be
    /// constructed.
    pub fn new(config: &ApiConfig) -> Result<Self, SyncError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| SyncError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone(), token: config.token.clone() })
    }

    /// Build a client from environment variables. See [`ApiConfig::from_env`].
    ///
    /// # Errors
    ///
    /// Returns a [`SyncError`] if required configuration is missing or the
    /// HTTP client cannot be constructed.
    pub fn from_env() -> Result<Self, SyncError> {
        Self::new(&ApiConfig::from_env()?)
    }

    async fn get_data(&self, path: &str) -> Result<Value, SyncError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(url)
            .header("Authorization", format!("token {}", self.token))
            .send()
            .await
            .map_err(|e| SyncError::Network(e.to_string()))?;
        read_envelope(response).await
    }

    async fn patch_data(&self, path: &str, body: &impl Serialize) -> Result<Value, SyncError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .patch(url)
            .header("Authorization", format!("token {}", self.token))
            .json(body)
            .send()
            .await
            .map_err(|e| SyncError::Network(e.to_string()))?;
        read_envelope(response).await
    }
}

#[async_trait::async_trait]
impl PreferencesApi for HttpApi {
    async fn fetch_preferences(&self) -> Result<PreferenceDocument, SyncError> {
        let data = self.get_data("/api/internal/profile").await?;
        // Notifications live under preferences in the profile payload; a user
        // who never configured any has no entry at all.
        let notifications = data
            .get("preferences")
            .and_then(|p| p.get("notifications"))
            .cloned()
            .unwrap_or_else(|| Value::Object(serde_json::Map::default()));
        serde_json::from_value(notifications).map_err(|e| SyncError::Parse(e.to_string()))
    }

    async fn update_preferences(
        &self,
        patch: &PatchDocument,
    ) -> Result<PreferenceDocument, SyncError> {
        let data = self
            .patch_data("/api/internal/profile/notifications", patch)
            .await?;
        serde_json::from_value(data).map_err(|e| SyncError::Parse(e.to_string()))
    }
}

#[async_trait::async_trait]
impl LocalizationApi for HttpApi {
    async fn fetch_localization(
        &self,
        dateobs: &str,
        localization_name: &str,
    ) -> Result<Localization, SyncError> {
        let path = format!("/api/gcn/localization/{dateobs}/name/{localization_name}");
        let data = self.get_data(&path).await?;
        serde_json::from_value(data).map_err(|e| SyncError::Parse(e.to_string()))
    }
}

// =============================================================================
// ENVELOPE
// =============================================================================

#[derive(Deserialize)]
struct Envelope {
    status: String,
    #[serde(default)]
    data: Value,
    #[serde(default)]
    message: Option<String>,
}

async fn read_envelope(response: reqwest::Response) -> Result<Value, SyncError> {
    let status = response.status().as_u16();
    let text = response
        .text()
        .await
        .map_err(|e| SyncError::Network(e.to_string()))?;
    parse_envelope(status, &text)
}

/// Map an HTTP status and body to either the envelope's `data` or a typed
/// error. Auth failures take precedence over body inspection.
pub(crate) fn parse_envelope(status: u16, text: &str) -> Result<Value, SyncError> {
    if status == 401 || status == 403 {
        return Err(SyncError::Permission { status });
    }
    if !(200..300).contains(&status) {
        return Err(SyncError::Validation { status, body: text.to_string() });
    }
    let envelope: Envelope =
        serde_json::from_str(text).map_err(|e| SyncError::Parse(e.to_string()))?;
    if envelope.status != "success" {
        return Err(SyncError::Validation {
            status,
            body: envelope.message.unwrap_or_else(|| text.to_string()),
        });
    }
    Ok(envelope.data)
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
