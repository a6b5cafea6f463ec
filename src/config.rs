//! API configuration parsed from environment variables.

use crate::error::SyncError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: String,
    pub timeouts: ApiTimeouts,
}

impl ApiConfig {
    /// Build typed API config from environment variables.
    ///
    /// Required:
    /// - `PORTAL_API_TOKEN`: portal API token for the authenticated user
    ///
    /// Optional:
    /// - `PORTAL_BASE_URL`: default `http://localhost:5000`
    /// - `PORTAL_REQUEST_TIMEOUT_SECS`: default 30
    /// - `PORTAL_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::MissingToken`] when `PORTAL_API_TOKEN` is unset.
    pub fn from_env() -> Result<Self, SyncError> {
        let token = std::env::var("PORTAL_API_TOKEN")
            .map_err(|_| SyncError::MissingToken { var: "PORTAL_API_TOKEN".into() })?;
        let base_url = std::env::var("PORTAL_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let timeouts = ApiTimeouts {
            request_secs: env_parse_u64("PORTAL_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("PORTAL_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        Ok(Self { base_url, token, timeouts })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
