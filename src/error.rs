//! Error taxonomy for preference synchronization.
//!
//! All submit failures are handled uniformly at the synchronizer boundary:
//! converted into a generic user-visible notification while the store stays
//! untouched. The variants and `error_code` strings exist for logs, not for
//! differentiated user messaging.

/// Errors produced by the preferences API and synchronizer.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The request never produced a response (DNS, connect, transport).
    #[error("network error: {0}")]
    Network(String),

    /// The server rejected the request (bad patch shape, unknown resource).
    #[error("request rejected: status {status}")]
    Validation { status: u16, body: String },

    /// The caller is unauthenticated or unauthorized.
    #[error("not authorized: status {status}")]
    Permission { status: u16 },

    /// A success response body could not be deserialized.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// The required API token environment variable is not set.
    #[error("missing API token: env var {var} not set")]
    MissingToken { var: String },

    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    Config(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl SyncError {
    /// Stable machine-readable code for logging and diagnostics.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Network(_) => "E_NETWORK",
            Self::Validation { .. } => "E_VALIDATION",
            Self::Permission { .. } => "E_PERMISSION",
            Self::Parse(_) => "E_PARSE",
            Self::MissingToken { .. } => "E_MISSING_TOKEN",
            Self::Config(_) => "E_CONFIG",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
        }
    }

    /// Generic text surfaced to the user on a failed preference update.
    ///
    /// Deliberately identical across variants: the settings page shows one
    /// failure message and leaves the distinction to the logs.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        "Failed to update notification preferences"
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
