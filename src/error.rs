//! Error types for API operations
//!
//! Errors are classified by how the UI should react:
//! - Auth: forces logout + redirect to login
//! - Validation / NotFound: shown inline, never fatal
//! - Network: toast with a retry affordance
//! - ProfileResolution: blocks dependent page content, manual retry

use std::collections::BTreeMap;

use thiserror::Error;

/// Errors surfaced by the transport, services, and the identity resolver.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 422 with Laravel's per-field message map.
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        errors: BTreeMap<String, Vec<String>>,
    },

    /// 401 — the session has been cleared by the time this is returned.
    #[error("Session expired: {0}")]
    Auth(String),

    /// 404 — the resource does not exist; render an empty state.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Connection-level failure (DNS, refused, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// Response body was not the JSON shape we expected.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Any other non-2xx status the taxonomy does not name.
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Identity resolver failure — blocks dependent page content.
    #[error("Profile resolution failed: {0}")]
    ProfileResolution(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl ApiError {
    /// Returns true if retrying the same call may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ApiError::Network(_) | ApiError::Server { .. } | ApiError::ProfileResolution(_)
        )
    }

    /// Returns true if the caller must drop the session and re-authenticate.
    pub fn forces_logout(&self) -> bool {
        matches!(self, ApiError::Auth(_))
    }

    /// First field-level validation message, if any.
    pub fn first_field_error(&self) -> Option<&str> {
        match self {
            ApiError::Validation { errors, .. } => errors
                .values()
                .flat_map(|msgs| msgs.iter())
                .next()
                .map(String::as_str),
            _ => None,
        }
    }

    /// Toast-ready text for the user.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Validation { message, .. } => self
                .first_field_error()
                .unwrap_or(message.as_str())
                .to_string(),
            ApiError::Auth(_) => "Session expired. Please login again.".to_string(),
            ApiError::NotFound(what) => format!("{} was not found.", what),
            ApiError::Network(_) => "Network error. Please check your connection.".to_string(),
            ApiError::Parse(_) | ApiError::Server { .. } => "An error occurred.".to_string(),
            ApiError::ProfileResolution(_) => {
                "Failed to load your profile. Please try again later.".to_string()
            }
            ApiError::Config(msg) | ApiError::Io(msg) => msg.clone(),
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Parse(err.to_string())
    }
}
