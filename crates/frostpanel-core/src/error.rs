//! Error types for the control panel.
//!
//! - [`ApiError`] - HTTP requests against the panel API
//! - [`LoginError`] - Login form submission
//! - [`StoreError`] - Bootstrap globals injected by the server-rendered page

use serde::Deserialize;
use thiserror::Error;

/// Errors raised by requests against the panel API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Browser window not available
    #[error("browser window not available")]
    NoWindow,
    /// Request never produced a response (offline, CORS, aborted)
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response, with the first error detail from the body if any
    #[error("HTTP error: {status}")]
    Http { status: u16, detail: Option<String> },
    /// Response body did not match the expected shape
    #[error("failed to decode response: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ErrorItem>,
}

#[derive(Deserialize)]
struct ErrorItem {
    detail: Option<String>,
}

impl ApiError {
    /// Build an error from a non-2xx response.
    ///
    /// The panel answers failures with `{"errors":[{"detail": "..."}]}`; the
    /// first detail is kept for display. Bodies of any other shape only keep
    /// the status code.
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.errors.into_iter().find_map(|e| e.detail))
            .filter(|d| !d.trim().is_empty());
        Self::Http { status, detail }
    }

    /// Human readable message for the flash area.
    pub fn to_human(&self) -> String {
        match self {
            Self::Http {
                detail: Some(detail),
                ..
            } => detail.clone(),
            other => other.to_string(),
        }
    }
}

/// Errors raised while submitting the login form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("A username or email must be provided.")]
    MissingUsername,
    #[error("Please enter your account password.")]
    MissingPassword,
    #[error("reCAPTCHA is enabled but could not be executed: {0}")]
    RecaptchaUnavailable(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl LoginError {
    /// Human readable message for the flash area.
    pub fn to_human(&self) -> String {
        match self {
            Self::Api(e) => e.to_human(),
            other => other.to_string(),
        }
    }
}

/// Errors raised while reading the page's bootstrap globals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("bootstrap global `{0}` is missing")]
    Missing(&'static str),
    #[error("bootstrap global `{name}` is malformed: {reason}")]
    Malformed { name: &'static str, reason: String },
}
