//! Error taxonomy for calls to the backend and AI services.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is caught where the call is made and becomes an inline
//! message or the thread banner. Human-readable text comes from the error
//! body when the service supplies one (`message`, `detail` or `error`).

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Longest plain-text error body surfaced verbatim.
const MAX_PLAIN_BODY: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The service rejected the request (4xx).
    #[error("{message}")]
    Validation { status: u16, message: String },

    /// The service failed (5xx).
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// Rejected client-side before any request was issued.
    #[error("nothing to send")]
    EmptyInput,

    /// Browser-only call made from a non-browser build.
    #[error("not available on server")]
    Unavailable,

    /// Client state needed to build the request has been disposed.
    #[error("the page is no longer active")]
    StateGone,
}

impl ApiError {
    /// Classify a non-success response by status, surfacing the body's
    /// message when present.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = extract_message(body).unwrap_or_else(|| format!("request failed: {status}"));
        if status >= 500 {
            Self::Server { status, message }
        } else {
            Self::Validation { status, message }
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Validation { status, .. } | Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The access token was missing, expired or revoked.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Stable code for log lines.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Network(_) => "E_NETWORK",
            Self::Validation { .. } => "E_VALIDATION",
            Self::Server { .. } => "E_SERVER",
            Self::Decode(_) => "E_DECODE",
            Self::EmptyInput => "E_EMPTY_INPUT",
            Self::Unavailable => "E_UNAVAILABLE",
            Self::StateGone => "E_STATE_GONE",
        }
    }
}

/// Pull a human-readable message out of an error body.
///
/// JSON bodies are searched for `message`, `detail` and `error` in that
/// order; a `detail` array (request validation failures) yields its first
/// entry's `msg`. Short non-JSON bodies are returned as-is.
#[must_use]
pub fn extract_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    let Ok(value) = serde_json::from_str::<Value>(trimmed) else {
        return (trimmed.len() <= MAX_PLAIN_BODY).then(|| trimmed.to_owned());
    };
    let root = value.get("metadata").filter(|m| m.is_object()).unwrap_or(&value);
    ["message", "detail", "error"]
        .iter()
        .filter_map(|key| root.get(*key))
        .find_map(message_from_value)
}

fn message_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_owned()),
        Value::Array(items) => items.iter().find_map(|item| match item.get("msg") {
            Some(msg) => message_from_value(msg),
            None => message_from_value(item),
        }),
        Value::Object(map) => map.get("message").and_then(message_from_value),
        _ => None,
    }
}
