//! API utilities: backend health check and user-facing error messages

use contracts::shared::api_error::ApiError;
use serde_json::Value;

use crate::shared::http::{ApiClient, Transport};

pub const CONNECTION_OK: &str = "Backend connection successful";
pub const CONNECTION_FAILED: &str =
    "Backend connection failed. Please ensure the backend application is running.";

/// Fallback when an object payload has no usable `message`
pub const GENERIC_SERVER_ERROR: &str = "An error occurred";
/// Fallback when nothing at all can be extracted
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

/// Result of `test_connection`, shown by the home page status indicator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionCheck {
    pub success: bool,
    pub message: String,
}

/// Lightweight read against a known-good endpoint. Never retried.
pub async fn test_connection<T: Transport>(client: &ApiClient<T>) -> ConnectionCheck {
    match client.get::<Value>("/products").await {
        Ok(_) => ConnectionCheck {
            success: true,
            message: CONNECTION_OK.to_string(),
        },
        Err(_) => ConnectionCheck {
            success: false,
            message: CONNECTION_FAILED.to_string(),
        },
    }
}

/// Extract a displayable message from an API error
///
/// Priority:
/// 1. response payload object -> its `message` field (or a generic text)
/// 2. response payload plain string -> the string
/// 3. transport-level message
/// 4. "An unexpected error occurred"
pub fn format_error_message(error: &ApiError) -> String {
    if let Some(body) = error.response_body() {
        return match body {
            Value::String(text) => text.clone(),
            other => other
                .get("message")
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
                .unwrap_or(GENERIC_SERVER_ERROR)
                .to_string(),
        };
    }

    let message = error.to_string();
    if message.is_empty() {
        UNEXPECTED_ERROR.to_string()
    } else {
        message
    }
}
