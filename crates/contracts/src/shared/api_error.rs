//! Structured error returned by every call against the REST API

use serde_json::Value;
use thiserror::Error;

/// Failure of a single request
///
/// The `Display` text is the transport-level message shown to the user when
/// the response carries nothing better.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Non-2xx response. `body` is the parsed JSON payload, the raw text as a
    /// JSON string when it is not JSON, or `Null` when the body was empty.
    #[error("Request failed with status code {status}")]
    Http { status: u16, body: Value },

    /// No response before the configured timeout elapsed
    #[error("timeout of {timeout_ms}ms exceeded")]
    Timeout { timeout_ms: u32 },

    /// Request could not be sent (host unreachable, CORS, ...)
    #[error("{0}")]
    Network(String),

    /// Request or response body could not be (de)serialized
    #[error("{0}")]
    Decode(String),
}

impl ApiError {
    pub fn http(status: u16, body: Value) -> Self {
        ApiError::Http { status, body }
    }

    /// HTTP status, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Response payload when it carries anything (JS-truthy: not null, not "")
    pub fn response_body(&self) -> Option<&Value> {
        match self {
            ApiError::Http { body, .. } => match body {
                Value::Null => None,
                Value::String(s) if s.is_empty() => None,
                other => Some(other),
            },
            _ => None,
        }
    }
}
