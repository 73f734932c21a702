//! HTTP client wrapper
//!
//! - `Transport`: the seam between the client and the wire (one attempt, no retries)
//! - `GlooTransport`: browser implementation (base URL, default headers, timeout)
//! - `ApiClient`: typed requests on top of a transport; logs every error
//!   before handing it back to the caller

mod gloo;

#[cfg(test)]
pub mod fake;

pub use gloo::GlooTransport;

use async_trait::async_trait;
use contracts::shared::api_error::ApiError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        })
    }
}

/// Request relative to the configured base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Already escaped path, e.g. `/products/7`
    pub path: String,
    /// Raw query pairs, escaped by the transport
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// `path?k=v&...` with query values URL-encoded
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.path, query)
    }
}

/// Sends one request and returns the parsed body (`None` for an empty body)
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<Option<Value>, ApiError>;
}

/// Typed API client
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.fetch(ApiRequest::new(Method::Get, path)).await
    }

    pub async fn get_with_query<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<R, ApiError> {
        let request = query
            .iter()
            .fold(ApiRequest::new(Method::Get, path), |req, (k, v)| req.with_query(k, v));
        self.fetch(request).await
    }

    pub async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let request = ApiRequest::new(Method::Post, path).with_body(self.encode(path, body)?);
        self.fetch(request).await
    }

    pub async fn put<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let request = ApiRequest::new(Method::Put, path).with_body(self.encode(path, body)?);
        self.fetch(request).await
    }

    /// DELETE; any response body is ignored
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.dispatch(ApiRequest::new(Method::Delete, path)).await?;
        Ok(())
    }

    async fn fetch<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let target = format!("{} {}", request.method, request.path_and_query());
        let value = self.dispatch(request).await?;
        serde_json::from_value(value.unwrap_or(Value::Null)).map_err(|e| {
            let err = ApiError::Decode(format!("Failed to parse response: {}", e));
            log::error!("API Error: {} -> {}", target, err);
            err
        })
    }

    async fn dispatch(&self, request: ApiRequest) -> Result<Option<Value>, ApiError> {
        let target = format!("{} {}", request.method, request.path_and_query());
        log::debug!("{}", target);
        match self.transport.send(request).await {
            Ok(body) => Ok(body),
            Err(err) => {
                log::error!("API Error: {} -> {}", target, err);
                Err(err)
            }
        }
    }

    fn encode<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        serde_json::to_value(body).map_err(|e| {
            let err = ApiError::Decode(format!("Failed to serialize request: {}", e));
            log::error!("API Error: {} -> {}", path, err);
            err
        })
    }
}
