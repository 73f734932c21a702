use async_trait::async_trait;
use contracts::shared::api_error::ApiError;
use futures::future::{self, Either};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde_json::Value;

use super::{ApiRequest, Method, Transport};
use crate::shared::config::ApiConfig;

/// Browser transport built on `gloo-net`
///
/// Every request goes to `base_url + path`, carries
/// `Content-Type: application/json` and is abandoned after `timeout_ms`.
#[derive(Debug, Clone)]
pub struct GlooTransport {
    base_url: String,
    timeout_ms: u32,
}

impl GlooTransport {
    pub fn new(base_url: impl Into<String>, timeout_ms: u32) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_ms,
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.base_url.clone(), config.timeout_ms)
    }

    fn url_for(&self, request: &ApiRequest) -> String {
        format!("{}{}", self.base_url, request.path_and_query())
    }

    fn builder(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Delete => Request::delete(url),
        };
        builder.header("Content-Type", "application/json")
    }

    async fn send_once(&self, request: ApiRequest) -> Result<Option<Value>, ApiError> {
        let url = self.url_for(&request);
        let builder = self.builder(request.method, &url);

        let response = match request.body {
            Some(body) => {
                builder
                    .json(&body)
                    .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?
                    .send()
                    .await
            }
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Network(format!("Network Error: {}", e)))?;

        read_response(response).await
    }
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<Option<Value>, ApiError> {
        let pending = Box::pin(self.send_once(request));
        let timeout = TimeoutFuture::new(self.timeout_ms);

        match future::select(pending, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(ApiError::Timeout {
                timeout_ms: self.timeout_ms,
            }),
        }
    }
}

async fn read_response(response: Response) -> Result<Option<Value>, ApiError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(format!("Failed to read response: {}", e)))?;

    let body = body_value(&text);
    if !response.ok() {
        return Err(ApiError::http(status, body.unwrap_or(Value::Null)));
    }
    Ok(body)
}

/// JSON payload if the body parses, the raw text otherwise, `None` if empty
///
/// Plain-text bodies such as `"Product deleted successfully"` are kept as a
/// JSON string; callers expecting a record then fail at decoding.
fn body_value(text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }
    Some(serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string())))
}
