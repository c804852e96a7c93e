//! HTTP client for network-based API calls

use crate::ClientConfig;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use shared::{ApiFailure, ApiResult};
use std::collections::HashMap;
use std::time::Duration;

/// Header that tells a tunneling proxy to skip its interstitial warning page
const TUNNEL_SKIP_WARNING_HEADER: &str = "ngrok-skip-browser-warning";

/// HTTP client for making requests to the restaurant backend
///
/// Stateless across calls beyond its fixed configuration; cheaply cloneable
/// and safe to share between concurrent calls. Nothing is retried and a
/// failed call never invalidates the client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .default_headers(default_headers(&config.extra_headers))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.receive_timeout_ms))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request expecting a JSON object
    pub async fn get(
        &self,
        path: &str,
        query: Option<&HashMap<String, String>>,
        token: Option<&str>,
    ) -> ApiResult<Value> {
        match self.send(Method::GET, path, query, None, token).await {
            Ok(raw) => handle_object(raw),
            Err(failure) => ApiResult::Failure(failure),
        }
    }

    /// Make a GET request expecting a JSON array
    pub async fn get_list(
        &self,
        path: &str,
        query: Option<&HashMap<String, String>>,
        token: Option<&str>,
    ) -> ApiResult<Vec<Value>> {
        match self.send(Method::GET, path, query, None, token).await {
            Ok(raw) => handle_list(raw),
            Err(failure) => ApiResult::Failure(failure),
        }
    }

    /// Make a POST request with an optional JSON body
    pub async fn post(
        &self,
        path: &str,
        query: Option<&HashMap<String, String>>,
        body: Option<&Value>,
        token: Option<&str>,
    ) -> ApiResult<Value> {
        match self.send(Method::POST, path, query, body, token).await {
            Ok(raw) => handle_object(raw),
            Err(failure) => ApiResult::Failure(failure),
        }
    }

    /// Make a PUT request with an optional JSON body
    pub async fn put(
        &self,
        path: &str,
        query: Option<&HashMap<String, String>>,
        body: Option<&Value>,
        token: Option<&str>,
    ) -> ApiResult<Value> {
        match self.send(Method::PUT, path, query, body, token).await {
            Ok(raw) => handle_object(raw),
            Err(failure) => ApiResult::Failure(failure),
        }
    }

    /// Make a PATCH request with an optional JSON body
    pub async fn patch(
        &self,
        path: &str,
        query: Option<&HashMap<String, String>>,
        body: Option<&Value>,
        token: Option<&str>,
    ) -> ApiResult<Value> {
        match self.send(Method::PATCH, path, query, body, token).await {
            Ok(raw) => handle_object(raw),
            Err(failure) => ApiResult::Failure(failure),
        }
    }

    /// Make a DELETE request
    pub async fn delete(
        &self,
        path: &str,
        query: Option<&HashMap<String, String>>,
        token: Option<&str>,
    ) -> ApiResult<Value> {
        match self.send(Method::DELETE, path, query, None, token).await {
            Ok(raw) => handle_object(raw),
            Err(failure) => ApiResult::Failure(failure),
        }
    }

    /// Execute one request/response cycle
    ///
    /// Everything that goes wrong before a full response body is in hand is
    /// a transport failure and classifies as `Network`.
    async fn send(
        &self,
        method: Method,
        path: &str,
        query: Option<&HashMap<String, String>>,
        body: Option<&Value>,
        token: Option<&str>,
    ) -> Result<RawResponse, ApiFailure> {
        let url = self.join_url(path);
        let mut request = self.client.request(method.clone(), &url);

        if let Some(params) = query {
            request = request.query(params);
        }
        if let Some(token) = token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        tracing::debug!(%method, %url, "sending request");

        let response = request.send().await.map_err(network_failure)?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = response.text().await.map_err(network_failure)?;

        Ok(RawResponse {
            status,
            content_type,
            body,
        })
    }

    fn join_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Raw response material the classification pipeline runs on
struct RawResponse {
    status: StatusCode,
    content_type: Option<String>,
    body: String,
}

fn default_headers(extra: &[(String, String)]) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(
        HeaderName::from_static(TUNNEL_SKIP_WARNING_HEADER),
        HeaderValue::from_static("true"),
    );

    for (name, value) in extra {
        match (
            HeaderName::try_from(name.as_str()),
            HeaderValue::try_from(value.as_str()),
        ) {
            (Ok(name), Ok(value)) => {
                headers.insert(name, value);
            }
            _ => tracing::warn!(header = %name, "skipping invalid default header"),
        }
    }

    headers
}

fn network_failure(err: reqwest::Error) -> ApiFailure {
    let message = if err.is_timeout() {
        format!("Request timed out: {}", err)
    } else {
        format!("Request failed: {}", err)
    };
    ApiFailure::network(message)
}

/// Decode a raw response into its JSON payload, or the classified failure
///
/// Order matters: HTML detection runs before any parse attempt (a
/// misconfigured gateway can return an HTML error page with status 200), the
/// parse runs before status branching, and only then is a non-success status
/// classified.
fn decode(raw: &RawResponse) -> Result<Value, ApiFailure> {
    if looks_like_html(raw) {
        return Err(ApiFailure::server(format!(
            "Server returned HTML instead of JSON. Status: {}",
            raw.status.as_u16()
        )));
    }

    let payload = parse_json(&raw.body)
        .map_err(|e| ApiFailure::generic(format!("Failed to parse response: {}", e)))?;

    if raw.status.is_success() {
        Ok(payload)
    } else {
        let message = error_message(raw.status, &payload);
        tracing::warn!(status = raw.status.as_u16(), %message, "request rejected");
        Err(ApiFailure::from_status(raw.status, message))
    }
}

fn handle_object(raw: RawResponse) -> ApiResult<Value> {
    match decode(&raw) {
        Ok(payload) => ApiResult::Success(shape_object(payload)),
        Err(failure) => ApiResult::Failure(failure),
    }
}

fn handle_list(raw: RawResponse) -> ApiResult<Vec<Value>> {
    match decode(&raw) {
        Ok(payload) => ApiResult::Success(shape_list(payload)),
        Err(failure) => ApiResult::Failure(failure),
    }
}

fn looks_like_html(raw: &RawResponse) -> bool {
    if raw
        .content_type
        .as_deref()
        .is_some_and(|ct| ct.to_ascii_lowercase().contains("text/html"))
    {
        return true;
    }
    let head = raw.body.trim_start();
    let lower = head
        .get(..head.len().min(16))
        .unwrap_or("")
        .to_ascii_lowercase();
    lower.starts_with("<!doctype") || lower.starts_with("<html")
}

/// Parse the body text as JSON; an empty body counts as JSON `null`
fn parse_json(body: &str) -> serde_json::Result<Value> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body)
}

/// A success payload is always an object; non-object roots get wrapped
fn shape_object(payload: Value) -> Value {
    if payload.is_object() {
        payload
    } else {
        serde_json::json!({ "data": payload })
    }
}

/// A list payload is the bare array, the object's `data` array, or empty
///
/// Unexpected shapes resolve to an empty list rather than a failure so list
/// screens render an empty state instead of an error.
fn shape_list(payload: Value) -> Vec<Value> {
    match payload {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Pull a displayable message out of an error response body
fn error_message(status: StatusCode, payload: &Value) -> String {
    if let Some(message) = payload.get("message").and_then(Value::as_str) {
        return message.to_string();
    }
    if let Some(message) = payload.get("error").and_then(Value::as_str) {
        return message.to_string();
    }
    if let Some(message) = payload.as_str() {
        return message.to_string();
    }
    format!("Server error: {}", status.as_u16())
}
