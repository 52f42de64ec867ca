//! JSON request plumbing shared by the public (cookie) and admin (API key)
//! calls.
//!
//! The platform fetch lives behind [`Transport`] so the same normalisation
//! runs in the browser (`gloo-net`) and under native tests.

use async_trait::async_trait;
use http::Method;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    config::BackendConfig,
    error::{body_sample, ApiError, BODY_SAMPLE_CHARS},
};

/// Header carrying the body media type.
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
/// Media type of every request body and every expected response.
pub const JSON_CONTENT_TYPE: &str = "application/json";
/// Header carrying the admin API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// What a caller wants sent, before the base URL and credentials are applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Path beginning with `/`, already percent-encoded where needed.
    pub path: String,
    /// Optional JSON body.
    pub body: Option<Value>,
    /// Caller headers; these win over defaults on name collision.
    pub headers: Vec<(String, String)>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>, body: Option<Value>) -> Self {
        Self {
            method,
            path: path.into(),
            body,
            headers: Vec::new(),
        }
    }

    /// `GET path`.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path, None)
    }

    /// `POST path` with a JSON body.
    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::POST, path, Some(body))
    }

    /// `POST path` with no body.
    pub fn post_empty(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path, None)
    }

    /// `DELETE path`.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path, None)
    }

    /// `POST path` with any serialisable body.
    pub fn post_json<T: Serialize>(path: impl Into<String>, body: &T) -> Result<Self, ApiError> {
        let value =
            serde_json::to_value(body).map_err(|err| ApiError::Serialize(err.to_string()))?;
        Ok(Self::post(path, value))
    }

    /// Adds a caller header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Whether the browser should attach session cookies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookiePolicy {
    /// `credentials: "include"`.
    Include,
    /// `credentials: "omit"`.
    Omit,
}

/// A fully composed request handed to the [`Transport`].
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute or origin-relative URL.
    pub url: String,
    /// Final header list after merging.
    pub headers: Vec<(String, String)>,
    /// Encoded JSON body.
    pub body: Option<String>,
    /// Cookie handling.
    pub cookies: CookiePolicy,
}

impl PreparedRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// What came back from the wire, before interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// HTTP status text.
    pub status_text: String,
    /// `Content-Type` header, if any.
    pub content_type: Option<String>,
    /// Body read as text.
    pub body: String,
}

impl RawResponse {
    /// Status is in `200..=299`.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Platform hook that performs the actual request.
#[async_trait(?Send)]
pub trait Transport {
    /// Sends the request; only failures to obtain any response are errors.
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse, ApiError>;
}

/// Gate snapshot carried by admin calls.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdminCredentials {
    /// Derived `can_use_admin`.
    pub can_use_admin: bool,
    /// Key sent as `x-api-key` when non-empty.
    pub api_key: String,
}

/// Merges `overrides` into `defaults`; later names replace earlier ones
/// regardless of case.
pub fn merge_headers(
    defaults: Vec<(String, String)>,
    overrides: &[(String, String)],
) -> Vec<(String, String)> {
    let mut merged = defaults;
    for (name, value) in overrides {
        merged.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
        merged.push((name.clone(), value.clone()));
    }
    merged
}

/// Interprets a raw response.
///
/// An empty body on success becomes `{}`. Otherwise the content type must be
/// JSON, the body must parse, and a non-2xx status becomes
/// [`ApiError::Backend`] using `error`, `message`, or `HTTP <status>:
/// <text>`.
pub fn normalize_response(response: RawResponse) -> Result<Value, ApiError> {
    if response.is_success() && response.body.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }

    let is_json = response
        .content_type
        .as_deref()
        .map(|value| value.to_ascii_lowercase().contains(JSON_CONTENT_TYPE))
        .unwrap_or(false);
    if !is_json {
        return Err(ApiError::NonJsonResponse {
            status: response.status,
            status_text: response.status_text,
            body_sample: body_sample(&response.body, BODY_SAMPLE_CHARS),
        });
    }

    let data: Value =
        serde_json::from_str(&response.body).map_err(|_| ApiError::MalformedJson {
            status: response.status,
            status_text: response.status_text.clone(),
        })?;

    if !response.is_success() {
        let message = ["error", "message"]
            .iter()
            .find_map(|field| {
                data.get(*field)
                    .and_then(Value::as_str)
                    .filter(|value| !value.is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| format!("HTTP {}: {}", response.status, response.status_text));
        return Err(ApiError::Backend {
            message,
        });
    }

    Ok(data)
}

/// Composes requests against one backend and normalises the replies.
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
    config: BackendConfig,
}

impl<T: Transport> ApiClient<T> {
    /// Builds a client for `config`.
    pub fn new(transport: T, config: BackendConfig) -> Self {
        Self {
            transport,
            config,
        }
    }

    /// Backend this client targets.
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Borrow of the transport, mainly for tests.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn prepare(
        &self,
        request: ApiRequest,
        cookies: CookiePolicy,
        mut defaults: Vec<(String, String)>,
    ) -> Result<PreparedRequest, ApiError> {
        defaults.insert(0, (CONTENT_TYPE_HEADER.to_string(), JSON_CONTENT_TYPE.to_string()));
        let body = request
            .body
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(|err| ApiError::Serialize(err.to_string()))?;
        Ok(PreparedRequest {
            url: self.config.url(&request.path),
            headers: merge_headers(defaults, &request.headers),
            method: request.method,
            body,
            cookies,
        })
    }

    async fn execute(&self, prepared: PreparedRequest) -> Result<Value, ApiError> {
        log::debug!("{} {}", prepared.method, prepared.url);
        let response = self.transport.send(prepared).await?;
        normalize_response(response)
    }

    /// Session-cookie call used by the user-facing pages.
    pub async fn public_call(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let prepared = self.prepare(request, CookiePolicy::Include, Vec::new())?;
        self.execute(prepared).await
    }

    /// API-key call used by the admin dashboard.
    ///
    /// Refuses without touching the transport while the gate is closed.
    pub async fn admin_call(
        &self,
        credentials: &AdminCredentials,
        request: ApiRequest,
    ) -> Result<Value, ApiError> {
        if !credentials.can_use_admin {
            return Err(ApiError::AdminModeRequired);
        }
        let mut defaults = Vec::new();
        if !credentials.api_key.is_empty() {
            defaults.push((API_KEY_HEADER.to_string(), credentials.api_key.clone()));
        }
        let prepared = self.prepare(request, CookiePolicy::Omit, defaults)?;
        self.execute(prepared).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn response(status: u16, content_type: Option<&str>, body: &str) -> RawResponse {
        RawResponse {
            status,
            status_text: match status {
                200 => "OK",
                400 => "Bad Request",
                404 => "Not Found",
                _ => "Internal Server Error",
            }
            .to_string(),
            content_type: content_type.map(str::to_string),
            body: body.to_string(),
        }
    }

    #[test]
    fn success_json_passes_through() {
        let value =
            normalize_response(response(200, Some("application/json; charset=utf-8"), r#"{"ok":true}"#))
                .expect("json body");
        assert_eq!(value, json!({"ok": true}));
    }

    #[test]
    fn empty_success_body_becomes_empty_object() {
        let value = normalize_response(response(200, None, "  ")).expect("empty body");
        assert_eq!(value, json!({}));
    }

    #[test]
    fn html_error_page_reports_status_and_sample() {
        let html = format!("<!DOCTYPE html><html><body>{}</body></html>", "x".repeat(200));
        let err = normalize_response(response(500, Some("text/html"), &html))
            .expect_err("html is not json");
        let message = err.to_string();
        assert!(message.contains("500"));
        assert!(message.contains(&html[..100]));
        assert!(!message.contains(&html[..101]));
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = normalize_response(response(200, Some("application/json"), "{oops"))
            .expect_err("bad json");
        assert!(matches!(err, ApiError::MalformedJson { status: 200, .. }));
    }

    #[test]
    fn backend_error_prefers_error_then_message_then_status() {
        let err = normalize_response(response(
            400,
            Some("application/json"),
            r#"{"error":"bad tweet","message":"ignored"}"#,
        ))
        .expect_err("400");
        assert_eq!(err.to_string(), "bad tweet");

        let err = normalize_response(response(404, Some("application/json"), r#"{"message":"no user"}"#))
            .expect_err("404");
        assert_eq!(err.to_string(), "no user");

        let err = normalize_response(response(500, Some("application/json"), "{}")).expect_err("500");
        assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
    }

    #[test]
    fn caller_headers_override_defaults_case_insensitively() {
        let merged = merge_headers(
            vec![(CONTENT_TYPE_HEADER.to_string(), JSON_CONTENT_TYPE.to_string())],
            &[("content-type".to_string(), "text/plain".to_string())],
        );
        assert_eq!(merged, vec![("content-type".to_string(), "text/plain".to_string())]);
    }
}
