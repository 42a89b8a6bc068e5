//! Request and response values exchanged with the harness.
//!
//! # Design
//! A `RequestSpec` describes one HTTP call as plain data: method, endpoint
//! fragment, optional JSON body, query pairs, a per-call header overlay, and
//! an optional expected status. The harness consumes the spec and returns an
//! `ApiResponse` with the body kept as raw text; JSON parsing is deferred to
//! the `json()` / `json_as()` accessors so non-JSON error pages never break
//! the transport path.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// One HTTP call described as plain data, consumed by `Harness::send`.
///
/// The endpoint is a path fragment appended verbatim to the session's base
/// URL; no well-formedness check happens here, malformed paths surface as
/// transport errors.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub method: HttpMethod,
    pub endpoint: String,
    pub body: Option<Value>,
    pub query: Vec<(String, String)>,
    /// Per-call headers merged over the session defaults; wins on collision.
    pub headers: Vec<(String, String)>,
    /// When set, a differing observed status is an error, not a response.
    pub expected_status: Option<u16>,
    pub log_enabled: bool,
}

impl RequestSpec {
    pub fn new(method: HttpMethod, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            body: None,
            query: Vec::new(),
            headers: Vec::new(),
            expected_status: None,
            log_enabled: true,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn expect_status(mut self, status: u16) -> Self {
        self.expected_status = Some(status);
        self
    }

    pub fn without_logging(mut self) -> Self {
        self.log_enabled = false;
        self
    }
}

/// A completed HTTP exchange.
///
/// Returned by the harness regardless of status unless an expectation was
/// supplied and missed. The body stays raw text until a caller asks for JSON.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// First header value with the given name, case-insensitive.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Parse the body as JSON.
    pub fn json(&self) -> Result<Value, ApiError> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Deserialize the body into a typed DTO.
    pub fn json_as<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}
