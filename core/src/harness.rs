//! The request harness: executes a `RequestSpec` against a `Session`.
//!
//! # Design
//! One synchronous round-trip per call over a blocking ureq agent. Status
//! codes come back as data, never as transport errors, so the harness alone
//! decides what a miss means: if the spec carries an expected status and the
//! observed one differs, the call returns `ApiError::UnexpectedStatus` with
//! both codes and the raw body. Without an expectation the full response is
//! returned regardless of status and the caller inspects it.
//!
//! Every request and response is logged as a structured event (unless the
//! spec disables it); JSON bodies are pretty-printed, anything else is
//! logged raw.

use serde_json::Value;

use crate::error::ApiError;
use crate::http::{ApiResponse, HttpMethod, RequestSpec};
use crate::session::Session;

/// Shared request issuer. Cheap to construct once per test and lend to every
/// façade; holds no per-call state.
#[derive(Debug, Clone)]
pub struct Harness {
    agent: ureq::Agent,
}

impl Harness {
    pub fn new() -> Self {
        // 4xx/5xx are data for the expected-status gate, not errors.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Issue one request. The session contributes the base URL and default
    /// headers; the spec's overlay wins on key collision. The session is
    /// never mutated here.
    pub fn send(&self, session: &Session, spec: &RequestSpec) -> Result<ApiResponse, ApiError> {
        let url = format!("{}{}", session.base_url(), spec.endpoint);
        let headers = merge_headers(session.headers(), &spec.headers);
        let body_text = match &spec.body {
            Some(value) => Some(serde_json::to_string(value)?),
            None => None,
        };

        if spec.log_enabled {
            log_request(spec.method, &url, &headers, body_text.as_deref());
        }

        let mut raw = self
            .dispatch(spec, &url, &headers, body_text.as_deref())
            .map_err(|err| {
                tracing::error!(
                    method = spec.method.as_str(),
                    url = %url,
                    error = %err,
                    "transport failure"
                );
                ApiError::Transport(err.to_string())
            })?;

        let status = raw.status().as_u16();
        let response_headers = raw
            .headers()
            .iter()
            .filter_map(|(k, v)| {
                v.to_str()
                    .ok()
                    .map(|v| (k.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = raw
            .body_mut()
            .read_to_string()
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        let response = ApiResponse {
            status,
            headers: response_headers,
            body,
        };

        if spec.log_enabled {
            log_response(&response);
        }

        if let Some(expected) = spec.expected_status {
            if response.status != expected {
                tracing::error!(
                    expected,
                    actual = response.status,
                    url = %url,
                    body = %response.body,
                    "unexpected status"
                );
                return Err(ApiError::UnexpectedStatus {
                    expected,
                    actual: response.status,
                    body: response.body,
                });
            }
        }

        Ok(response)
    }

    fn dispatch(
        &self,
        spec: &RequestSpec,
        url: &str,
        headers: &[(String, String)],
        body: Option<&str>,
    ) -> Result<ureq::http::Response<ureq::Body>, ureq::Error> {
        match spec.method {
            HttpMethod::Get | HttpMethod::Delete => {
                let mut builder = match spec.method {
                    HttpMethod::Get => self.agent.get(url),
                    _ => self.agent.delete(url),
                };
                for (k, v) in headers {
                    builder = builder.header(k.as_str(), v.as_str());
                }
                for (k, v) in &spec.query {
                    builder = builder.query(k.as_str(), v.as_str());
                }
                builder.call()
            }
            HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch => {
                let mut builder = match spec.method {
                    HttpMethod::Post => self.agent.post(url),
                    HttpMethod::Put => self.agent.put(url),
                    _ => self.agent.patch(url),
                };
                for (k, v) in headers {
                    builder = builder.header(k.as_str(), v.as_str());
                }
                for (k, v) in &spec.query {
                    builder = builder.query(k.as_str(), v.as_str());
                }
                match body {
                    Some(text) => builder.send(text.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        }
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

/// Session defaults with the per-call overlay applied; the overlay wins on
/// case-insensitive key collision.
fn merge_headers(
    defaults: &[(String, String)],
    overlay: &[(String, String)],
) -> Vec<(String, String)> {
    let mut merged: Vec<(String, String)> = defaults
        .iter()
        .filter(|(k, _)| !overlay.iter().any(|(ok, _)| ok.eq_ignore_ascii_case(k)))
        .cloned()
        .collect();
    merged.extend(overlay.iter().cloned());
    merged
}

fn log_request(method: HttpMethod, url: &str, headers: &[(String, String)], body: Option<&str>) {
    match body {
        Some(text) => tracing::info!(
            method = method.as_str(),
            url = %url,
            headers = ?headers,
            body = %pretty(text),
            "request"
        ),
        None => tracing::info!(
            method = method.as_str(),
            url = %url,
            headers = ?headers,
            "request"
        ),
    }
}

fn log_response(response: &ApiResponse) {
    if response.is_success() {
        tracing::info!(
            status = response.status,
            headers = ?response.headers,
            body = %pretty(&response.body),
            "response"
        );
    } else {
        tracing::warn!(
            status = response.status,
            headers = ?response.headers,
            body = %pretty(&response.body),
            "response"
        );
    }
}

/// Pretty-print JSON bodies for the log; anything unparsable goes out raw.
fn pretty(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .and_then(|value| serde_json::to_string_pretty(&value))
        .unwrap_or_else(|_| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_wins_on_collision() {
        let defaults = vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Accept".to_string(), "application/json".to_string()),
        ];
        let overlay = vec![("content-type".to_string(), "text/plain".to_string())];
        let merged = merge_headers(&defaults, &overlay);
        assert_eq!(merged.len(), 2);
        let ct = merged
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("content-type"))
            .unwrap();
        assert_eq!(ct.1, "text/plain");
    }

    #[test]
    fn overlay_adds_new_keys() {
        let defaults = vec![("Accept".to_string(), "application/json".to_string())];
        let overlay = vec![("Authorization".to_string(), "Bearer x".to_string())];
        let merged = merge_headers(&defaults, &overlay);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn pretty_formats_json_and_passes_text_through() {
        assert!(pretty(r#"{"a":1}"#).contains("\n"));
        assert_eq!(pretty("plain text"), "plain text");
    }

    #[test]
    fn transport_failure_is_reported_not_swallowed() {
        // Nothing listens on this port; the connection is refused.
        let harness = Harness::new();
        let session = Session::new("http://127.0.0.1:9");
        let spec = RequestSpec::new(HttpMethod::Get, "/anything").without_logging();
        let err = harness.send(&session, &spec).unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
