//! Default-header carrier shared across façade calls.
//!
//! # Design
//! A `Session` is a plain value owned by the test: a base URL plus the
//! default headers applied to every request issued against it. It is never
//! hidden behind shared ownership; the only mutation point is the explicit
//! `update_headers`, which is additive and overwrites by key, never resets.
//! `Harness::send` takes `&Session` and cannot mutate it.

/// Base URL and default headers for one backend.
#[derive(Debug, Clone)]
pub struct Session {
    base_url: String,
    headers: Vec<(String, String)>,
}

impl Session {
    /// New session seeded with the JSON content negotiation headers every
    /// call needs.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            headers: vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                ("Accept".to_string(), "application/json".to_string()),
            ],
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// First default header with the given name, case-insensitive.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Merge the given headers into the defaults: existing keys are
    /// overwritten (case-insensitive), new keys appended. Never resets.
    pub fn update_headers<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in pairs {
            match self
                .headers
                .iter_mut()
                .find(|(k, _)| k.eq_ignore_ascii_case(&key))
            {
                Some(slot) => slot.1 = value,
                None => self.headers.push((key, value)),
            }
        }
    }

    /// Session with `Authorization: Bearer <token>` installed. Consuming
    /// form for threading a credential into a fresh session at construction.
    pub fn with_bearer(mut self, token: &str) -> Self {
        self.update_headers([("Authorization".to_string(), format!("Bearer {token}"))]);
        self
    }

    /// Session with `Cookie: token=<token>` installed (the booking backend
    /// authenticates via cookie rather than bearer header).
    pub fn with_token_cookie(mut self, token: &str) -> Self {
        self.update_headers([("Cookie".to_string(), format!("token={token}"))]);
        self
    }
}
