//! Error type shared by the harness and the API façades.
//!
//! # Design
//! One enum covers every way a call can fail: transport failure, a missed
//! status expectation, an unparsable body, and the login-specific case of a
//! response without an access token. Callers decide uniformly which of these
//! is fatal; tests usually treat all of them as fatal via `expect`, while
//! authentication callers may match on `MissingToken` to branch.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection refused, timeout, DNS failure. Never retried.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The observed status differed from the caller's expectation.
    #[error("unexpected status {actual}, expected {expected}; body: {body}")]
    UnexpectedStatus {
        expected: u16,
        actual: u16,
        body: String,
    },

    /// The body could not be parsed as JSON, or a payload could not be
    /// serialized.
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// A login response without a usable `accessToken` field.
    #[error("access token missing from login response; body: {body}")]
    MissingToken { body: String },
}

impl From<ureq::Error> for ApiError {
    fn from(err: ureq::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}
