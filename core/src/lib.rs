//! Black-box API test kit for the movie-catalog and booking backends.
//!
//! # Overview
//! A thin, synchronous request harness plus per-domain façades, built for
//! scenario tests that drive two unrelated REST backends and assert on JSON
//! response shapes.
//!
//! # Design
//! - `Harness` issues one blocking round-trip per call and enforces the
//!   caller's expected-status contract; 4xx/5xx are data, not transport
//!   errors.
//! - `Session` is an explicit value (base URL + default headers) passed into
//!   every call; nothing mutates it behind the caller's back. Credentials
//!   are installed either by the visible `authenticate(&mut session, ..)`
//!   path or threaded in at construction via `with_bearer`.
//! - One `ApiError` covers transport failures, status mismatches, bad JSON
//!   and token-less logins, so callers choose uniformly what is fatal.
//! - Façades (`AuthApi`, `UserApi`, `MoviesApi`, `BookingApi`) map endpoint
//!   paths and conventional success statuses; every method takes a
//!   caller-overridable expectation for negative-path tests.

pub mod api;
pub mod constants;
pub mod data;
pub mod error;
pub mod harness;
pub mod http;
pub mod session;
pub mod types;

pub use api::{ApiManager, AuthApi, BookingApi, MoviesApi, UserApi};
pub use error::ApiError;
pub use harness::Harness;
pub use http::{ApiResponse, HttpMethod, RequestSpec};
pub use session::Session;
