//! Authentication façade for the movie-catalog auth backend.

use crate::constants::{LOGIN_ENDPOINT, REGISTER_ENDPOINT};
use crate::error::ApiError;
use crate::harness::Harness;
use crate::http::{ApiResponse, HttpMethod, RequestSpec};
use crate::session::Session;
use crate::types::{LoginRequest, RegisterUser};

pub struct AuthApi<'a> {
    harness: &'a Harness,
}

impl<'a> AuthApi<'a> {
    pub fn new(harness: &'a Harness) -> Self {
        Self { harness }
    }

    /// Register a new user. Pure pass-through; never touches the session.
    pub fn register(
        &self,
        session: &Session,
        user: &RegisterUser,
    ) -> Result<ApiResponse, ApiError> {
        self.register_expecting(session, user, 201)
    }

    pub fn register_expecting(
        &self,
        session: &Session,
        user: &RegisterUser,
        expected_status: u16,
    ) -> Result<ApiResponse, ApiError> {
        let spec = RequestSpec::new(HttpMethod::Post, REGISTER_ENDPOINT)
            .with_body(serde_json::to_value(user)?)
            .expect_status(expected_status);
        self.harness.send(session, &spec)
    }

    pub fn login(
        &self,
        session: &Session,
        credentials: &LoginRequest,
    ) -> Result<ApiResponse, ApiError> {
        self.login_expecting(session, credentials, 200)
    }

    pub fn login_expecting(
        &self,
        session: &Session,
        credentials: &LoginRequest,
        expected_status: u16,
    ) -> Result<ApiResponse, ApiError> {
        let spec = RequestSpec::new(HttpMethod::Post, LOGIN_ENDPOINT)
            .with_body(serde_json::to_value(credentials)?)
            .expect_status(expected_status);
        self.harness.send(session, &spec)
    }

    /// Log in and install `Authorization: Bearer <token>` into the session.
    ///
    /// The session is only mutated on success; a login response without a
    /// usable `accessToken` (absent field, non-string value, unparsable
    /// body) is `ApiError::MissingToken` and leaves the session untouched.
    /// Transport and status failures from the login call itself propagate
    /// unchanged, so callers distinguish "the backend refused us" from "the
    /// backend answered without a token".
    pub fn authenticate(
        &self,
        session: &mut Session,
        credentials: &LoginRequest,
    ) -> Result<String, ApiError> {
        let response = self.login(session, credentials)?;
        let token = match response.json() {
            Ok(body) => body
                .get("accessToken")
                .and_then(|v| v.as_str())
                .map(str::to_string),
            Err(err) => {
                tracing::error!(error = %err, body = %response.body, "login response is not JSON");
                None
            }
        };
        let Some(token) = token else {
            tracing::error!(body = %response.body, "login response carries no access token");
            return Err(ApiError::MissingToken {
                body: response.body,
            });
        };
        session.update_headers([("Authorization".to_string(), format!("Bearer {token}"))]);
        tracing::info!("bearer token installed into session");
        Ok(token)
    }
}
