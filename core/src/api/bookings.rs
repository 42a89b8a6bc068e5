//! Booking façade for the restful-booker style backend.
//!
//! The deployed backend has two idiosyncrasies the defaults encode: create
//! answers 200 (not 201) with a `{bookingid, booking}` envelope, and delete
//! answers 201. Authentication rides on a `token` cookie, and a failed
//! `/auth` still answers 200 with a `reason` field instead of a token.

use crate::constants::{BOOKING_AUTH_ENDPOINT, BOOKING_ENDPOINT};
use crate::error::ApiError;
use crate::harness::Harness;
use crate::http::{ApiResponse, HttpMethod, RequestSpec};
use crate::session::Session;
use crate::types::{Booking, BookingAuth};

pub struct BookingApi<'a> {
    harness: &'a Harness,
}

impl<'a> BookingApi<'a> {
    pub fn new(harness: &'a Harness) -> Self {
        Self { harness }
    }

    /// Obtain a token and install it as `Cookie: token=<t>` in the session.
    ///
    /// Mirrors `AuthApi::authenticate`: the session is only mutated on
    /// success, and a 200 without a token (the backend's "Bad credentials"
    /// answer) is `ApiError::MissingToken`.
    pub fn auth(
        &self,
        session: &mut Session,
        credentials: &BookingAuth,
    ) -> Result<String, ApiError> {
        let spec = RequestSpec::new(HttpMethod::Post, BOOKING_AUTH_ENDPOINT)
            .with_body(serde_json::to_value(credentials)?)
            .expect_status(200);
        let response = self.harness.send(session, &spec)?;
        let token = response
            .json()
            .ok()
            .and_then(|body| body.get("token").and_then(|v| v.as_str()).map(str::to_string));
        let Some(token) = token else {
            tracing::error!(body = %response.body, "booking auth answered without a token");
            return Err(ApiError::MissingToken {
                body: response.body,
            });
        };
        session.update_headers([("Cookie".to_string(), format!("token={token}"))]);
        Ok(token)
    }

    pub fn create(&self, session: &Session, booking: &Booking) -> Result<ApiResponse, ApiError> {
        self.create_expecting(session, booking, 200)
    }

    pub fn create_expecting(
        &self,
        session: &Session,
        booking: &Booking,
        expected_status: u16,
    ) -> Result<ApiResponse, ApiError> {
        let spec = RequestSpec::new(HttpMethod::Post, BOOKING_ENDPOINT)
            .with_body(serde_json::to_value(booking)?)
            .expect_status(expected_status);
        self.harness.send(session, &spec)
    }

    pub fn get_by_id(&self, session: &Session, id: i64) -> Result<ApiResponse, ApiError> {
        self.get_by_id_expecting(session, id, 200)
    }

    pub fn get_by_id_expecting(
        &self,
        session: &Session,
        id: i64,
        expected_status: u16,
    ) -> Result<ApiResponse, ApiError> {
        let spec = RequestSpec::new(HttpMethod::Get, format!("{BOOKING_ENDPOINT}/{id}"))
            .expect_status(expected_status);
        self.harness.send(session, &spec)
    }

    pub fn list(&self, session: &Session) -> Result<ApiResponse, ApiError> {
        let spec = RequestSpec::new(HttpMethod::Get, BOOKING_ENDPOINT).expect_status(200);
        self.harness.send(session, &spec)
    }

    /// Full replacement via PUT.
    pub fn update(
        &self,
        session: &Session,
        id: i64,
        booking: &Booking,
    ) -> Result<ApiResponse, ApiError> {
        self.update_expecting(session, id, booking, 200)
    }

    pub fn update_expecting(
        &self,
        session: &Session,
        id: i64,
        booking: &Booking,
        expected_status: u16,
    ) -> Result<ApiResponse, ApiError> {
        let spec = RequestSpec::new(HttpMethod::Put, format!("{BOOKING_ENDPOINT}/{id}"))
            .with_body(serde_json::to_value(booking)?)
            .expect_status(expected_status);
        self.harness.send(session, &spec)
    }

    /// Partial update via PATCH; only the provided fields change.
    pub fn partial_update(
        &self,
        session: &Session,
        id: i64,
        patch: serde_json::Value,
    ) -> Result<ApiResponse, ApiError> {
        self.partial_update_expecting(session, id, patch, 200)
    }

    pub fn partial_update_expecting(
        &self,
        session: &Session,
        id: i64,
        patch: serde_json::Value,
        expected_status: u16,
    ) -> Result<ApiResponse, ApiError> {
        let spec = RequestSpec::new(HttpMethod::Patch, format!("{BOOKING_ENDPOINT}/{id}"))
            .with_body(patch)
            .expect_status(expected_status);
        self.harness.send(session, &spec)
    }

    pub fn delete(&self, session: &Session, id: i64) -> Result<ApiResponse, ApiError> {
        self.delete_expecting(session, id, 201)
    }

    pub fn delete_expecting(
        &self,
        session: &Session,
        id: i64,
        expected_status: u16,
    ) -> Result<ApiResponse, ApiError> {
        let spec = RequestSpec::new(HttpMethod::Delete, format!("{BOOKING_ENDPOINT}/{id}"))
            .expect_status(expected_status);
        self.harness.send(session, &spec)
    }
}
