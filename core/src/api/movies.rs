//! Movie-catalog façade: CRUD over `/movies`.

use crate::constants::MOVIES_ENDPOINT;
use crate::error::ApiError;
use crate::harness::Harness;
use crate::http::{ApiResponse, HttpMethod, RequestSpec};
use crate::session::Session;
use crate::types::{CreateMovie, UpdateMovie};

pub struct MoviesApi<'a> {
    harness: &'a Harness,
}

impl<'a> MoviesApi<'a> {
    pub fn new(harness: &'a Harness) -> Self {
        Self { harness }
    }

    pub fn create(
        &self,
        session: &Session,
        movie: &CreateMovie,
    ) -> Result<ApiResponse, ApiError> {
        self.create_expecting(session, movie, 201)
    }

    pub fn create_expecting(
        &self,
        session: &Session,
        movie: &CreateMovie,
        expected_status: u16,
    ) -> Result<ApiResponse, ApiError> {
        let spec = RequestSpec::new(HttpMethod::Post, MOVIES_ENDPOINT)
            .with_body(serde_json::to_value(movie)?)
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
        let spec = RequestSpec::new(HttpMethod::Get, format!("{MOVIES_ENDPOINT}/{id}"))
            .expect_status(expected_status);
        self.harness.send(session, &spec)
    }

    pub fn list(
        &self,
        session: &Session,
        query: &[(String, String)],
    ) -> Result<ApiResponse, ApiError> {
        self.list_expecting(session, query, 200)
    }

    pub fn list_expecting(
        &self,
        session: &Session,
        query: &[(String, String)],
        expected_status: u16,
    ) -> Result<ApiResponse, ApiError> {
        let mut spec =
            RequestSpec::new(HttpMethod::Get, MOVIES_ENDPOINT).expect_status(expected_status);
        spec.query = query.to_vec();
        self.harness.send(session, &spec)
    }

    pub fn update(
        &self,
        session: &Session,
        id: i64,
        patch: &UpdateMovie,
    ) -> Result<ApiResponse, ApiError> {
        self.update_expecting(session, id, patch, 200)
    }

    pub fn update_expecting(
        &self,
        session: &Session,
        id: i64,
        patch: &UpdateMovie,
        expected_status: u16,
    ) -> Result<ApiResponse, ApiError> {
        let spec = RequestSpec::new(HttpMethod::Patch, format!("{MOVIES_ENDPOINT}/{id}"))
            .with_body(serde_json::to_value(patch)?)
            .expect_status(expected_status);
        self.harness.send(session, &spec)
    }

    pub fn delete(&self, session: &Session, id: i64) -> Result<ApiResponse, ApiError> {
        self.delete_expecting(session, id, 200)
    }

    pub fn delete_expecting(
        &self,
        session: &Session,
        id: i64,
        expected_status: u16,
    ) -> Result<ApiResponse, ApiError> {
        let spec = RequestSpec::new(HttpMethod::Delete, format!("{MOVIES_ENDPOINT}/{id}"))
            .expect_status(expected_status);
        self.harness.send(session, &spec)
    }

    /// Raw-body create for payloads that deliberately violate the schema
    /// (wrong field types). No expectation; the caller inspects the status.
    pub fn create_raw(
        &self,
        session: &Session,
        body: serde_json::Value,
    ) -> Result<ApiResponse, ApiError> {
        let spec = RequestSpec::new(HttpMethod::Post, MOVIES_ENDPOINT).with_body(body);
        self.harness.send(session, &spec)
    }
}
