//! User façade: admin-side CRUD over `/user` on the auth backend.

use crate::constants::USER_ENDPOINT;
use crate::error::ApiError;
use crate::harness::Harness;
use crate::http::{ApiResponse, HttpMethod, RequestSpec};
use crate::session::Session;
use crate::types::RegisterUser;

pub struct UserApi<'a> {
    harness: &'a Harness,
}

impl<'a> UserApi<'a> {
    pub fn new(harness: &'a Harness) -> Self {
        Self { harness }
    }

    pub fn create(&self, session: &Session, user: &RegisterUser) -> Result<ApiResponse, ApiError> {
        self.create_expecting(session, user, 201)
    }

    pub fn create_expecting(
        &self,
        session: &Session,
        user: &RegisterUser,
        expected_status: u16,
    ) -> Result<ApiResponse, ApiError> {
        let spec = RequestSpec::new(HttpMethod::Post, USER_ENDPOINT)
            .with_body(serde_json::to_value(user)?)
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
        let spec = RequestSpec::new(HttpMethod::Get, format!("{USER_ENDPOINT}/{id}"))
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
        let spec = RequestSpec::new(HttpMethod::Delete, format!("{USER_ENDPOINT}/{id}"))
            .expect_status(expected_status);
        self.harness.send(session, &spec)
    }
}
