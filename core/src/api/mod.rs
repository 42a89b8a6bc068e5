//! Per-domain API façades over the request harness.
//!
//! Each façade knows one backend's endpoint paths and conventional success
//! statuses; every method forwards straight to `Harness::send`. The
//! `*_expecting` variants take the expected status from the caller so
//! negative tests can assert that a documented 4xx outcome is still
//! observed, with the plain variants defaulting to the success code.

mod auth;
mod bookings;
mod movies;
mod users;

pub use auth::AuthApi;
pub use bookings::BookingApi;
pub use movies::MoviesApi;
pub use users::UserApi;

use crate::harness::Harness;

/// The movie-catalog façades bundled over one harness, mirroring how the
/// scenario tests use them together.
pub struct ApiManager<'a> {
    pub auth: AuthApi<'a>,
    pub users: UserApi<'a>,
    pub movies: MoviesApi<'a>,
}

impl<'a> ApiManager<'a> {
    pub fn new(harness: &'a Harness) -> Self {
        Self {
            auth: AuthApi::new(harness),
            users: UserApi::new(harness),
            movies: MoviesApi::new(harness),
        }
    }
}
