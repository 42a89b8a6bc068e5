//! In-process stand-ins for the two backends under test.
//!
//! # Overview
//! Two independent axum routers with in-memory state: `catalog` mimics the
//! movie-catalog service (registration, login, users, movies) and `booking`
//! mimics the restful-booker style service (cookie auth, booking CRUD with
//! its idiosyncratic status codes). Schemas are defined here separately from
//! the `qa-core` DTOs; the scenario tests catch drift between the two.

pub mod booking;
pub mod catalog;

use axum::Router;
use tokio::net::TcpListener;

pub async fn run(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, app).await
}
