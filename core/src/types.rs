//! Wire DTOs for both backends.
//!
//! # Design
//! Request payloads serialize with the exact field names each backend
//! expects (`imageUrl`, `genreId`, `passwordRepeat`, `bookingid`, ...).
//! Response types are defined here independently of the mock-server crate;
//! the integration tests catch schema drift between the two. Partial-update
//! payloads skip `None` fields entirely so omitted keys stay omitted on the
//! wire.

use serde::{Deserialize, Serialize};

/// Credentials for the movie-catalog auth backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration payload for the movie-catalog auth backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUser {
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub password_repeat: String,
}

/// New-movie payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovie {
    pub name: String,
    pub image_url: String,
    pub price: u32,
    pub description: String,
    pub location: String,
    pub published: bool,
    pub genre_id: u32,
}

/// Partial movie update; only present fields are applied by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMovie {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}

/// A movie as returned by the catalog backend. Unknown extras (`genre`,
/// `reviews`) are ignored on deserialization.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: i64,
    pub name: String,
    pub image_url: String,
    pub price: u32,
    pub description: String,
    pub location: String,
    pub published: bool,
    pub genre_id: u32,
    pub created_at: String,
}

/// Envelope of `GET /movies`.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieList {
    pub movies: Vec<Movie>,
    pub count: usize,
}

/// Credentials for the booking backend's `/auth` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingAuth {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingDates {
    pub checkin: String,
    pub checkout: String,
}

/// A booking, both as create payload and as the shape `GET /booking/{id}`
/// returns (the backend never echoes the id inside the booking itself).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub firstname: String,
    pub lastname: String,
    pub totalprice: u32,
    pub depositpaid: bool,
    pub bookingdates: BookingDates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additionalneeds: Option<String>,
}

/// Envelope of `POST /booking`.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingCreated {
    pub bookingid: i64,
    pub booking: Booking,
}
