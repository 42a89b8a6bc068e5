//! Base URLs and endpoint path fragments.
//!
//! The deployed defaults live here as plain constants; tests construct
//! sessions against the mock backends' ephemeral addresses instead.

pub const AUTH_BASE_URL: &str = "https://auth.dev.moviecatalog.example.com";
pub const MOVIES_BASE_URL: &str = "https://api.dev.moviecatalog.example.com";
pub const BOOKING_BASE_URL: &str = "https://restful-booker.example.com";

pub const LOGIN_ENDPOINT: &str = "/login";
pub const REGISTER_ENDPOINT: &str = "/register";
pub const USER_ENDPOINT: &str = "/user";
pub const MOVIES_ENDPOINT: &str = "/movies";
pub const BOOKING_ENDPOINT: &str = "/booking";
pub const BOOKING_AUTH_ENDPOINT: &str = "/auth";
