//! Booking backend stand-in, restful-booker contract included:
//! create answers 200 with a `{bookingid, booking}` envelope, delete answers
//! 201, mutations want a `token` cookie (403 without), and a failed `/auth`
//! still answers 200 with a `reason` instead of a token.

use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::sync::RwLock;
use uuid::Uuid;

pub const BOOKING_USERNAME: &str = "admin";
pub const BOOKING_PASSWORD: &str = "password123";

#[derive(Clone, Serialize, Deserialize)]
pub struct BookingDates {
    pub checkin: String,
    pub checkout: String,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct Booking {
    pub firstname: String,
    pub lastname: String,
    pub totalprice: u32,
    pub depositpaid: bool,
    pub bookingdates: BookingDates,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additionalneeds: Option<String>,
}

#[derive(Deserialize)]
struct PartialBooking {
    firstname: Option<String>,
    lastname: Option<String>,
    totalprice: Option<u32>,
    depositpaid: Option<bool>,
    bookingdates: Option<BookingDates>,
    additionalneeds: Option<String>,
}

#[derive(Deserialize)]
struct AuthBody {
    username: String,
    password: String,
}

#[derive(Default)]
struct BookingState {
    bookings: HashMap<i64, Booking>,
    tokens: HashSet<String>,
    next_id: i64,
}

type Db = Arc<RwLock<BookingState>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(BookingState {
        next_id: 1,
        ..Default::default()
    }));
    Router::new()
        .route("/auth", post(auth))
        .route("/booking", get(list_bookings).post(create_booking))
        .route(
            "/booking/{id}",
            get(get_booking)
                .put(put_booking)
                .patch(patch_booking)
                .delete(delete_booking),
        )
        .with_state(db)
}

async fn require_token_cookie(db: &Db, headers: &HeaderMap) -> Result<(), StatusCode> {
    let token = headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|cookies| {
            cookies
                .split(';')
                .map(str::trim)
                .find_map(|c| c.strip_prefix("token="))
        });
    match token {
        Some(t) if db.read().await.tokens.contains(t) => Ok(()),
        _ => Err(StatusCode::FORBIDDEN),
    }
}

async fn auth(State(db): State<Db>, Json(body): Json<AuthBody>) -> Json<Value> {
    if body.username == BOOKING_USERNAME && body.password == BOOKING_PASSWORD {
        let token = Uuid::new_v4().to_string();
        db.write().await.tokens.insert(token.clone());
        Json(json!({ "token": token }))
    } else {
        // The real backend answers 200 with a reason, not 401.
        Json(json!({ "reason": "Bad credentials" }))
    }
}

async fn list_bookings(State(db): State<Db>) -> Json<Value> {
    let state = db.read().await;
    let mut ids: Vec<i64> = state.bookings.keys().copied().collect();
    ids.sort_unstable();
    let items: Vec<Value> = ids.into_iter().map(|id| json!({ "bookingid": id })).collect();
    Json(Value::Array(items))
}

async fn create_booking(State(db): State<Db>, Json(body): Json<Booking>) -> Json<Value> {
    let mut state = db.write().await;
    let id = state.next_id;
    state.next_id += 1;
    state.bookings.insert(id, body.clone());
    Json(json!({ "bookingid": id, "booking": body }))
}

async fn get_booking(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Booking>, StatusCode> {
    let state = db.read().await;
    state
        .bookings
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn put_booking(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<Booking>,
) -> Result<Json<Booking>, StatusCode> {
    require_token_cookie(&db, &headers).await?;
    let mut state = db.write().await;
    if !state.bookings.contains_key(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    state.bookings.insert(id, body.clone());
    Ok(Json(body))
}

async fn patch_booking(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<PartialBooking>,
) -> Result<Json<Booking>, StatusCode> {
    require_token_cookie(&db, &headers).await?;
    let mut state = db.write().await;
    let booking = state.bookings.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(firstname) = body.firstname {
        booking.firstname = firstname;
    }
    if let Some(lastname) = body.lastname {
        booking.lastname = lastname;
    }
    if let Some(totalprice) = body.totalprice {
        booking.totalprice = totalprice;
    }
    if let Some(depositpaid) = body.depositpaid {
        booking.depositpaid = depositpaid;
    }
    if let Some(bookingdates) = body.bookingdates {
        booking.bookingdates = bookingdates;
    }
    if let Some(additionalneeds) = body.additionalneeds {
        booking.additionalneeds = Some(additionalneeds);
    }
    Ok(Json(booking.clone()))
}

async fn delete_booking(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    require_token_cookie(&db, &headers).await?;
    let mut state = db.write().await;
    state
        .bookings
        .remove(&id)
        .map(|_| StatusCode::CREATED)
        .ok_or(StatusCode::NOT_FOUND)
}
