//! Movie-catalog backend stand-in: `/register`, `/login`, `/user`, `/movies`.
//!
//! Mutating movie and user routes require a bearer token minted by `/login`.
//! Movie ids are integers; `createdAt` is a fixed timestamp so repeated gets
//! of the same movie are byte-identical.

use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use axum::{
    extract::{Path, RawQuery, State},
    http::{header, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Seeded administrator; always able to log in.
pub const ADMIN_EMAIL: &str = "admin@mock.local";
pub const ADMIN_PASSWORD: &str = "admin-pass-1";

const CREATED_AT: &str = "2026-01-01T00:00:00.000Z";

#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    #[serde(skip)]
    password: String,
}

#[derive(Clone, Serialize)]
struct Genre {
    name: String,
}

#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct Movie {
    id: i64,
    name: String,
    image_url: String,
    price: u32,
    description: String,
    location: String,
    published: bool,
    genre_id: u32,
    created_at: String,
    genre: Genre,
    reviews: Vec<Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegisterBody {
    email: String,
    full_name: String,
    password: String,
    #[serde(default)]
    password_repeat: Option<String>,
}

#[derive(Deserialize)]
struct LoginBody {
    email: String,
    password: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateMovieBody {
    name: String,
    image_url: String,
    price: u32,
    description: String,
    location: String,
    published: bool,
    genre_id: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateMovieBody {
    name: Option<String>,
    price: Option<u32>,
    description: Option<String>,
    published: Option<bool>,
}

#[derive(Default)]
struct CatalogState {
    users: HashMap<i64, User>,
    tokens: HashSet<String>,
    movies: HashMap<i64, Movie>,
    next_user_id: i64,
    next_movie_id: i64,
}

type Db = Arc<RwLock<CatalogState>>;

pub fn app() -> Router {
    let mut state = CatalogState {
        next_user_id: 2,
        next_movie_id: 1,
        ..Default::default()
    };
    state.users.insert(
        1,
        User {
            id: 1,
            email: ADMIN_EMAIL.to_string(),
            full_name: "Mock Admin".to_string(),
            password: ADMIN_PASSWORD.to_string(),
        },
    );
    let db: Db = Arc::new(RwLock::new(state));
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/user", post(create_user))
        .route("/user/{id}", get(get_user).delete(delete_user))
        .route("/movies", get(list_movies).post(create_movie))
        .route(
            "/movies/{id}",
            get(get_movie).patch(patch_movie).delete(delete_movie),
        )
        .with_state(db)
}

type ApiReject = (StatusCode, Json<Value>);

fn message(status: StatusCode, text: &str) -> ApiReject {
    (status, Json(json!({ "message": text })))
}

async fn require_bearer(db: &Db, headers: &HeaderMap) -> Result<(), ApiReject> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));
    match token {
        Some(t) if db.read().await.tokens.contains(t) => Ok(()),
        _ => Err(message(StatusCode::UNAUTHORIZED, "Unauthorized")),
    }
}

async fn register(
    State(db): State<Db>,
    Json(body): Json<RegisterBody>,
) -> Result<(StatusCode, Json<User>), ApiReject> {
    if let Some(repeat) = &body.password_repeat {
        if *repeat != body.password {
            return Err(message(StatusCode::BAD_REQUEST, "Passwords do not match"));
        }
    }
    let mut state = db.write().await;
    if state.users.values().any(|u| u.email == body.email) {
        return Err(message(StatusCode::CONFLICT, "User already exists"));
    }
    let id = state.next_user_id;
    state.next_user_id += 1;
    let user = User {
        id,
        email: body.email,
        full_name: body.full_name,
        password: body.password,
    };
    state.users.insert(id, user.clone());
    Ok((StatusCode::CREATED, Json(user)))
}

async fn login(
    State(db): State<Db>,
    Json(body): Json<LoginBody>,
) -> Result<Json<Value>, ApiReject> {
    let mut state = db.write().await;
    let user = state
        .users
        .values()
        .find(|u| u.email == body.email && u.password == body.password)
        .cloned();
    let Some(user) = user else {
        return Err(message(StatusCode::UNAUTHORIZED, "Invalid credentials"));
    };
    let token = Uuid::new_v4().to_string();
    state.tokens.insert(token.clone());
    Ok(Json(json!({
        "accessToken": token,
        "user": { "id": user.id, "email": user.email, "fullName": user.full_name },
    })))
}

async fn create_user(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(body): Json<RegisterBody>,
) -> Result<(StatusCode, Json<User>), ApiReject> {
    require_bearer(&db, &headers).await?;
    let mut state = db.write().await;
    if state.users.values().any(|u| u.email == body.email) {
        return Err(message(StatusCode::CONFLICT, "User already exists"));
    }
    let id = state.next_user_id;
    state.next_user_id += 1;
    let user = User {
        id,
        email: body.email,
        full_name: body.full_name,
        password: body.password,
    };
    state.users.insert(id, user.clone());
    Ok((StatusCode::CREATED, Json(user)))
}

async fn get_user(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<User>, ApiReject> {
    require_bearer(&db, &headers).await?;
    let state = db.read().await;
    state
        .users
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| message(StatusCode::NOT_FOUND, "User not found"))
}

async fn delete_user(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<User>, ApiReject> {
    require_bearer(&db, &headers).await?;
    let mut state = db.write().await;
    state
        .users
        .remove(&id)
        .map(Json)
        .ok_or_else(|| message(StatusCode::NOT_FOUND, "User not found"))
}

async fn list_movies(State(db): State<Db>, RawQuery(query): RawQuery) -> Json<Value> {
    let pairs = parse_query(query.as_deref().unwrap_or(""));
    let lookup = |key: &str| {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    };
    let page_size: usize = lookup("pageSize").and_then(|v| v.parse().ok()).unwrap_or(10);
    let page: usize = lookup("page").and_then(|v| v.parse().ok()).unwrap_or(1);
    let min_price: Option<u32> = lookup("minPrice").and_then(|v| v.parse().ok());
    let max_price: Option<u32> = lookup("maxPrice").and_then(|v| v.parse().ok());
    let published: Option<bool> = lookup("published").and_then(|v| v.parse().ok());
    let locations: Vec<&str> = pairs
        .iter()
        .filter(|(k, _)| k == "locations")
        .map(|(_, v)| v.as_str())
        .collect();

    let state = db.read().await;
    let mut movies: Vec<&Movie> = state
        .movies
        .values()
        .filter(|m| min_price.is_none_or(|p| m.price >= p))
        .filter(|m| max_price.is_none_or(|p| m.price <= p))
        .filter(|m| published.is_none_or(|p| m.published == p))
        .filter(|m| locations.is_empty() || locations.contains(&m.location.as_str()))
        .collect();
    movies.sort_by_key(|m| m.id);
    let count = movies.len();
    let start = page.saturating_sub(1) * page_size;
    let page_items: Vec<&Movie> = movies.into_iter().skip(start).take(page_size).collect();
    Json(json!({ "movies": page_items, "count": count }))
}

async fn create_movie(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(body): Json<CreateMovieBody>,
) -> Result<(StatusCode, Json<Movie>), ApiReject> {
    require_bearer(&db, &headers).await?;
    if body.location != "MSK" && body.location != "SPB" {
        return Err(message(StatusCode::BAD_REQUEST, "Invalid location"));
    }
    let mut state = db.write().await;
    let id = state.next_movie_id;
    state.next_movie_id += 1;
    let movie = Movie {
        id,
        name: body.name,
        image_url: body.image_url,
        price: body.price,
        description: body.description,
        location: body.location,
        published: body.published,
        genre_id: body.genre_id,
        created_at: CREATED_AT.to_string(),
        genre: Genre {
            name: "Drama".to_string(),
        },
        reviews: Vec::new(),
    };
    state.movies.insert(id, movie.clone());
    Ok((StatusCode::CREATED, Json(movie)))
}

async fn get_movie(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<Movie>, ApiReject> {
    let state = db.read().await;
    state
        .movies
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| message(StatusCode::NOT_FOUND, "Movie not found"))
}

async fn patch_movie(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<UpdateMovieBody>,
) -> Result<Json<Movie>, ApiReject> {
    require_bearer(&db, &headers).await?;
    let mut state = db.write().await;
    let movie = state
        .movies
        .get_mut(&id)
        .ok_or_else(|| message(StatusCode::NOT_FOUND, "Movie not found"))?;
    if let Some(name) = body.name {
        movie.name = name;
    }
    if let Some(price) = body.price {
        movie.price = price;
    }
    if let Some(description) = body.description {
        movie.description = description;
    }
    if let Some(published) = body.published {
        movie.published = published;
    }
    Ok(Json(movie.clone()))
}

async fn delete_movie(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<Movie>, ApiReject> {
    require_bearer(&db, &headers).await?;
    let mut state = db.write().await;
    state
        .movies
        .remove(&id)
        .map(Json)
        .ok_or_else(|| message(StatusCode::NOT_FOUND, "Movie not found"))
}

/// Split a raw query string into pairs. Values the suite sends are plain
/// alphanumerics, so no percent-decoding is needed.
fn parse_query(raw: &str) -> Vec<(String, String)> {
    raw.split('&')
        .filter(|part| !part.is_empty())
        .filter_map(|part| part.split_once('='))
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_query_splits_pairs_and_keeps_repeats() {
        let pairs = parse_query("pageSize=10&locations=MSK&locations=SPB");
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0], ("pageSize".to_string(), "10".to_string()));
        assert_eq!(pairs[2], ("locations".to_string(), "SPB".to_string()));
    }

    #[test]
    fn parse_query_handles_empty_input() {
        assert!(parse_query("").is_empty());
    }

    #[test]
    fn user_serializes_without_password() {
        let user = User {
            id: 1,
            email: "a@b.c".to_string(),
            full_name: "A B".to_string(),
            password: "secret".to_string(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["fullName"], "A B");
        assert!(json.get("password").is_none());
    }

    #[test]
    fn movie_serializes_with_camel_case_and_extras() {
        let movie = Movie {
            id: 1,
            name: "M".to_string(),
            image_url: "u".to_string(),
            price: 10,
            description: "d".to_string(),
            location: "MSK".to_string(),
            published: true,
            genre_id: 1,
            created_at: CREATED_AT.to_string(),
            genre: Genre {
                name: "Drama".to_string(),
            },
            reviews: Vec::new(),
        };
        let json = serde_json::to_value(&movie).unwrap();
        assert_eq!(json["imageUrl"], "u");
        assert_eq!(json["createdAt"], CREATED_AT);
        assert_eq!(json["genre"]["name"], "Drama");
        assert!(json["reviews"].as_array().unwrap().is_empty());
    }
}
