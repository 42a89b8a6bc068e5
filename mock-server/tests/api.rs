use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::booking::{BOOKING_PASSWORD, BOOKING_USERNAME};
use mock_server::catalog::{ADMIN_EMAIL, ADMIN_PASSWORD};
use serde_json::{json, Value};
use tower::{Service, ServiceExt};

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn authed_request(method: &str, uri: &str, token: &str, body: Option<&Value>) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .header(http::header::AUTHORIZATION, format!("Bearer {token}"))
        .body(body.map(Value::to_string).unwrap_or_default())
        .unwrap()
}

async fn call(
    app: &mut tower::util::BoxCloneService<Request<String>, axum::response::Response, std::convert::Infallible>,
    request: Request<String>,
) -> axum::response::Response {
    ServiceExt::ready(app).await.unwrap().call(request).await.unwrap()
}

fn catalog_service() -> tower::util::BoxCloneService<
    Request<String>,
    axum::response::Response,
    std::convert::Infallible,
> {
    tower::util::BoxCloneService::new(mock_server::catalog::app().into_service())
}

fn booking_service() -> tower::util::BoxCloneService<
    Request<String>,
    axum::response::Response,
    std::convert::Infallible,
> {
    tower::util::BoxCloneService::new(mock_server::booking::app().into_service())
}

async fn admin_token(
    app: &mut tower::util::BoxCloneService<Request<String>, axum::response::Response, std::convert::Infallible>,
) -> String {
    let resp = call(
        app,
        json_request(
            "POST",
            "/login",
            &json!({"email": ADMIN_EMAIL, "password": ADMIN_PASSWORD}),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    body_json(resp).await["accessToken"].as_str().unwrap().to_string()
}

fn movie_payload() -> Value {
    json!({
        "name": "The Glass of Harbor #512",
        "imageUrl": "https://cdn.movies.example.com/posters/movie_abcdef1234.jpg",
        "price": 450,
        "description": "A story of Glass and Harbor, told in three acts.",
        "location": "MSK",
        "published": true,
        "genreId": 1
    })
}

// --- catalog: auth ---

#[tokio::test]
async fn register_returns_201_with_user() {
    let resp = mock_server::catalog::app()
        .oneshot(json_request(
            "POST",
            "/register",
            &json!({
                "email": "new.user@example.com",
                "fullName": "New User",
                "password": "pw12345678",
                "passwordRepeat": "pw12345678"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let user = body_json(resp).await;
    assert_eq!(user["email"], "new.user@example.com");
    assert_eq!(user["fullName"], "New User");
    assert!(user["id"].is_i64());
    assert!(user.get("password").is_none());
}

#[tokio::test]
async fn register_duplicate_email_conflicts() {
    let mut app = catalog_service();
    let payload = json!({
        "email": "dup@example.com",
        "fullName": "Dup",
        "password": "pw12345678"
    });
    let first = call(&mut app, json_request("POST", "/register", &payload)).await;
    assert_eq!(first.status(), StatusCode::CREATED);
    let second = call(&mut app, json_request("POST", "/register", &payload)).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn register_password_mismatch_is_400() {
    let resp = mock_server::catalog::app()
        .oneshot(json_request(
            "POST",
            "/register",
            &json!({
                "email": "mismatch@example.com",
                "fullName": "Mismatch",
                "password": "pw12345678",
                "passwordRepeat": "other"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_with_wrong_password_is_401() {
    let resp = mock_server::catalog::app()
        .oneshot(json_request(
            "POST",
            "/login",
            &json!({"email": ADMIN_EMAIL, "password": "wrong"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(resp).await;
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn login_admin_returns_access_token() {
    let mut app = catalog_service();
    let token = admin_token(&mut app).await;
    assert!(!token.is_empty());
}

// --- catalog: movies ---

#[tokio::test]
async fn create_movie_without_bearer_is_401() {
    let resp = mock_server::catalog::app()
        .oneshot(json_request("POST", "/movies", &movie_payload()))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_movie_invalid_location_is_400() {
    let mut app = catalog_service();
    let token = admin_token(&mut app).await;
    let mut payload = movie_payload();
    payload["location"] = json!("BKK");
    payload["published"] = json!(false);
    let resp = call(&mut app, authed_request("POST", "/movies", &token, Some(&payload))).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn create_movie_non_numeric_price_is_422() {
    let mut app = catalog_service();
    let token = admin_token(&mut app).await;
    let mut payload = movie_payload();
    payload["price"] = json!("four hundred");
    let resp = call(&mut app, authed_request("POST", "/movies", &token, Some(&payload))).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn get_movie_unknown_id_is_404() {
    let resp = mock_server::catalog::app()
        .oneshot(
            Request::builder()
                .uri("/movies/999999999")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Movie not found");
}

#[tokio::test]
async fn movie_crud_lifecycle() {
    let mut app = catalog_service();
    let token = admin_token(&mut app).await;

    // create
    let resp = call(
        &mut app,
        authed_request("POST", "/movies", &token, Some(&movie_payload())),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = body_json(resp).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["name"], movie_payload()["name"]);
    assert!(created["createdAt"].is_string());
    assert!(created["genre"]["name"].is_string());
    assert!(created["reviews"].is_array());

    // get — body equals the create response
    let resp = call(
        &mut app,
        Request::builder()
            .uri(format!("/movies/{id}"))
            .body(String::new())
            .unwrap(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched = body_json(resp).await;
    assert_eq!(fetched, created);

    // patch name and price
    let resp = call(
        &mut app,
        authed_request(
            "PATCH",
            &format!("/movies/{id}"),
            &token,
            Some(&json!({"name": "Renamed", "price": 999})),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = body_json(resp).await;
    assert_eq!(updated["name"], "Renamed");
    assert_eq!(updated["price"], 999);
    assert_eq!(updated["location"], created["location"]);

    // empty patch is a no-op success
    let resp = call(
        &mut app,
        authed_request("PATCH", &format!("/movies/{id}"), &token, Some(&json!({}))),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["name"], "Renamed");

    // delete, then the movie is gone
    let resp = call(
        &mut app,
        authed_request("DELETE", &format!("/movies/{id}"), &token, None),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let resp = call(
        &mut app,
        Request::builder()
            .uri(format!("/movies/{id}"))
            .body(String::new())
            .unwrap(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_movies_honours_page_size_and_filters() {
    let mut app = catalog_service();
    let token = admin_token(&mut app).await;
    for i in 0..3 {
        let mut payload = movie_payload();
        payload["name"] = json!(format!("Listing #{i}"));
        payload["location"] = json!(if i == 0 { "SPB" } else { "MSK" });
        let resp = call(&mut app, authed_request("POST", "/movies", &token, Some(&payload))).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = call(
        &mut app,
        Request::builder()
            .uri("/movies?pageSize=2&page=1&locations=MSK&published=true")
            .body(String::new())
            .unwrap(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let movies = body["movies"].as_array().unwrap();
    assert_eq!(body["count"], 2);
    assert!(movies.len() <= 2);
    for movie in movies {
        assert_eq!(movie["location"], "MSK");
        assert_eq!(movie["published"], true);
    }
}

#[tokio::test]
async fn list_movies_without_params_returns_everything() {
    let resp = mock_server::catalog::app()
        .oneshot(Request::builder().uri("/movies").body(String::new()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert!(body["movies"].as_array().unwrap().is_empty());
    assert_eq!(body["count"], 0);
}

// --- booking ---

fn booking_payload() -> Value {
    json!({
        "firstname": "Jim",
        "lastname": "Brown",
        "totalprice": 111,
        "depositpaid": true,
        "bookingdates": {"checkin": "2024-04-05", "checkout": "2024-04-08"},
        "additionalneeds": "Cigars"
    })
}

async fn booking_token(
    app: &mut tower::util::BoxCloneService<Request<String>, axum::response::Response, std::convert::Infallible>,
) -> String {
    let resp = call(
        app,
        json_request(
            "POST",
            "/auth",
            &json!({"username": BOOKING_USERNAME, "password": BOOKING_PASSWORD}),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    body_json(resp).await["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn booking_auth_bad_credentials_still_200_with_reason() {
    let resp = mock_server::booking::app()
        .oneshot(json_request(
            "POST",
            "/auth",
            &json!({"username": "admin", "password": "nope"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["reason"], "Bad credentials");
    assert!(body.get("token").is_none());
}

#[tokio::test]
async fn create_booking_returns_200_envelope() {
    let resp = mock_server::booking::app()
        .oneshot(json_request("POST", "/booking", &booking_payload()))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert!(body["bookingid"].is_i64());
    assert_eq!(body["booking"]["firstname"], "Jim");
}

#[tokio::test]
async fn create_booking_non_numeric_totalprice_is_4xx() {
    let mut payload = booking_payload();
    payload["totalprice"] = json!("a lot");
    let resp = mock_server::booking::app()
        .oneshot(json_request("POST", "/booking", &payload))
        .await
        .unwrap();
    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn delete_booking_without_cookie_is_403() {
    let mut app = booking_service();
    let resp = call(&mut app, json_request("POST", "/booking", &booking_payload())).await;
    let id = body_json(resp).await["bookingid"].as_i64().unwrap();

    let resp = call(
        &mut app,
        Request::builder()
            .method("DELETE")
            .uri(format!("/booking/{id}"))
            .body(String::new())
            .unwrap(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn booking_lifecycle() {
    let mut app = booking_service();
    let token = booking_token(&mut app).await;

    // create — no auth needed
    let resp = call(&mut app, json_request("POST", "/booking", &booking_payload())).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let id = body_json(resp).await["bookingid"].as_i64().unwrap();

    // list carries the id
    let resp = call(
        &mut app,
        Request::builder().uri("/booking").body(String::new()).unwrap(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let ids = body_json(resp).await;
    assert!(ids
        .as_array()
        .unwrap()
        .iter()
        .any(|entry| entry["bookingid"] == id));

    // patch with cookie
    let resp = call(
        &mut app,
        Request::builder()
            .method("PATCH")
            .uri(format!("/booking/{id}"))
            .header(http::header::CONTENT_TYPE, "application/json")
            .header(http::header::COOKIE, format!("token={token}"))
            .body(json!({"firstname": "Jane"}).to_string())
            .unwrap(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["firstname"], "Jane");

    // delete answers 201 with an empty body
    let resp = call(
        &mut app,
        Request::builder()
            .method("DELETE")
            .uri(format!("/booking/{id}"))
            .header(http::header::COOKIE, format!("token={token}"))
            .body(String::new())
            .unwrap(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert!(body_bytes(resp).await.is_empty());

    // get after delete
    let resp = call(
        &mut app,
        Request::builder()
            .uri(format!("/booking/{id}"))
            .body(String::new())
            .unwrap(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
