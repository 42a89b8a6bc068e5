//! User administration scenarios against the live catalog mock.

mod support;

use mock_server::catalog::{ADMIN_EMAIL, ADMIN_PASSWORD};
use qa_core::types::LoginRequest;
use qa_core::{ApiManager, Harness, Session};

fn admin_credentials() -> LoginRequest {
    LoginRequest {
        email: ADMIN_EMAIL.to_string(),
        password: ADMIN_PASSWORD.to_string(),
    }
}

#[test]
fn admin_creates_fetches_and_deletes_a_user() {
    support::init_tracing();
    let base_url = support::spawn_catalog();
    let harness = Harness::new();
    let manager = ApiManager::new(&harness);

    // authenticate on a throwaway session, then thread the credential
    // explicitly into the session the test actually uses
    let mut login_session = Session::new(&base_url);
    let token = manager
        .auth
        .authenticate(&mut login_session, &admin_credentials())
        .expect("admin authenticate failed");
    let session = Session::new(&base_url).with_bearer(&token);

    let payload = qa_core::data::register_payload();
    let created = manager
        .users
        .create(&session, &payload)
        .expect("create user failed");
    assert_eq!(created.status, 201);
    let id = created.json().unwrap()["id"].as_i64().unwrap();

    let fetched = manager
        .users
        .get_by_id(&session, id)
        .expect("get user failed");
    let body = fetched.json().unwrap();
    assert_eq!(body["email"], payload.email.as_str());
    assert_eq!(body["fullName"], payload.full_name.as_str());

    let deleted = manager
        .users
        .delete(&session, id)
        .expect("delete user failed");
    assert_eq!(deleted.status, 200);

    manager
        .users
        .get_by_id_expecting(&session, id, 404)
        .expect("get after delete should be 404");
}

#[test]
fn user_routes_require_a_bearer() {
    support::init_tracing();
    let base_url = support::spawn_catalog();
    let harness = Harness::new();
    let manager = ApiManager::new(&harness);
    let session = Session::new(&base_url);

    manager
        .users
        .get_by_id_expecting(&session, 1, 401)
        .expect("unauthenticated get should answer 401");
    manager
        .users
        .create_expecting(&session, &qa_core::data::register_payload(), 401)
        .expect("unauthenticated create should answer 401");
}
