//! End-to-end authentication and authorization tests.
//!
//! Every request goes through the full middleware stack, so these
//! exercise token extraction, principal resolution and the policy
//! table together.

mod common;

use common::{TEST_SECRET, app, create_course, login, register, send, test_state};
use http::StatusCode;
use serde_json::json;
use sprout_server::JwtService;
use sprout_server::auth::JwtConfig;

#[tokio::test]
async fn register_login_me_round_trip() {
    let state = test_state();
    let app = app(&state);

    let customer = register(&app, "alice@example.com", "USER").await;
    assert_eq!(customer["customer_name"], "Test Customer");

    let token = login(&app, "alice@example.com").await;
    let (status, me) = send(&app, "GET", "/api/user/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["email"], "alice@example.com");
    assert_eq!(me["role"], "USER");
    assert_eq!(me["authorities"], json!(["ROLE_USER"]));
}

#[tokio::test]
async fn login_with_unknown_email_is_not_found() {
    let state = test_state();
    let app = app(&state);

    let (status, body) = send(
        &app,
        "POST",
        "/api/user/login",
        None,
        Some(json!({ "email": "ghost@example.com", "password": "whatever-pass" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "E0003");
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let state = test_state();
    let app = app(&state);
    register(&app, "alice@example.com", "USER").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/user/login",
        None,
        Some(json!({ "email": "alice@example.com", "password": "not-the-password" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "E3004");
}

#[tokio::test]
async fn duplicate_registration_conflicts() {
    let state = test_state();
    let app = app(&state);
    register(&app, "alice@example.com", "USER").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/user/register",
        None,
        Some(json!({
            "email": "alice@example.com",
            "password": "correct-horse-battery",
            "username": "alice2",
            "mobile_number": "5550002222",
            "role": "USER",
            "customer_name": "Alice Again",
            "information": ""
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "E0004");
}

#[tokio::test]
async fn registration_rejects_invalid_payload() {
    let state = test_state();
    let app = app(&state);

    let (status, body) = send(
        &app,
        "POST",
        "/api/user/register",
        None,
        Some(json!({
            "email": "not-an-email",
            "password": "short",
            "username": "x",
            "mobile_number": "5550003333",
            "role": "USER",
            "customer_name": "X",
            "information": ""
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");
}

#[tokio::test]
async fn course_browsing_is_public() {
    let state = test_state();
    let app = app(&state);

    let (status, body) = send(&app, "GET", "/api/course", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn health_probe_is_public() {
    let state = test_state();
    let app = app(&state);

    let (status, body) = send(&app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn protected_route_without_token_is_unauthorized() {
    let state = test_state();
    let app = app(&state);

    let (status, body) = send(&app, "GET", "/api/order", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "E3001");
}

#[tokio::test]
async fn garbage_bearer_token_is_unauthorized() {
    let state = test_state();
    let app = app(&state);

    let (status, _) = send(&app, "GET", "/api/order", Some("not.a.token"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn expired_token_is_unauthorized() {
    let state = test_state();
    let app = app(&state);
    register(&app, "alice@example.com", "USER").await;

    // Same secret, negative lifetime: authentic but already expired
    let stale_issuer = JwtService::with_config(JwtConfig {
        secret: TEST_SECRET.to_string(),
        expiration_minutes: -10,
    });
    let token = stale_issuer
        .issue("alice@example.com", shared::models::Role::User)
        .unwrap();

    let (status, _) = send(&app, "GET", "/api/user/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn token_signed_with_wrong_secret_is_unauthorized() {
    let state = test_state();
    let app = app(&state);
    register(&app, "alice@example.com", "USER").await;

    let forger = JwtService::with_config(JwtConfig {
        secret: "attacker-controlled-secret-attacker-0001".to_string(),
        expiration_minutes: 600,
    });
    let token = forger
        .issue("alice@example.com", shared::models::Role::Admin)
        .unwrap();

    let (status, _) = send(&app, "GET", "/api/user/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn token_for_deleted_account_stops_resolving() {
    let state = test_state();
    let app = app(&state);
    register(&app, "alice@example.com", "USER").await;

    // Token issued by the server's own service for an identity with
    // no stored record behind it
    let token = state
        .get_jwt_service()
        .issue("gone@example.com", shared::models::Role::User)
        .unwrap();

    let (status, _) = send(&app, "GET", "/api/user/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn course_mutation_is_admin_gated() {
    let state = test_state();
    let app = app(&state);
    register(&app, "user@example.com", "USER").await;
    register(&app, "admin@example.com", "ADMIN").await;
    let user_token = login(&app, "user@example.com").await;
    let admin_token = login(&app, "admin@example.com").await;

    let payload = json!({
        "course_type": "Rust",
        "course_image_url": "https://img.example.com/rust.png",
        "course_details": "details",
        "course_price": 49.5
    });

    let (status, body) = send(
        &app,
        "POST",
        "/api/course",
        Some(&user_token),
        Some(payload.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "E2001");

    let (status, body) = send(&app, "POST", "/api/course", Some(&admin_token), Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["course_price"], 49.5);
}

#[tokio::test]
async fn review_listing_is_admin_only() {
    let state = test_state();
    let app = app(&state);
    register(&app, "user@example.com", "USER").await;
    register(&app, "admin@example.com", "ADMIN").await;
    let user_token = login(&app, "user@example.com").await;
    let admin_token = login(&app, "admin@example.com").await;

    let (status, _) = send(&app, "GET", "/api/review", Some(&user_token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(&app, "GET", "/api/review", Some(&admin_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn admin_is_not_implicitly_a_user() {
    let state = test_state();
    let app = app(&state);
    register(&app, "admin@example.com", "ADMIN").await;
    let admin_token = login(&app, "admin@example.com").await;

    // Cart updates require exactly the USER role
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/cart/{}", uuid::Uuid::new_v4()),
        Some(&admin_token),
        Some(json!({ "course_ids": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn authorities_come_from_the_store_not_the_token() {
    let state = test_state();
    let app = app(&state);
    register(&app, "user@example.com", "USER").await;

    // Authentic token claiming ADMIN for an identity stored as USER
    let token = state
        .get_jwt_service()
        .issue("user@example.com", shared::models::Role::Admin)
        .unwrap();

    let (status, _) = send(
        &app,
        "POST",
        "/api/course",
        Some(&token),
        Some(json!({
            "course_type": "Rust",
            "course_image_url": "u",
            "course_details": "d",
            "course_price": 1.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn admin_can_delete_courses() {
    let state = test_state();
    let app = app(&state);
    register(&app, "admin@example.com", "ADMIN").await;
    let admin_token = login(&app, "admin@example.com").await;

    let course = create_course(&app, &admin_token, 30.0).await;
    let course_id = course["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        "DELETE",
        &format!("/api/course/{}", course_id),
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(true));

    let (status, _) = send(
        &app,
        "GET",
        &format!("/api/course/courses/{}", course_id),
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
