//! Shared test harness: in-process requests against the full
//! application (middleware stack included), no network involved.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use sprout_server::auth::JwtConfig;
use sprout_server::{Config, ServerState, api};

pub const TEST_SECRET: &str = "integration-test-secret-integration-test-secret-0001";

/// Fresh state with a fixed signing secret and an empty store
pub fn test_state() -> ServerState {
    let config = Config {
        http_port: 0,
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            expiration_minutes: 600,
        },
        environment: "development".to_string(),
        log_dir: None,
    };
    ServerState::initialize(&config)
}

pub fn app(state: &ServerState) -> Router {
    api::build_app(state)
}

/// Send one request through the app; returns status and parsed body.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(json_body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json_body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

/// Register an account (plus its customer profile); returns the
/// customer body.
pub async fn register(app: &Router, email: &str, role: &str) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/api/user/register",
        None,
        Some(json!({
            "email": email,
            "password": "correct-horse-battery",
            "username": email.split('@').next().unwrap(),
            "mobile_number": "5550001111",
            "role": role,
            "customer_name": "Test Customer",
            "information": "test profile"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {}", body);
    body
}

/// Log in and return the bearer token
pub async fn login(app: &Router, email: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/user/login",
        None,
        Some(json!({ "email": email, "password": "correct-horse-battery" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {}", body);
    body["token"].as_str().unwrap().to_string()
}

/// Create a catalog course with the given admin token
pub async fn create_course(app: &Router, admin_token: &str, price: f64) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/api/course",
        Some(admin_token),
        Some(json!({
            "course_type": "Rust",
            "course_image_url": "https://img.example.com/rust.png",
            "course_details": "Systems programming from the ground up",
            "course_price": price
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "course creation failed: {}", body);
    body
}
