//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health probe
//! - [`users`] - registration, login and current-user info
//! - [`courses`] - course catalog management
//! - [`customers`] - customer profiles
//! - [`carts`] - shopping carts
//! - [`orders`] - order placement and tracking
//! - [`reviews`] - course reviews
//!
//! [`build_app`] wires the routers to the middleware stack; the
//! authorization rule table runs inside [`crate::auth::enforce_policy`]
//! rather than per-route layers, so every router here registers its
//! routes unguarded.

pub mod carts;
pub mod courses;
pub mod customers;
pub mod health;
pub mod orders;
pub mod reviews;
pub mod users;

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::auth;
use crate::core::ServerState;

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(users::router())
        .merge(courses::router())
        .merge(customers::router())
        .merge(carts::router())
        .merge(orders::router())
        .merge(reviews::router())
        .merge(health::router())
}

/// Build the fully configured application with middleware and state
///
/// Layer order matters: `authenticate` is added last so it runs first
/// and has the `CurrentUser` extension installed by the time
/// `enforce_policy` evaluates the rule table.
pub fn build_app(state: &ServerState) -> Router {
    build_router()
        // ========== Tower HTTP Middleware ==========
        // CORS - handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Compression - gzip compress responses
        .layer(CompressionLayer::new())
        // Trace - request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Request ID - unique ID per request, echoed on the response
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        // ========== Application Middleware ==========
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth::enforce_policy,
        ))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth::authenticate,
        ))
        .with_state(state.clone())
}
