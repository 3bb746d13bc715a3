//! Cart API module
//!
//! All routes here require a login; the finer role split (cart
//! mutation belongs to customers) lives in the policy table.

mod handler;

use axum::{
    Router,
    routing::{delete, get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/cart", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{cart_id}", put(handler::update))
        .route(
            "/{cart_id}/course/{course_id}",
            delete(handler::remove_course),
        )
        .route("/user/{user_id}", get(handler::get_by_user_id))
        .route("/customer/{customer_id}", get(handler::get_by_customer_id))
        .route("/clear/{user_id}", delete(handler::clear))
}
