//! Review API module
//!
//! Listing all reviews is an admin moderation view; the policy table
//! enforces that.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/review", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{review_id}",
            get(handler::get_by_id).delete(handler::delete),
        )
        .route("/user/{user_id}", get(handler::get_by_user_id))
}
