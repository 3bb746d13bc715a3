//! Course API module
//!
//! Browsing is public; mutation is gated to admins by the policy table.

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/course", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        // Lookup keeps its historical double-segment path
        .route("/courses/{course_id}", get(handler::get_by_id))
        .route(
            "/{course_id}",
            put(handler::update).delete(handler::delete),
        )
}
