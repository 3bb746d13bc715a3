//! Order API module

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/order", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{order_id}",
            get(handler::get_by_id).delete(handler::delete),
        )
        .route("/{order_id}/status", put(handler::update_status))
        .route("/customer/{customer_id}", get(handler::get_by_customer_id))
}
