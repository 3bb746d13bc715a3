//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::core::ServerState;
use crate::utils::AppResult;
use shared::models::{Order, OrderCreate};

/// Status transition payload
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

/// POST /api/order - place an order, priced from the catalog
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let order = state.store.orders().create(payload)?;
    tracing::info!(
        order_id = %order.id,
        customer_id = %order.customer_id,
        order_price = order.order_price,
        "Order placed"
    );
    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /api/order - all orders
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    let orders = state.store.orders().find_all()?;
    Ok(Json(orders))
}

/// GET /api/order/{order_id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(order_id): Path<Uuid>,
) -> AppResult<Json<Order>> {
    let order = state.store.orders().find_by_id(&order_id)?;
    Ok(Json(order))
}

/// GET /api/order/customer/{customer_id}
pub async fn get_by_customer_id(
    State(state): State<ServerState>,
    Path(customer_id): Path<Uuid>,
) -> AppResult<Json<Vec<Order>>> {
    let orders = state.store.orders().find_by_customer_id(&customer_id)?;
    Ok(Json(orders))
}

/// PUT /api/order/{order_id}/status
pub async fn update_status(
    State(state): State<ServerState>,
    Path(order_id): Path<Uuid>,
    Json(payload): Json<StatusUpdate>,
) -> AppResult<Json<Order>> {
    let order = state
        .store
        .orders()
        .update_status(&order_id, &payload.status)?;
    Ok(Json(order))
}

/// DELETE /api/order/{order_id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(order_id): Path<Uuid>,
) -> AppResult<Json<bool>> {
    let deleted = state.store.orders().delete(&order_id)?;
    Ok(Json(deleted))
}
