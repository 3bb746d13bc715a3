//! Cart API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};
use shared::models::{Cart, CartCreate, CartUpdate};

/// POST /api/cart - open a cart for a customer
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CartCreate>,
) -> AppResult<(StatusCode, Json<Cart>)> {
    let cart = state.store.carts().create(payload)?;
    Ok((StatusCode::CREATED, Json(cart)))
}

/// GET /api/cart - all carts
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Cart>>> {
    Ok(Json(state.store.carts().find_all()))
}

/// PUT /api/cart/{cart_id} - replace the course list
pub async fn update(
    State(state): State<ServerState>,
    Path(cart_id): Path<Uuid>,
    Json(payload): Json<CartUpdate>,
) -> AppResult<Json<Cart>> {
    let cart = state.store.carts().update(&cart_id, payload)?;
    Ok(Json(cart))
}

/// DELETE /api/cart/{cart_id}/course/{course_id}
pub async fn remove_course(
    State(state): State<ServerState>,
    Path((cart_id, course_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<Cart>> {
    let cart = state.store.carts().remove_course(&cart_id, &course_id)?;
    Ok(Json(cart))
}

/// GET /api/cart/user/{user_id} - cart for a user account
pub async fn get_by_user_id(
    State(state): State<ServerState>,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<Cart>> {
    state
        .store
        .carts()
        .find_by_user_id(&user_id)
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("Cart not found for user ID: {}", user_id)))
}

/// GET /api/cart/customer/{customer_id}
pub async fn get_by_customer_id(
    State(state): State<ServerState>,
    Path(customer_id): Path<Uuid>,
) -> AppResult<Json<Cart>> {
    state
        .store
        .carts()
        .find_by_customer_id(&customer_id)
        .map(Json)
        .ok_or_else(|| {
            AppError::not_found(format!("Cart not found for customer ID: {}", customer_id))
        })
}

/// DELETE /api/cart/clear/{user_id} - empty the cart, keep the record
pub async fn clear(
    State(state): State<ServerState>,
    Path(user_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.store.carts().clear_by_user_id(&user_id)?;
    Ok(StatusCode::NO_CONTENT)
}
