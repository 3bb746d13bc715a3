//! Customer API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};
use shared::models::{Customer, CustomerCreate};

/// POST /api/customer - register a standalone customer profile
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CustomerCreate>,
) -> AppResult<(StatusCode, Json<Customer>)> {
    let customer = state.store.customers().create(payload)?;
    Ok((StatusCode::CREATED, Json(customer)))
}

/// GET /api/customer/{customer_id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(customer_id): Path<Uuid>,
) -> AppResult<Json<Customer>> {
    let customer = state.store.customers().find_by_id(&customer_id)?;
    Ok(Json(customer))
}

/// GET /api/customer/user/{user_id} - profile tied to a user account
pub async fn get_by_user_id(
    State(state): State<ServerState>,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<Customer>> {
    state
        .store
        .customers()
        .find_by_user_id(&user_id)
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("Customer not found for user ID: {}", user_id)))
}
