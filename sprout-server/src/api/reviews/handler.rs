//! Review API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::core::ServerState;
use crate::utils::AppResult;
use shared::models::{Review, ReviewCreate};

/// POST /api/review
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ReviewCreate>,
) -> AppResult<(StatusCode, Json<Review>)> {
    let review = state.store.reviews().create(payload)?;
    Ok((StatusCode::CREATED, Json(review)))
}

/// GET /api/review - moderation listing
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Review>>> {
    Ok(Json(state.store.reviews().find_all()))
}

/// GET /api/review/{review_id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(review_id): Path<Uuid>,
) -> AppResult<Json<Review>> {
    let review = state.store.reviews().find_by_id(&review_id)?;
    Ok(Json(review))
}

/// GET /api/review/user/{user_id} - reviews by the user's customer
pub async fn get_by_user_id(
    State(state): State<ServerState>,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<Vec<Review>>> {
    let reviews = state.store.reviews().find_by_user_id(&user_id)?;
    Ok(Json(reviews))
}

/// DELETE /api/review/{review_id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(review_id): Path<Uuid>,
) -> AppResult<Json<bool>> {
    let deleted = state.store.reviews().delete(&review_id)?;
    Ok(Json(deleted))
}
