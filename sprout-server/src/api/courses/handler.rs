//! Course API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::core::ServerState;
use crate::utils::AppResult;
use shared::models::{Course, CourseCreate, CourseUpdate};

/// GET /api/course - full catalog listing
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Course>>> {
    Ok(Json(state.store.courses().find_all()))
}

/// GET /api/course/courses/{course_id} - single course lookup
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(course_id): Path<Uuid>,
) -> AppResult<Json<Course>> {
    let course = state.store.courses().find_by_id(&course_id)?;
    Ok(Json(course))
}

/// POST /api/course - add a course to the catalog
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CourseCreate>,
) -> AppResult<(StatusCode, Json<Course>)> {
    let course = state.store.courses().create(payload)?;
    Ok((StatusCode::CREATED, Json(course)))
}

/// PUT /api/course/{course_id} - update catalog entry
pub async fn update(
    State(state): State<ServerState>,
    Path(course_id): Path<Uuid>,
    Json(payload): Json<CourseUpdate>,
) -> AppResult<Json<Course>> {
    let course = state.store.courses().update(&course_id, payload)?;
    Ok(Json(course))
}

/// DELETE /api/course/{course_id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(course_id): Path<Uuid>,
) -> AppResult<Json<bool>> {
    let deleted = state.store.courses().delete(&course_id)?;
    Ok(Json(deleted))
}
