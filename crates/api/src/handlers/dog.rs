//! Handlers for the `/dogs` resource.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use dogs_core::dog::{Dog, DogPayload};
use dogs_core::types::DbId;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/dogs
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<DogPayload>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Dog>)> {
    let Json(payload) = body?;
    let dog = state.dogs.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(dog)))
}

/// GET /api/v1/dogs
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Dog>>> {
    let dogs = state.dogs.list().await?;
    tracing::debug!(count = dogs.len(), "Listed dogs");
    Ok(Json(dogs))
}

/// GET /api/v1/dogs/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<Dog>> {
    let Path(id) = id?;
    Ok(Json(state.dogs.get(id).await?))
}

/// PUT /api/v1/dogs/{id}
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
    body: Result<Json<DogPayload>, JsonRejection>,
) -> AppResult<Json<Dog>> {
    let Path(id) = id?;
    let Json(payload) = body?;
    Ok(Json(state.dogs.update(id, &payload).await?))
}

/// DELETE /api/v1/dogs/{id}
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = id?;
    state.dogs.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
