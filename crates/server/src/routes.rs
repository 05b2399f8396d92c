use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use curriculum_core::model::{Topic, TopicId, Unit};
use serde::Deserialize;

use crate::AppState;
use crate::error::ApiError;

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// Toggle request body.
#[derive(Debug, Deserialize)]
pub struct ToggleTopicRequest {
    pub completed: bool,
}

/// GET /api/curriculum
///
/// The full nested tree, every level ordered by its order field. No
/// filtering or pagination.
pub async fn get_curriculum(State(state): State<AppState>) -> Result<Json<Vec<Unit>>, ApiError> {
    let tree = state.storage.curriculum.full_curriculum().await?;
    Ok(Json(tree))
}

/// PATCH /api/topics/:id/toggle
///
/// Sets the topic's completed flag to the requested value and returns the
/// updated record. Last writer wins.
pub async fn toggle_topic(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    body: Result<Json<ToggleTopicRequest>, JsonRejection>,
) -> Result<Json<Topic>, ApiError> {
    let Path(id) = id.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
    let Json(request) = body.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;

    let updated = state
        .storage
        .curriculum
        .set_topic_completed(TopicId::new(id), request.completed)
        .await?;

    match updated {
        Some(topic) => {
            tracing::debug!(topic = %topic.id, completed = topic.completed, "topic toggled");
            Ok(Json(topic))
        }
        None => Err(ApiError::NotFound),
    }
}
