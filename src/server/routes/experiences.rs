use crate::error::{ApiError, ApiResultExt};
use crate::server::guards::RequireSession;
use crate::server::router::FolioState;
use crate::utils::logging::debug_payload;

use super::json_payload;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use folio_schema::{Experience, ExperienceChanges, NewExperience, SuccessBody};

/// GET /api/experiences
pub async fn list_experiences(
    State(state): State<FolioState>,
) -> Result<Json<Vec<Experience>>, ApiError> {
    let experiences = state
        .services
        .experiences
        .list()
        .await
        .or_api("Failed to fetch experiences")?;
    Ok(Json(experiences))
}

/// POST /api/experiences
pub async fn create_experience(
    State(state): State<FolioState>,
    RequireSession(user): RequireSession,
    payload: Result<Json<NewExperience>, JsonRejection>,
) -> Result<Json<Experience>, ApiError> {
    const MESSAGE: &str = "Failed to create experience";
    let create = json_payload(payload, MESSAGE)?;
    debug_payload("create experience", &user.email, &create);

    let experience = state.services.experiences.create(create).await.or_api(MESSAGE)?;
    Ok(Json(experience))
}

/// PUT /api/experiences/{id}
pub async fn update_experience(
    State(state): State<FolioState>,
    RequireSession(_user): RequireSession,
    Path(id): Path<String>,
    payload: Result<Json<ExperienceChanges>, JsonRejection>,
) -> Result<Json<Experience>, ApiError> {
    const MESSAGE: &str = "Failed to update experience";
    let changes = json_payload(payload, MESSAGE)?;
    let experience = state
        .services
        .experiences
        .update(id, changes)
        .await
        .or_api(MESSAGE)?;
    Ok(Json(experience))
}

/// DELETE /api/experiences/{id}
pub async fn delete_experience(
    State(state): State<FolioState>,
    RequireSession(_user): RequireSession,
    Path(id): Path<String>,
) -> Result<Json<SuccessBody>, ApiError> {
    state
        .services
        .experiences
        .delete(id)
        .await
        .or_api("Failed to delete experience")?;
    Ok(Json(SuccessBody::OK))
}
