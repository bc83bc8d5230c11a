use crate::error::{ApiError, ApiResultExt};
use crate::server::guards::RequireSession;
use crate::server::router::FolioState;
use crate::utils::logging::debug_payload;

use super::json_payload;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use folio_schema::{NewSkill, Skill, SkillDeleteRequest, SkillUpdateRequest, SuccessBody};

/// GET /api/skills
pub async fn list_skills(State(state): State<FolioState>) -> Result<Json<Vec<Skill>>, ApiError> {
    let skills = state
        .services
        .skills
        .list()
        .await
        .or_api("Failed to fetch skills")?;
    Ok(Json(skills))
}

/// POST /api/skills
pub async fn create_skill(
    State(state): State<FolioState>,
    RequireSession(user): RequireSession,
    payload: Result<Json<NewSkill>, JsonRejection>,
) -> Result<Json<Skill>, ApiError> {
    const MESSAGE: &str = "Failed to create skill";
    let create = json_payload(payload, MESSAGE)?;
    debug_payload("create skill", &user.email, &create);

    let skill = state.services.skills.create(create).await.or_api(MESSAGE)?;
    Ok(Json(skill))
}

/// PUT /api/skills
///
/// The id travels in the body alongside the optional fields.
pub async fn update_skill(
    State(state): State<FolioState>,
    RequireSession(_user): RequireSession,
    payload: Result<Json<SkillUpdateRequest>, JsonRejection>,
) -> Result<Json<Skill>, ApiError> {
    const MESSAGE: &str = "Failed to update skill";
    let SkillUpdateRequest { id, changes } = json_payload(payload, MESSAGE)?;
    let skill = state
        .services
        .skills
        .update(id, changes)
        .await
        .or_api(MESSAGE)?;
    Ok(Json(skill))
}

/// DELETE /api/skills
pub async fn delete_skill(
    State(state): State<FolioState>,
    RequireSession(_user): RequireSession,
    payload: Result<Json<SkillDeleteRequest>, JsonRejection>,
) -> Result<Json<SuccessBody>, ApiError> {
    const MESSAGE: &str = "Failed to delete skill";
    let SkillDeleteRequest { id } = json_payload(payload, MESSAGE)?;
    state.services.skills.delete(id).await.or_api(MESSAGE)?;
    Ok(Json(SuccessBody::OK))
}
