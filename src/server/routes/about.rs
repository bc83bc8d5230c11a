use crate::error::{ApiError, ApiResultExt};
use crate::server::guards::RequireSession;
use crate::server::router::FolioState;

use super::json_payload;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use folio_schema::{About, AboutUpdateRequest, NewAbout};

/// GET /api/about; `null` until the first write.
pub async fn get_about(State(state): State<FolioState>) -> Result<Json<Option<About>>, ApiError> {
    let about = state
        .services
        .about
        .get()
        .await
        .or_api("Failed to fetch about")?;
    Ok(Json(about))
}

/// POST /api/about; 409 once a row exists.
pub async fn create_about(
    State(state): State<FolioState>,
    RequireSession(_user): RequireSession,
    payload: Result<Json<NewAbout>, JsonRejection>,
) -> Result<Json<About>, ApiError> {
    const MESSAGE: &str = "Failed to create about";
    let NewAbout { content } = json_payload(payload, MESSAGE)?;
    let about = state.services.about.create(content).await.or_api(MESSAGE)?;
    Ok(Json(about))
}

/// PUT /api/about
pub async fn update_about(
    State(state): State<FolioState>,
    RequireSession(_user): RequireSession,
    payload: Result<Json<AboutUpdateRequest>, JsonRejection>,
) -> Result<Json<About>, ApiError> {
    const MESSAGE: &str = "Failed to update about";
    let AboutUpdateRequest { id, content } = json_payload(payload, MESSAGE)?;
    let about = state
        .services
        .about
        .update(id, content)
        .await
        .or_api(MESSAGE)?;
    Ok(Json(about))
}
