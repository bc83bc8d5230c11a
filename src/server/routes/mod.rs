pub mod about;
pub mod auth;
pub mod experiences;
pub mod skills;

use crate::error::ApiError;
use crate::server::router::FolioState;

use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    routing::{get, post, put},
};
use tracing::debug;

/// Unwraps a JSON body, turning a shape mismatch into a 400 carrying `message`.
pub(crate) fn json_payload<T>(
    payload: Result<Json<T>, JsonRejection>,
    message: &'static str,
) -> Result<T, ApiError> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            debug!(error = %rejection, "{message}: rejected payload");
            Err(ApiError::bad_request(message))
        }
    }
}

pub fn router() -> Router<FolioState> {
    Router::new()
        .route(
            "/api/experiences",
            get(experiences::list_experiences).post(experiences::create_experience),
        )
        .route(
            "/api/experiences/{id}",
            put(experiences::update_experience).delete(experiences::delete_experience),
        )
        .route(
            "/api/skills",
            get(skills::list_skills)
                .post(skills::create_skill)
                .put(skills::update_skill)
                .delete(skills::delete_skill),
        )
        .route(
            "/api/about",
            get(about::get_about)
                .post(about::create_about)
                .put(about::update_about),
        )
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/session", get(auth::session))
}
