use crate::auth::read_session;
use crate::error::{ApiError, ApiResultExt};
use crate::server::router::FolioState;

use super::json_payload;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use axum_extra::extract::cookie::PrivateCookieJar;
use chrono::Utc;
use folio_schema::{LoginRequest, SessionResponse, SessionUser, SuccessBody};

/// POST /api/auth/login
///
/// Every refusal (missing field, unknown email, wrong password) is the same 401.
pub async fn login(
    State(state): State<FolioState>,
    jar: PrivateCookieJar,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(PrivateCookieJar, Json<SessionUser>), ApiError> {
    const MESSAGE: &str = "Failed to sign in";
    let LoginRequest { email, password } = json_payload(payload, MESSAGE)?;

    let user = state
        .services
        .credentials
        .verify(&email, &password)
        .await
        .or_api(MESSAGE)?;
    let jar = state.sign_in(jar, &user).or_api(MESSAGE)?;
    Ok((jar, Json(user)))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<FolioState>,
    jar: PrivateCookieJar,
) -> (PrivateCookieJar, Json<SuccessBody>) {
    (state.sign_out(jar), Json(SuccessBody::OK))
}

/// GET /api/auth/session
pub async fn session(jar: PrivateCookieJar) -> Json<SessionResponse> {
    let user = read_session(&jar, Utc::now()).ok().map(|claims| claims.user());
    Json(SessionResponse { user })
}
