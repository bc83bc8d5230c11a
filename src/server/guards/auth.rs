use crate::auth::read_session;
use crate::error::AuthError;
use crate::server::router::FolioState;
use axum::{extract::FromRequestParts, http::request::Parts, response::Redirect};
use axum_extra::extract::cookie::PrivateCookieJar;
use chrono::Utc;
use folio_schema::SessionUser;

fn session_user(parts: &Parts, state: &FolioState) -> Result<SessionUser, AuthError> {
    let jar = PrivateCookieJar::from_headers(&parts.headers, state.cookie_key.clone());
    read_session(&jar, Utc::now()).map(|claims| claims.user())
}

/// Session guard for the JSON API; rejects with 401 before the body is read.
#[derive(Debug, Clone)]
pub struct RequireSession(pub SessionUser);

impl FromRequestParts<FolioState> for RequireSession {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &FolioState,
    ) -> Result<Self, Self::Rejection> {
        session_user(parts, state).map(RequireSession)
    }
}

/// Session guard for the admin pages; bounces to the login form.
#[derive(Debug, Clone)]
pub struct RequirePageSession(pub SessionUser);

impl FromRequestParts<FolioState> for RequirePageSession {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &FolioState,
    ) -> Result<Self, Self::Rejection> {
        session_user(parts, state)
            .map(RequirePageSession)
            .map_err(|_| Redirect::to("/admin"))
    }
}
