use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use folio_schema::ErrorBody;
use tracing::debug;

/// Rejection of the session guard on mutating JSON endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    MissingSession,
    InvalidSession,
    ExpiredSession,
}

impl AuthError {
    fn reason(self) -> &'static str {
        match self {
            AuthError::MissingSession => "missing session cookie",
            AuthError::InvalidSession => "session cookie could not be decoded",
            AuthError::ExpiredSession => "session expired",
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        debug!(reason = self.reason(), "rejecting unauthenticated request");
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorBody::new("Unauthorized")),
        )
            .into_response()
    }
}
