use std::borrow::Cow;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use folio_schema::ErrorBody;
use tracing::{error, warn};

use super::folio::FolioError;

/// Error returned by the JSON endpoints.
///
/// The message is chosen by the endpoint (e.g. "Failed to create skill"); the
/// underlying cause is logged and never sent to the caller.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: Cow<'static, str>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Maps a service failure onto the response taxonomy.
    ///
    /// Credential failures become a generic 401, a second About create becomes
    /// 409, everything else (not-found included) is a 500 carrying `message`.
    pub fn from_folio(err: FolioError, message: &'static str) -> Self {
        match err {
            e if e.is_credential_failure() => {
                warn!(error = %e, "{message}");
                Self::new(StatusCode::UNAUTHORIZED, "Invalid email or password")
            }
            FolioError::AboutExists => {
                warn!(error = %FolioError::AboutExists, "{message}");
                Self::new(StatusCode::CONFLICT, FolioError::AboutExists.to_string())
            }
            e => {
                error!(error = %e, "{message}");
                Self::internal(message)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody::new(self.message))).into_response()
    }
}

pub trait ApiResultExt<T> {
    /// Converts the error side into an [`ApiError`] with the given endpoint message.
    fn or_api(self, message: &'static str) -> Result<T, ApiError>;
}

impl<T> ApiResultExt<T> for Result<T, FolioError> {
    fn or_api(self, message: &'static str) -> Result<T, ApiError> {
        self.map_err(|err| ApiError::from_folio(err, message))
    }
}
