mod api;
mod auth;
mod folio;

pub use api::{ApiError, ApiResultExt};
pub use auth::AuthError;
pub use folio::FolioError;
