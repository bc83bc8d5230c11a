use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum FolioError {
    #[error("{entity} not found for id={id}")]
    NotFound { entity: &'static str, id: String },

    #[error("About content already exists; update it instead")]
    AboutExists,

    #[error("Email and password are required")]
    MissingCredentials,

    #[error("No user registered for this email")]
    UserNotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Invalid stored row: {0}")]
    InvalidRow(String),

    #[error("Session encoding error: {0}")]
    SessionEncoding(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),

    #[error("Ractor error: {0}")]
    RactorError(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

impl FolioError {
    pub(crate) fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        FolioError::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Any of the ways a login attempt can be refused.
    pub fn is_credential_failure(&self) -> bool {
        matches!(
            self,
            FolioError::MissingCredentials
                | FolioError::UserNotFound
                | FolioError::InvalidCredentials
        )
    }
}
