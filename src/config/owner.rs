use crate::error::FolioError;
use serde::{Deserialize, Serialize};

/// Owner account seeded at startup when no user with `email` exists yet.
#[derive(Clone, Default, Deserialize, Serialize)]
pub struct OwnerConfig {
    /// TOML: `owner.email`.
    #[serde(default)]
    pub email: Option<String>,

    /// Plaintext password, hashed before it reaches the database.
    /// TOML: `owner.password`.
    #[serde(default)]
    pub password: Option<String>,

    /// TOML: `owner.name`.
    #[serde(default)]
    pub name: Option<String>,
}

impl std::fmt::Debug for OwnerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OwnerConfig")
            .field("email", &self.email)
            .field("password_set", &self.password.is_some())
            .field("name", &self.name)
            .finish()
    }
}

impl OwnerConfig {
    /// Email and password when both are present and non-blank.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let email = self.email.as_deref().map(str::trim).filter(|e| !e.is_empty())?;
        let password = self.password.as_deref().filter(|p| !p.is_empty())?;
        Some((email, password))
    }

    pub fn validate(&self) -> Result<(), FolioError> {
        if self.email.is_some() != self.password.is_some() {
            return Err(FolioError::Config(
                "owner.email and owner.password must be set together".to_string(),
            ));
        }
        Ok(())
    }
}
