use folio_schema::SessionUser;
use tracing::{debug, info};

use crate::auth::{hash_password, verify_password};
use crate::config::OwnerConfig;
use crate::db::{DbActorHandle, UserCreate};
use crate::error::FolioError;

/// Checks email/password pairs against stored Argon2 hashes.
#[derive(Clone)]
pub struct CredentialService {
    db: DbActorHandle,
}

pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl CredentialService {
    pub fn new(db: DbActorHandle) -> Self {
        Self { db }
    }

    /// Resolves the identity behind a valid credential pair.
    ///
    /// Fails with `MissingCredentials`, `UserNotFound` or `InvalidCredentials`;
    /// callers are expected to collapse all three into one response.
    pub async fn verify(&self, email: &str, password: &str) -> Result<SessionUser, FolioError> {
        let email = normalize_email(email);
        if email.is_empty() || password.is_empty() {
            return Err(FolioError::MissingCredentials);
        }

        let user = self
            .db
            .find_user_by_email(email.clone())
            .await?
            .ok_or(FolioError::UserNotFound)?;

        // Argon2 is CPU bound; keep it off the async workers.
        let password = password.to_string();
        let hash = user.password_hash.clone();
        let matches = tokio::task::spawn_blocking(move || verify_password(&password, &hash))
            .await
            .map_err(|e| FolioError::UnexpectedError(format!("password check panicked: {e}")))??;

        if !matches {
            debug!(email = %email, "password mismatch");
            return Err(FolioError::InvalidCredentials);
        }
        Ok(user.identity())
    }

    /// Seeds the owner account from config unless a user with that email exists.
    pub async fn ensure_owner(&self, owner: &OwnerConfig) -> Result<(), FolioError> {
        let Some((email, password)) = owner.credentials() else {
            info!("no owner configured; skipping bootstrap");
            return Ok(());
        };
        let email = normalize_email(email);

        if self.db.find_user_by_email(email.clone()).await?.is_some() {
            debug!(email = %email, "owner already present");
            return Ok(());
        }

        let password = password.to_string();
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| FolioError::UnexpectedError(format!("password hash panicked: {e}")))??;

        let created = self
            .db
            .create_user_if_absent(UserCreate {
                email: email.clone(),
                name: owner.name.clone(),
                password_hash,
            })
            .await?;
        match created {
            Some(user) => info!(id = %user.id, email = %user.email, "owner account created"),
            None => debug!(email = %email, "owner created concurrently"),
        }
        Ok(())
    }
}
