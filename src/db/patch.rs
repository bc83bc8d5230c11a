//! Payload types accepted by the database actor.

use async_trait::async_trait;
use folio_schema::{ExperienceChanges, SkillChanges};
use sqlx::SqlitePool;

use crate::error::FolioError;

/// Abstraction for applying a partial update to the database.
///
/// Implementations update only the fields that are `Some`, refresh `updated_at`
/// and return the stored row, or `FolioError::NotFound` when the id is unknown.
#[async_trait]
pub trait DbPatchable {
    type Row: Send;

    async fn apply_patch(&self, pool: &SqlitePool) -> Result<Self::Row, FolioError>;
}

#[derive(Debug, Clone)]
pub struct ExperiencePatch {
    pub id: String,
    pub changes: ExperienceChanges,
}

#[derive(Debug, Clone)]
pub struct SkillPatch {
    pub id: String,
    pub changes: SkillChanges,
}

#[derive(Debug, Clone)]
pub struct AboutPatch {
    pub id: String,
    /// `None` => do not change; `Some(v)` => update
    pub content: Option<String>,
}

#[derive(Clone)]
pub struct UserCreate {
    pub email: String,
    pub name: Option<String>,
    pub password_hash: String,
}

impl std::fmt::Debug for UserCreate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCreate")
            .field("email", &self.email)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
