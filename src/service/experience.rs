use folio_schema::{Experience, ExperienceChanges, NewExperience};
use tracing::info;

use crate::db::{DbActorHandle, ExperiencePatch};
use crate::error::FolioError;

#[derive(Clone)]
pub struct ExperienceService {
    db: DbActorHandle,
}

impl ExperienceService {
    pub fn new(db: DbActorHandle) -> Self {
        Self { db }
    }

    /// Newest first.
    pub async fn list(&self) -> Result<Vec<Experience>, FolioError> {
        let rows = self.db.list_experiences().await?;
        Ok(rows.into_iter().map(Experience::from).collect())
    }

    pub async fn create(&self, create: NewExperience) -> Result<Experience, FolioError> {
        let row = self.db.create_experience(create).await?;
        info!(id = %row.id, company = %row.company, "experience created");
        Ok(row.into())
    }

    pub async fn update(
        &self,
        id: String,
        changes: ExperienceChanges,
    ) -> Result<Experience, FolioError> {
        let row = self
            .db
            .patch_experience(ExperiencePatch { id, changes })
            .await?;
        info!(id = %row.id, "experience updated");
        Ok(row.into())
    }

    pub async fn delete(&self, id: String) -> Result<(), FolioError> {
        self.db.delete_experience(id.clone()).await?;
        info!(id = %id, "experience deleted");
        Ok(())
    }
}
