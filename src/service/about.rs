use folio_schema::About;
use tracing::info;

use crate::db::{AboutPatch, DbActorHandle};
use crate::error::FolioError;

#[derive(Clone)]
pub struct AboutService {
    db: DbActorHandle,
}

impl AboutService {
    pub fn new(db: DbActorHandle) -> Self {
        Self { db }
    }

    pub async fn get(&self) -> Result<Option<About>, FolioError> {
        Ok(self.db.get_about().await?.map(About::from))
    }

    /// First write only; a stored row turns this into `FolioError::AboutExists`.
    pub async fn create(&self, content: String) -> Result<About, FolioError> {
        let row = self.db.create_about(content).await?;
        info!(id = %row.id, "about created");
        Ok(row.into())
    }

    pub async fn update(&self, id: String, content: Option<String>) -> Result<About, FolioError> {
        let row = self.db.patch_about(AboutPatch { id, content }).await?;
        info!(id = %row.id, "about updated");
        Ok(row.into())
    }

    /// Create-or-overwrite in a single statement.
    pub async fn save(&self, content: String) -> Result<About, FolioError> {
        let row = self.db.upsert_about(content).await?;
        info!(id = %row.id, "about saved");
        Ok(row.into())
    }
}
