use folio_schema::{NewSkill, Skill, SkillCategory, SkillChanges};
use tracing::info;

use crate::db::{DbActorHandle, SkillPatch};
use crate::error::FolioError;

#[derive(Clone)]
pub struct SkillService {
    db: DbActorHandle,
}

impl SkillService {
    pub fn new(db: DbActorHandle) -> Self {
        Self { db }
    }

    /// Ordered by category, then name.
    pub async fn list(&self) -> Result<Vec<Skill>, FolioError> {
        self.db
            .list_skills()
            .await?
            .into_iter()
            .map(Skill::try_from)
            .collect()
    }

    /// Skills bucketed by category in `SkillCategory::ALL` order; empty buckets are dropped.
    pub async fn grouped(&self) -> Result<Vec<(SkillCategory, Vec<Skill>)>, FolioError> {
        let skills = self.list().await?;
        Ok(group_by_category(skills))
    }

    pub async fn create(&self, create: NewSkill) -> Result<Skill, FolioError> {
        let row = self.db.create_skill(create).await?;
        info!(id = %row.id, name = %row.name, category = %row.category, "skill created");
        row.try_into()
    }

    pub async fn update(&self, id: String, changes: SkillChanges) -> Result<Skill, FolioError> {
        let row = self.db.patch_skill(SkillPatch { id, changes }).await?;
        info!(id = %row.id, category = %row.category, "skill updated");
        row.try_into()
    }

    pub async fn delete(&self, id: String) -> Result<(), FolioError> {
        self.db.delete_skill(id.clone()).await?;
        info!(id = %id, "skill deleted");
        Ok(())
    }
}

fn group_by_category(skills: Vec<Skill>) -> Vec<(SkillCategory, Vec<Skill>)> {
    SkillCategory::ALL
        .iter()
        .map(|category| {
            let bucket: Vec<Skill> = skills
                .iter()
                .filter(|s| s.category == *category)
                .cloned()
                .collect();
            (*category, bucket)
        })
        .filter(|(_, bucket)| !bucket.is_empty())
        .collect()
}
