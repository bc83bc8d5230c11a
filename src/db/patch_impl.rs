//! `*Patch` -> DbPatchable implementations.
//!
//! This sits in the `db` module because it contains SQL/table knowledge.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use super::models::{DbAbout, DbExperience, DbSkill};
use super::patch::{AboutPatch, DbPatchable, ExperiencePatch, SkillPatch};
use crate::error::FolioError;

#[async_trait]
impl DbPatchable for ExperiencePatch {
    type Row = DbExperience;

    async fn apply_patch(&self, pool: &SqlitePool) -> Result<DbExperience, FolioError> {
        let changes = &self.changes;
        let updated_at = Utc::now();

        let row = sqlx::query_as::<_, DbExperience>(
            r#"
            UPDATE experiences
            SET
                title = COALESCE(?, title),
                company = COALESCE(?, company),
                period = COALESCE(?, period),
                description = COALESCE(?, description),
                updated_at = ?
            WHERE id = ?
            RETURNING id, title, company, period, description, created_at, updated_at
            "#,
        )
        .bind(changes.title.as_deref())
        .bind(changes.company.as_deref())
        .bind(changes.period.as_deref())
        .bind(changes.description.as_deref())
        .bind(updated_at)
        .bind(&self.id)
        .fetch_optional(pool)
        .await?;

        debug!(
            entity = "experience",
            id = %self.id,
            found = row.is_some(),
            title_set = changes.title.is_some(),
            company_set = changes.company.is_some(),
            period_set = changes.period.is_some(),
            description_set = changes.description.is_some(),
            "db patch applied"
        );

        row.ok_or_else(|| FolioError::not_found("experience", self.id.clone()))
    }
}

#[async_trait]
impl DbPatchable for SkillPatch {
    type Row = DbSkill;

    async fn apply_patch(&self, pool: &SqlitePool) -> Result<DbSkill, FolioError> {
        let changes = &self.changes;
        let updated_at = Utc::now();

        let row = sqlx::query_as::<_, DbSkill>(
            r#"
            UPDATE skills
            SET
                name = COALESCE(?, name),
                category = COALESCE(?, category),
                updated_at = ?
            WHERE id = ?
            RETURNING id, name, category, created_at, updated_at
            "#,
        )
        .bind(changes.name.as_deref())
        .bind(changes.category.map(|c| c.as_str()))
        .bind(updated_at)
        .bind(&self.id)
        .fetch_optional(pool)
        .await?;

        debug!(
            entity = "skill",
            id = %self.id,
            found = row.is_some(),
            name_set = changes.name.is_some(),
            category_set = changes.category.is_some(),
            "db patch applied"
        );

        row.ok_or_else(|| FolioError::not_found("skill", self.id.clone()))
    }
}

#[async_trait]
impl DbPatchable for AboutPatch {
    type Row = DbAbout;

    async fn apply_patch(&self, pool: &SqlitePool) -> Result<DbAbout, FolioError> {
        let updated_at = Utc::now();

        let row = sqlx::query_as::<_, DbAbout>(
            r#"
            UPDATE about
            SET
                content = COALESCE(?, content),
                updated_at = ?
            WHERE id = ?
            RETURNING id, content, created_at, updated_at
            "#,
        )
        .bind(self.content.as_deref())
        .bind(updated_at)
        .bind(&self.id)
        .fetch_optional(pool)
        .await?;

        debug!(
            entity = "about",
            id = %self.id,
            found = row.is_some(),
            content_set = self.content.is_some(),
            "db patch applied"
        );

        row.ok_or_else(|| FolioError::not_found("about", self.id.clone()))
    }
}
