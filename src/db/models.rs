use chrono::{DateTime, Utc};
use folio_schema::{About, Experience, SessionUser, Skill, SkillCategory};
use sqlx::FromRow;

use crate::error::FolioError;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct DbExperience {
    pub id: String,
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DbExperience> for Experience {
    fn from(row: DbExperience) -> Self {
        Experience {
            id: row.id,
            title: row.title,
            company: row.company,
            period: row.period,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct DbSkill {
    pub id: String,
    pub name: String,
    /// Stored label; the table CHECK keeps it within `SkillCategory`.
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<DbSkill> for Skill {
    type Error = FolioError;

    fn try_from(row: DbSkill) -> Result<Self, Self::Error> {
        let category: SkillCategory = row
            .category
            .parse()
            .map_err(|e| FolioError::InvalidRow(format!("skill {}: {e}", row.id)))?;
        Ok(Skill {
            id: row.id,
            name: row.name,
            category,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct DbAbout {
    pub id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DbAbout> for About {
    fn from(row: DbAbout) -> Self {
        About {
            id: row.id,
            content: row.content,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Clone, PartialEq, Eq, FromRow)]
pub struct DbUser {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl std::fmt::Debug for DbUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbUser")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("name", &self.name)
            .field("password_hash", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl DbUser {
    pub fn identity(&self) -> SessionUser {
        SessionUser {
            id: self.id.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }
}
