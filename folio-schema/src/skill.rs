use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Fixed set of labels a skill can be filed under.
///
/// Variants are declared in the order their labels sort, so `Ord` matches the
/// `ORDER BY category ASC` used when listing skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    Backend,
    #[serde(alias = "Banco de Dados")]
    Database,
    DevOps,
    Frontend,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Backend,
        SkillCategory::Database,
        SkillCategory::DevOps,
        SkillCategory::Frontend,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SkillCategory::Backend => "Backend",
            SkillCategory::Database => "Database",
            SkillCategory::DevOps => "DevOps",
            SkillCategory::Frontend => "Frontend",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown skill category: {0:?}")]
pub struct UnknownSkillCategory(pub String);

impl FromStr for SkillCategory {
    type Err = UnknownSkillCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Backend" => Ok(SkillCategory::Backend),
            "Database" | "Banco de Dados" => Ok(SkillCategory::Database),
            "DevOps" => Ok(SkillCategory::DevOps),
            "Frontend" => Ok(SkillCategory::Frontend),
            other => Err(UnknownSkillCategory(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category: SkillCategory,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload of `POST /api/skills`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSkill {
    pub name: String,
    pub category: SkillCategory,
}

/// `None` => do not change; `Some(v)` => update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillChanges {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<SkillCategory>,
}

/// Payload of `PUT /api/skills`; the id travels in the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillUpdateRequest {
    pub id: String,
    #[serde(flatten)]
    pub changes: SkillChanges,
}

/// Payload of `DELETE /api/skills`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillDeleteRequest {
    pub id: String,
}
