use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A professional experience entry as served by `/api/experiences`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    /// Free text, e.g. "2021 - present".
    pub period: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload of `POST /api/experiences`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewExperience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

/// Payload of `PUT /api/experiences/{id}`.
///
/// `None` => do not change; `Some(v)` => update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceChanges {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
