use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The single "about me" content block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload of `POST /api/about`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAbout {
    pub content: String,
}

/// Payload of `PUT /api/about`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutUpdateRequest {
    pub id: String,
    #[serde(default)]
    pub content: Option<String>,
}
