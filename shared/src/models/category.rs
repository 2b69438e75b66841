//! Category wire model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category as returned by the catalog API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    /// Parent category reference (String ID)
    pub parent: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
