//! Category row model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    /// Parent category reference as a "category:key" string
    pub parent: Option<String>,
    pub is_active: bool,
    /// Epoch milliseconds
    pub created_at: i64,
}
