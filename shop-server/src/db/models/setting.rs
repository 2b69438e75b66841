//! Setting row model

use serde::{Deserialize, Serialize};
use serde_json::Value;
use surrealdb::RecordId;

/// Named configuration value, free-form JSON interpreted per name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    pub value: Value,
}
