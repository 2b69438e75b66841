//! Setting wire model

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name of the setting holding the delivery fee in minor currency units
pub const DELIVERY_FEE_SETTING: &str = "delivery_fee";

/// Named setting as returned by the settings API
///
/// `value` is free-form JSON; callers interpret it per setting name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Setting {
    pub id: String,
    pub name: String,
    pub value: Value,
}

/// Setting lookup result
///
/// Lookups by name return a single setting; lookups without a name return
/// all settings as an array.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingLookup {
    One(Setting),
    Many(Vec<Setting>),
}
