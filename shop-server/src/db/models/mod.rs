//! Database row models
//!
//! Rows carry `Option<RecordId>` ids (absent until created) and i64
//! epoch-millisecond timestamps so `ORDER BY created_at` compares
//! numerically. The API layer converts rows to the shared wire models in
//! `api::convert`.

pub mod category;
pub mod order;
pub mod product;
pub mod setting;

pub use category::CategoryRow;
pub use order::OrderRecord;
pub use product::{ProductRow, VariantRow};
pub use setting::SettingRow;
