//! Setting repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::SettingRow;
use serde_json::Value;
use surrealdb::engine::local::Db;
use surrealdb::Surreal;

const TABLE: &str = "setting";

#[derive(Clone)]
pub struct SettingRepository {
    base: BaseRepository,
}

impl SettingRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All settings sorted by name
    pub async fn find_all(&self) -> RepoResult<Vec<SettingRow>> {
        let rows: Vec<SettingRow> = self
            .base
            .db()
            .query("SELECT * FROM setting ORDER BY name ASC")
            .await?
            .take(0)?;
        Ok(rows)
    }

    /// Find one setting by its unique name
    pub async fn find_by_name(&self, name: &str) -> RepoResult<Option<SettingRow>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM setting WHERE name = $name LIMIT 1")
            .bind(("name", name.to_string()))
            .await?;
        let rows: Vec<SettingRow> = result.take(0)?;
        Ok(rows.into_iter().next())
    }

    /// Create or replace the value under a name
    pub async fn upsert(&self, name: &str, value: Value) -> RepoResult<SettingRow> {
        if let Some(existing) = self.find_by_name(name).await? {
            let id = existing
                .id
                .ok_or_else(|| RepoError::Database("Setting row without id".to_string()))?;
            self.base
                .db()
                .query("UPDATE $id SET value = $value")
                .bind(("id", id))
                .bind(("value", value))
                .await?
                .check()?;
            self.find_by_name(name)
                .await?
                .ok_or_else(|| RepoError::Database("Setting vanished during update".to_string()))
        } else {
            let row = SettingRow {
                id: None,
                name: name.to_string(),
                value,
            };
            let created: Option<SettingRow> = self.base.db().create(TABLE).content(row).await?;
            created.ok_or_else(|| RepoError::Database("Failed to create setting".to_string()))
        }
    }
}
