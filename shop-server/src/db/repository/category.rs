//! Category repository

use super::{BaseRepository, RepoResult};
use crate::db::models::CategoryRow;
use surrealdb::engine::local::Db;
use surrealdb::Surreal;

#[derive(Clone)]
pub struct CategoryRepository {
    base: BaseRepository,
}

impl CategoryRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All active categories sorted by name
    pub async fn find_all(&self) -> RepoResult<Vec<CategoryRow>> {
        let rows: Vec<CategoryRow> = self
            .base
            .db()
            .query("SELECT * FROM category WHERE is_active = true ORDER BY name ASC")
            .await?
            .take(0)?;
        Ok(rows)
    }
}
