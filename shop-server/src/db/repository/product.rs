//! Product repository

use super::{BaseRepository, RepoResult};
use crate::db::models::ProductRow;
use surrealdb::engine::local::Db;
use surrealdb::Surreal;

/// Catalog listing filters
///
/// `category` of `"all"` means no category filter; `search` is a
/// case-insensitive substring match over title or description.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub featured: bool,
    pub search: Option<String>,
}

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Active products matching the filter, newest first
    pub async fn find_all(&self, filter: &ProductFilter) -> RepoResult<Vec<ProductRow>> {
        let mut sql = String::from("SELECT * FROM product WHERE is_active = true");

        let category = filter
            .category
            .as_deref()
            .filter(|c| !c.is_empty() && *c != "all");
        if category.is_some() {
            sql.push_str(" AND category = $category");
        }
        if filter.featured {
            sql.push_str(" AND featured = true");
        }
        if filter.search.is_some() {
            sql.push_str(
                " AND (string::contains(string::lowercase(title), $search) \
                 OR string::contains(string::lowercase(description), $search))",
            );
        }
        sql.push_str(" ORDER BY created_at DESC");

        let mut query = self.base.db().query(sql);
        if let Some(category) = category {
            query = query.bind(("category", category.to_string()));
        }
        if let Some(search) = &filter.search {
            query = query.bind(("search", search.to_lowercase()));
        }

        let rows: Vec<ProductRow> = query.await?.take(0)?;
        Ok(rows)
    }

    /// Find one active product by slug
    pub async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<ProductRow>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM product WHERE slug = $slug AND is_active = true LIMIT 1")
            .bind(("slug", slug.to_string()))
            .await?;
        let rows: Vec<ProductRow> = result.take(0)?;
        Ok(rows.into_iter().next())
    }
}
