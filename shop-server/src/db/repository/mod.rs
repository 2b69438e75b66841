//! Repository module
//!
//! One repository per table, all sharing the embedded database handle.

pub mod category;
pub mod order;
pub mod product;
pub mod setting;

pub use category::CategoryRepository;
pub use order::OrderRepository;
pub use product::{ProductFilter, ProductRepository};
pub use setting::SettingRepository;

use surrealdb::engine::local::Db;
use surrealdb::Surreal;
use thiserror::Error;

use shared::error::{AppError, ErrorCode};

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Generic mapping to the API error envelope; call sites that need a more
/// specific code (e.g. duplicate order numbers) match on the variant first.
impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::AlreadyExists, msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

/// Strip a "table:" prefix from an id, if present
///
/// Lookups accept both the full "table:key" form the API returns and the
/// bare record key.
pub(crate) fn strip_table_prefix<'a>(table: &str, id: &'a str) -> &'a str {
    id.strip_prefix(table)
        .and_then(|rest| rest.strip_prefix(':'))
        .unwrap_or(id)
}
