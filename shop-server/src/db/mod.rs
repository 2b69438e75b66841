//! Database module
//!
//! Embedded SurrealDB storage. The schema is a handful of DEFINE
//! statements run at startup; the unique index on `order_record.order_no`
//! is what makes order creation atomic with respect to duplicates.

pub mod models;
pub mod repository;

use surrealdb::engine::local::{Db, RocksDb};
use surrealdb::Surreal;

use repository::{RepoError, RepoResult};

const NAMESPACE: &str = "storefront";
const DATABASE: &str = "storefront";

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the RocksDB-backed database at the given path
    pub async fn open(db_path: &str) -> RepoResult<Self> {
        let db = Surreal::new::<RocksDb>(db_path).await?;
        Self::attach(db).await
    }

    /// Attach to an already-created engine (tests use `kv-mem`) and apply
    /// the schema
    pub async fn attach(db: Surreal<Db>) -> RepoResult<Self> {
        db.use_ns(NAMESPACE).use_db(DATABASE).await?;
        define_schema(&db).await?;
        tracing::info!("Database ready (ns={}, db={})", NAMESPACE, DATABASE);
        Ok(Self { db })
    }
}

async fn define_schema(db: &Surreal<Db>) -> RepoResult<()> {
    db.query(
        r#"
        DEFINE TABLE IF NOT EXISTS order_record SCHEMALESS;
        DEFINE INDEX IF NOT EXISTS idx_order_no ON order_record FIELDS order_no UNIQUE;
        DEFINE INDEX IF NOT EXISTS idx_order_email ON order_record FIELDS email;

        DEFINE TABLE IF NOT EXISTS product SCHEMALESS;
        DEFINE INDEX IF NOT EXISTS idx_product_slug ON product FIELDS slug UNIQUE;

        DEFINE TABLE IF NOT EXISTS category SCHEMALESS;

        DEFINE TABLE IF NOT EXISTS setting SCHEMALESS;
        DEFINE INDEX IF NOT EXISTS idx_setting_name ON setting FIELDS name UNIQUE;
        "#,
    )
    .await?
    .check()
    .map_err(RepoError::from)?;
    Ok(())
}
