use std::path::PathBuf;
use std::sync::Arc;
use surrealdb::engine::local::Db;
use surrealdb::Surreal;

use crate::core::{Config, Result, ServerError};
use crate::db::repository::{
    CategoryRepository, OrderRepository, ProductRepository, SettingRepository,
};
use crate::db::DbService;
use crate::services::notify::{BrevoNotifier, NoopNotifier, Notifier};

/// Shared server state — configuration, database handle, repositories and
/// the order confirmation notifier
///
/// Cloning is shallow: repositories share the embedded database handle and
/// the notifier is held behind an `Arc`.
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
    pub orders: OrderRepository,
    pub products: ProductRepository,
    pub categories: CategoryRepository,
    pub settings: SettingRepository,
    /// Order confirmation dispatch seam
    pub notifier: Arc<dyn Notifier>,
}

impl ServerState {
    /// Assemble state around an already-opened database
    ///
    /// Tests use this with the in-memory engine and a stub notifier.
    pub fn new(config: Config, db: Surreal<Db>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            orders: OrderRepository::new(db.clone()),
            products: ProductRepository::new(db.clone()),
            categories: CategoryRepository::new(db.clone()),
            settings: SettingRepository::new(db.clone()),
            config,
            db,
            notifier,
        }
    }

    /// Initialize production state
    ///
    /// Creates the work directory layout, opens the RocksDB-backed database
    /// at `{work_dir}/database/storefront.db` and wires the notification
    /// provider (disabled when no API key is configured).
    pub async fn initialize(config: &Config) -> Result<Self> {
        config.ensure_work_dir_structure()?;

        let db_path = config.database_dir().join("storefront.db");
        let db_service = DbService::open(&db_path.to_string_lossy())
            .await
            .map_err(|e| ServerError::Database(e.to_string()))?;

        let notifier: Arc<dyn Notifier> = if config.brevo_api_key.is_empty() {
            tracing::warn!("BREVO_API_KEY not set, order confirmations are disabled");
            Arc::new(NoopNotifier)
        } else {
            Arc::new(BrevoNotifier::new(config))
        };

        Ok(Self::new(config.clone(), db_service.db, notifier))
    }

    pub fn work_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.work_dir)
    }

    pub fn bank_slips_dir(&self) -> PathBuf {
        self.config.bank_slips_dir()
    }
}
