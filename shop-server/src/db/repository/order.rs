//! Order repository
//!
//! Orders are created once and read back by order number, internal id or
//! customer email. The unique index on `order_no` makes the duplicate
//! check and the write one atomic step; no application-level locking.

use super::{strip_table_prefix, BaseRepository, RepoError, RepoResult};
use crate::db::models::OrderRecord;
use surrealdb::engine::local::Db;
use surrealdb::Surreal;

const TABLE: &str = "order_record";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Persist a new order
    ///
    /// A unique-index violation on `order_no` surfaces as
    /// [`RepoError::Duplicate`], distinct from generic storage failure.
    pub async fn create(&self, record: OrderRecord) -> RepoResult<OrderRecord> {
        let result: Result<Option<OrderRecord>, surrealdb::Error> =
            self.base.db().create(TABLE).content(record).await;

        match result {
            Ok(Some(created)) => Ok(created),
            Ok(None) => Err(RepoError::Database("Failed to create order".to_string())),
            Err(e) => {
                let msg = e.to_string().to_lowercase();
                if msg.contains("already contains")
                    || msg.contains("unique")
                    || msg.contains("duplicate")
                {
                    Err(RepoError::Duplicate("Order ID already exists".to_string()))
                } else {
                    Err(RepoError::Database(e.to_string()))
                }
            }
        }
    }

    /// Find one order by its externally-visible order number
    pub async fn find_by_order_no(&self, order_no: &str) -> RepoResult<Option<OrderRecord>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM order_record WHERE order_no = $order_no LIMIT 1")
            .bind(("order_no", order_no.to_string()))
            .await?;
        let records: Vec<OrderRecord> = result.take(0)?;
        Ok(records.into_iter().next())
    }

    /// Find one order by internal record id ("order_record:key" or bare key)
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<OrderRecord>> {
        let key = strip_table_prefix(TABLE, id);
        let record: Option<OrderRecord> = self.base.db().select((TABLE, key)).await?;
        Ok(record)
    }

    /// All orders for a customer email, newest first
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Vec<OrderRecord>> {
        let records: Vec<OrderRecord> = self
            .base
            .db()
            .query("SELECT * FROM order_record WHERE email = $email ORDER BY created_at DESC")
            .bind(("email", email.to_string()))
            .await?
            .take(0)?;
        Ok(records)
    }
}
