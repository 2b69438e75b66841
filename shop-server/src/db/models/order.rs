//! Order row model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::models::{OrderItem, OrderStatus, PaymentMethod};

/// Persisted order
///
/// `order_no` is the externally-visible, client-assigned identifier; the
/// unique index on it rejects duplicate creations. `products` is a frozen
/// snapshot of the submitted cart lines, and the amounts are stored exactly
/// as submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub order_no: String,

    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub province: String,
    pub district: String,
    pub notes: String,

    pub products: Vec<OrderItem>,
    /// Minor currency units, trusted from the submission
    pub subtotal: i64,
    pub delivery_fee: i64,
    pub total: i64,

    pub payment_method: PaymentMethod,
    pub bank_slip_url: String,

    pub status: OrderStatus,
    pub paid: bool,
    pub tracking_number: String,

    pub order_date: DateTime<Utc>,
    /// Epoch milliseconds, drives newest-first ordering
    pub created_at: i64,
}
