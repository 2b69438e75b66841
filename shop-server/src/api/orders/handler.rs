//! Order API handlers

use axum::extract::{Query, State};
use axum::Json;
use http::StatusCode;
use serde::Deserialize;

use crate::api::convert::order_to_wire;
use crate::core::ServerState;
use crate::db::models::OrderRecord;
use crate::db::repository::RepoError;
use crate::services::notify;
use crate::utils::time::now_millis;
use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::models::{OrderCreate, OrderItem, OrderLookup, OrderSummary};

/// POST /api/orders - create an order from a checkout submission
///
/// Validation runs fully before any persistence attempt; a duplicate order
/// number surfaces as a conflict, distinct from generic storage failure.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<(StatusCode, Json<ApiResponse<OrderSummary>>)> {
    let method = payload.validate()?;
    let status = method.initial_status();

    // Frozen snapshot of the submitted cart lines. Amounts are stored as
    // submitted; totals are not recomputed server-side.
    let products: Vec<OrderItem> = payload
        .items
        .iter()
        .map(|item| OrderItem {
            id: item.product_id.clone(),
            title: item.title.clone(),
            price: item.price,
            quantity: item.quantity,
        })
        .collect();

    let now = chrono::Utc::now();
    let record = OrderRecord {
        id: None,
        order_no: payload.order_id.clone(),
        first_name: payload.first_name.clone(),
        last_name: payload.last_name.clone(),
        email: payload.email.clone(),
        phone: payload.phone.clone(),
        address: payload.address.clone(),
        city: payload.city.clone(),
        postal_code: payload.postal_code.clone(),
        province: payload.province.clone(),
        district: payload.district.clone(),
        notes: payload.notes.clone(),
        products,
        subtotal: payload.subtotal,
        delivery_fee: payload.delivery_fee,
        total: payload.total,
        payment_method: method,
        bank_slip_url: payload.bank_slip_url.clone(),
        status,
        paid: false,
        tracking_number: String::new(),
        order_date: payload.order_date.unwrap_or(now),
        created_at: now_millis(),
    };

    let created = state.orders.create(record).await.map_err(|e| match e {
        RepoError::Duplicate(_) => {
            AppError::with_message(ErrorCode::OrderIdExists, "Order ID already exists")
        }
        other => other.into(),
    })?;

    tracing::info!(
        order_no = %created.order_no,
        status = %created.status,
        payment_method = %created.payment_method,
        total = created.total,
        "Order created"
    );

    // Confirmation email is fire-and-forget; the response never waits on it
    notify::dispatch_confirmation(state.notifier.clone(), order_to_wire(created.clone()));

    let summary = OrderSummary {
        order_id: created.order_no,
        status: created.status,
        total: created.total,
        payment_method: created.payment_method,
    };
    Ok((StatusCode::CREATED, Json(ApiResponse::success(summary))))
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderQuery {
    pub order_id: Option<String>,
    pub id: Option<String>,
    pub email: Option<String>,
}

/// GET /api/orders?orderId=|id=|email= - look up orders
///
/// Order number and internal id resolve to a single order or 404; email
/// resolves to a possibly-empty list, newest first. No identifier at all
/// is a request-shape error, distinct from not-found.
pub async fn lookup(
    State(state): State<ServerState>,
    Query(query): Query<OrderQuery>,
) -> AppResult<Json<ApiResponse<OrderLookup>>> {
    if let Some(order_no) = query.order_id.as_deref() {
        let record = state
            .orders
            .find_by_order_no(order_no)
            .await?
            .ok_or_else(|| AppError::with_message(ErrorCode::OrderNotFound, "Order not found"))?;
        return Ok(Json(ApiResponse::success(OrderLookup::One(Box::new(
            order_to_wire(record),
        )))));
    }

    if let Some(id) = query.id.as_deref() {
        let record = state
            .orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::with_message(ErrorCode::OrderNotFound, "Order not found"))?;
        return Ok(Json(ApiResponse::success(OrderLookup::One(Box::new(
            order_to_wire(record),
        )))));
    }

    if let Some(email) = query.email.as_deref() {
        let records = state.orders.find_by_email(email).await?;
        let orders = records.into_iter().map(order_to_wire).collect();
        return Ok(Json(ApiResponse::success(OrderLookup::Many(orders))));
    }

    Err(AppError::new(ErrorCode::OrderLookupInvalid))
}
