//! Product API handlers

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::api::convert::product_to_wire;
use crate::core::ServerState;
use crate::db::repository::ProductFilter;
use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::models::Product;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub featured: Option<String>,
    pub search: Option<String>,
}

/// GET /api/products - list active products, newest first
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ProductQuery>,
) -> AppResult<Json<ApiResponse<Vec<Product>>>> {
    let filter = ProductFilter {
        category: query.category,
        featured: query.featured.as_deref() == Some("true"),
        search: query.search.filter(|s| !s.is_empty()),
    };

    let rows = state.products.find_all(&filter).await?;
    let products = rows.into_iter().map(product_to_wire).collect();
    Ok(Json(ApiResponse::success(products)))
}

/// GET /api/products/{slug} - single product by slug
pub async fn get_by_slug(
    State(state): State<ServerState>,
    Path(slug): Path<String>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let row = state
        .products
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::with_message(ErrorCode::ProductNotFound, "Product not found"))?;
    Ok(Json(ApiResponse::success(product_to_wire(row))))
}
