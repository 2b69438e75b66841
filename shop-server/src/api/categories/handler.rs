//! Category API handlers

use axum::extract::State;
use axum::Json;

use crate::api::convert::category_to_wire;
use crate::core::ServerState;
use shared::error::{ApiResponse, AppResult};
use shared::models::Category;

/// GET /api/categories - all active categories sorted by name
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<ApiResponse<Vec<Category>>>> {
    let rows = state.categories.find_all().await?;
    let categories = rows.into_iter().map(category_to_wire).collect();
    Ok(Json(ApiResponse::success(categories)))
}
