//! Settings API handlers

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::api::convert::setting_to_wire;
use crate::core::ServerState;
use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::models::{Setting, SettingLookup};

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct SettingQuery {
    pub name: Option<String>,
}

/// GET /api/settings[?name=X] - all settings, or a single one by name
pub async fn lookup(
    State(state): State<ServerState>,
    Query(query): Query<SettingQuery>,
) -> AppResult<Json<ApiResponse<SettingLookup>>> {
    match query.name.as_deref() {
        Some(name) => {
            let row = state.settings.find_by_name(name).await?.ok_or_else(|| {
                AppError::with_message(ErrorCode::SettingNotFound, "Setting not found")
            })?;
            Ok(Json(ApiResponse::success(SettingLookup::One(
                setting_to_wire(row),
            ))))
        }
        None => {
            let rows = state.settings.find_all().await?;
            let settings = rows.into_iter().map(setting_to_wire).collect();
            Ok(Json(ApiResponse::success(SettingLookup::Many(settings))))
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SettingUpsert {
    pub value: serde_json::Value,
}

/// PUT /api/settings/{name} - create or replace a named setting
pub async fn upsert(
    State(state): State<ServerState>,
    Path(name): Path<String>,
    Json(payload): Json<SettingUpsert>,
) -> AppResult<Json<ApiResponse<Setting>>> {
    let row = state.settings.upsert(&name, payload.value).await?;
    tracing::info!(name = %row.name, "Setting updated");
    Ok(Json(ApiResponse::success(setting_to_wire(row))))
}
