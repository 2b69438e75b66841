//! Bank slip upload handler
//!
//! Accepts one multipart file (JPEG, PNG or PDF, at most 20MB) as proof
//! of payment for bank transfer orders and returns a dereferenceable URL
//! the checkout submits as `bankSlipUrl`.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;

use crate::core::ServerState;
use crate::utils::time::now_millis;
use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};

/// Maximum file size (20MB)
pub const MAX_FILE_SIZE: usize = 20 * 1024 * 1024;

/// Accepted MIME types with their stored extensions
const ALLOWED_TYPES: &[(&str, &str)] = &[
    ("image/jpeg", "jpg"),
    ("image/jpg", "jpg"),
    ("image/png", "png"),
    ("application/pdf", "pdf"),
];

/// Multipart field carrying the file
const FIELD_NAME: &str = "bankSlip";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub url: String,
    pub filename: String,
    pub size: usize,
    pub content_type: String,
}

/// POST /api/upload/bank-slip
pub async fn upload_bank_slip(
    State(state): State<ServerState>,
    mut multipart: Multipart,
) -> AppResult<Json<ApiResponse<UploadResponse>>> {
    let mut file: Option<(Vec<u8>, String)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Invalid multipart request: {}", e)))?
    {
        if field.name() == Some(FIELD_NAME) {
            let content_type = field.content_type().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::validation(format!("Multipart error: {}", e)))?;
            file = Some((data.to_vec(), content_type));
            break;
        }
    }

    let (data, content_type) = file.ok_or_else(|| {
        AppError::with_message(ErrorCode::NoFileProvided, "No bank slip file provided")
    })?;

    if data.len() > MAX_FILE_SIZE {
        return Err(AppError::with_message(
            ErrorCode::FileTooLarge,
            "File size exceeds 20MB limit",
        ));
    }

    let ext = ALLOWED_TYPES
        .iter()
        .find(|(mime, _)| *mime == content_type)
        .map(|(_, ext)| *ext)
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::UnsupportedFileType,
                "Invalid file type. Only JPEG, PNG, and PDF files are allowed.",
            )
        })?;

    let dir = state.bank_slips_dir();
    tokio::fs::create_dir_all(&dir).await.map_err(|e| {
        AppError::with_message(
            ErrorCode::FileStorageFailed,
            format!("Failed to create upload directory: {}", e),
        )
    })?;

    let filename = format!("bankslip_{}.{}", now_millis(), ext);
    let size = data.len();
    tokio::fs::write(dir.join(&filename), data).await.map_err(|e| {
        AppError::with_message(
            ErrorCode::FileStorageFailed,
            format!("Failed to store file: {}", e),
        )
    })?;

    let url = format!(
        "{}/api/files/bank-slips/{}",
        state.config.public_base_url, filename
    );
    tracing::info!(filename = %filename, size, content_type = %content_type, "Bank slip stored");

    Ok(Json(ApiResponse::success(UploadResponse {
        url,
        filename,
        size,
        content_type,
    })))
}
