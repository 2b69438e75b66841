//! Stored bank slip serving

use axum::extract::{Path, State};
use axum::response::IntoResponse;

use crate::core::ServerState;
use shared::error::{AppError, AppResult, ErrorCode};

/// GET /api/files/bank-slips/{filename}
///
/// Serves a stored bank slip with a guessed content type. Names that
/// could escape the upload directory are rejected before touching the
/// filesystem.
pub async fn serve_bank_slip(
    State(state): State<ServerState>,
    Path(filename): Path<String>,
) -> AppResult<impl IntoResponse> {
    if filename.contains("..") || filename.contains('/') || filename.contains('\\') {
        return Err(AppError::with_message(
            ErrorCode::InvalidFilename,
            "Invalid filename",
        ));
    }

    let path = state.bank_slips_dir().join(&filename);
    let data = tokio::fs::read(&path)
        .await
        .map_err(|_| AppError::with_message(ErrorCode::NotFound, "File not found"))?;

    let mime = mime_guess::from_path(&path).first_or_octet_stream();
    Ok(([(http::header::CONTENT_TYPE, mime.to_string())], data))
}
