//! Bank slip upload module

mod handler;

pub use handler::MAX_FILE_SIZE;

use axum::extract::DefaultBodyLimit;
use axum::{routing::post, Router};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    // The transport limit sits above the validation bound so an oversized
    // file reaches the size check instead of dying as a 413
    Router::new().nest(
        "/api/upload",
        Router::new()
            .route("/bank-slip", post(handler::upload_bank_slip))
            .layer(DefaultBodyLimit::max(2 * MAX_FILE_SIZE)),
    )
}
