//! Stored file serving module

mod handler;

use axum::{routing::get, Router};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/api/files/bank-slips/{filename}",
        get(handler::serve_bank_slip),
    )
}
