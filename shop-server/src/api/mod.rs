//! API routing
//!
//! One module per resource (`mod.rs` router + `handler.rs` handlers),
//! merged into the application router here.
//!
//! - [`health`] — liveness probe
//! - [`orders`] — order creation and lookup
//! - [`products`] — catalog reads
//! - [`categories`] — category reads
//! - [`settings`] — named configuration (delivery fee lives here)
//! - [`upload`] — bank slip upload
//! - [`files`] — stored bank slip serving

pub mod convert;

pub mod categories;
pub mod files;
pub mod health;
pub mod orders;
pub mod products;
pub mod settings;
pub mod upload;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::Router;
use std::time::Instant;
use tower_http::cors::CorsLayer;

use crate::core::ServerState;

/// Build the full application router
pub fn build_app(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(orders::router())
        .merge(products::router())
        .merge(categories::router())
        .merge(settings::router())
        .merge(upload::router())
        .merge(files::router())
        .layer(middleware::from_fn(log_request))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Access log middleware
async fn log_request(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    tracing::info!(
        target: "http_access",
        method = %method,
        uri = %uri,
        status = response.status().as_u16(),
        latency_ms = start.elapsed().as_millis() as u64,
        "request"
    );
    response
}
