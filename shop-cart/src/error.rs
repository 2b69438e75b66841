//! Cart error types

use thiserror::Error;

/// Cart error type
#[derive(Debug, Error)]
pub enum CartError {
    /// Persistence read/write failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Cart state could not be (de)serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Delivery fee lookup returned an unusable response
    #[error("Fee lookup failed: {0}")]
    FeeLookup(String),

    /// The server rejected the order submission
    #[error("Checkout rejected ({code}): {message}")]
    Checkout { code: u16, message: String },
}

/// Result type for cart operations
pub type CartResult<T> = Result<T, CartError>;
