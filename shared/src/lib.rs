//! Shared types for the storefront
//!
//! Common types used across shop-server and shop-cart: wire models,
//! error types, and the unified API response structure.

pub mod error;
pub mod models;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{
    Category, Order, OrderCreate, OrderItem, OrderItemInput, OrderLookup, OrderStatus,
    OrderSummary, PaymentMethod, Product, ProductVariant, Setting, SettingLookup,
    DELIVERY_FEE_SETTING,
};
