//! Data models
//!
//! Wire shapes shared between shop-server and shop-cart (via API).
//! All JSON fields are camelCase; amounts are i64 minor currency units.

pub mod category;
pub mod order;
pub mod product;
pub mod setting;

// Re-exports
pub use category::*;
pub use order::*;
pub use product::*;
pub use setting::*;
