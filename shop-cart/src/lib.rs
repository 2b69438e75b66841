//! Client-side shopping cart for the storefront
//!
//! Holds the cart state for one browsing session and talks to the
//! shop-server API at checkout:
//!
//! - [`CartStore`]: the cart reducer (merge-on-identity, delete-on-zero,
//!   derived subtotal/total) with persistence after every mutation
//! - [`CartStorage`]: pluggable persistence ([`JsonFileStorage`] for real
//!   use, [`MemoryStorage`] for tests)
//! - [`FeeSource`]: delivery fee lookup with a fixed fallback on failure
//! - [`CheckoutClient`]: builds and submits the order creation request

pub mod checkout;
pub mod error;
pub mod fee;
pub mod model;
pub mod storage;
pub mod store;

pub use checkout::{CheckoutClient, CustomerDetails};
pub use error::{CartError, CartResult};
pub use fee::{FeeSource, HttpFeeSource, FALLBACK_DELIVERY_FEE};
pub use model::{CartItem, CartLine, CartState};
pub use storage::{CartStorage, JsonFileStorage, MemoryStorage};
pub use store::CartStore;
