//! Cart store
//!
//! The authoritative cart state for one browsing session. All mutation runs
//! on the session's own event loop, so the store needs no locking; every
//! mutation is written through the injected [`CartStorage`] fire-and-forget
//! (persistence failures are logged, never propagated).

use crate::fee::{FeeSource, FALLBACK_DELIVERY_FEE};
use crate::model::{CartItem, CartLine, CartState};
use crate::storage::CartStorage;

pub struct CartStore<S: CartStorage> {
    state: CartState,
    storage: S,
}

impl<S: CartStorage> CartStore<S> {
    /// Restore the cart from storage, starting empty when nothing was
    /// saved yet or the saved state cannot be read
    pub fn load(storage: S) -> Self {
        let state = match storage.load() {
            Ok(Some(state)) => state,
            Ok(None) => CartState::default(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load cart state, starting empty");
                CartState::default()
            }
        };
        Self { state, storage }
    }

    fn persist(&self) {
        if let Err(e) = self.storage.save(&self.state) {
            tracing::warn!(error = %e, "Failed to persist cart state");
        }
    }

    /// Add an item to the cart
    ///
    /// A line with the same `(product_id, variant_id)` identity absorbs the
    /// quantity instead of creating a duplicate. Non-positive quantities are
    /// treated as 1. The cart panel surfaces after every add.
    pub fn add_item(&mut self, item: CartItem, quantity: i64) {
        let quantity = quantity.max(1) as u32;
        match self
            .state
            .lines
            .iter_mut()
            .find(|line| line.matches(&item.product_id, item.variant_id.as_deref()))
        {
            Some(line) => line.quantity += quantity,
            None => self.state.lines.push(item.into_line(quantity)),
        }
        self.state.is_open = true;
        self.persist();
    }

    /// Remove the line with the exact identity pair; no-op when absent
    pub fn remove_item(&mut self, product_id: &str, variant_id: Option<&str>) {
        self.state
            .lines
            .retain(|line| !line.matches(product_id, variant_id));
        self.persist();
    }

    /// Set a line's quantity; `quantity <= 0` removes the line
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64, variant_id: Option<&str>) {
        if quantity <= 0 {
            self.remove_item(product_id, variant_id);
            return;
        }
        if let Some(line) = self
            .state
            .lines
            .iter_mut()
            .find(|line| line.matches(product_id, variant_id))
        {
            line.quantity = quantity as u32;
        }
        self.persist();
    }

    /// Empty the cart; the cached fee and visibility flag are untouched
    pub fn clear_cart(&mut self) {
        self.state.lines.clear();
        self.persist();
    }

    // Visibility is transient UI state, never persisted
    pub fn open_cart(&mut self) {
        self.state.is_open = true;
    }

    pub fn close_cart(&mut self) {
        self.state.is_open = false;
    }

    pub fn toggle_cart(&mut self) {
        self.state.is_open = !self.state.is_open;
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    /// Refresh the cached delivery fee from the given source
    ///
    /// Every failure replaces the cache with the fallback fee; the previous
    /// value is never kept.
    pub async fn fetch_delivery_fee(&mut self, source: &dyn FeeSource) {
        self.state.delivery_fee = match source.delivery_fee().await {
            Ok(fee) => fee,
            Err(e) => {
                tracing::warn!(error = %e, "Delivery fee lookup failed, using fallback");
                FALLBACK_DELIVERY_FEE
            }
        };
        self.persist();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.state.lines
    }

    pub fn delivery_fee(&self) -> i64 {
        self.state.delivery_fee
    }

    /// Sum of quantities across all lines
    pub fn item_count(&self) -> u32 {
        self.state.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of `price * quantity` over all lines, computed fresh every call
    pub fn subtotal(&self) -> i64 {
        self.state
            .lines
            .iter()
            .map(|line| line.price * line.quantity as i64)
            .sum()
    }

    /// Subtotal plus the delivery fee; an empty cart owes nothing
    pub fn total(&self) -> i64 {
        if self.state.lines.is_empty() {
            0
        } else {
            self.subtotal() + self.state.delivery_fee
        }
    }
}
