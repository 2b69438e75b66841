//! Cart state model
//!
//! A cart line is unique per `(product_id, variant_id)` pair. A missing
//! variant id is a distinct identity from any present variant id of the
//! same product.

use serde::{Deserialize, Serialize};

use crate::fee::FALLBACK_DELIVERY_FEE;

/// One entry in the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: String,
    pub variant_id: Option<String>,
    pub title: String,
    pub image: String,
    pub slug: String,
    /// Unit price in minor currency units, frozen at add time
    pub price: i64,
    pub quantity: u32,
}

impl CartLine {
    /// Whether this line has the given identity pair
    pub fn matches(&self, product_id: &str, variant_id: Option<&str>) -> bool {
        self.product_id == product_id && self.variant_id.as_deref() == variant_id
    }
}

/// Line descriptor without a quantity, as handed to `add_item`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CartItem {
    pub product_id: String,
    pub variant_id: Option<String>,
    pub title: String,
    pub image: String,
    pub slug: String,
    /// Unit price in minor currency units
    pub price: i64,
}

impl CartItem {
    pub fn into_line(self, quantity: u32) -> CartLine {
        CartLine {
            product_id: self.product_id,
            variant_id: self.variant_id,
            title: self.title,
            image: self.image,
            slug: self.slug,
            price: self.price,
            quantity,
        }
    }
}

/// Serializable cart state
///
/// `is_open` is transient UI state and is skipped during serialization; a
/// restored cart always starts closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    pub lines: Vec<CartLine>,
    #[serde(skip)]
    pub is_open: bool,
    /// Cached delivery fee in minor currency units
    pub delivery_fee: i64,
}

impl Default for CartState {
    fn default() -> Self {
        Self {
            lines: Vec::new(),
            is_open: false,
            delivery_fee: FALLBACK_DELIVERY_FEE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_line(product_id: &str, variant_id: Option<&str>) -> CartLine {
        CartLine {
            product_id: product_id.to_string(),
            variant_id: variant_id.map(String::from),
            title: "Test".to_string(),
            image: String::new(),
            slug: "test".to_string(),
            price: 1000,
            quantity: 1,
        }
    }

    #[test]
    fn test_identity_pair_matching() {
        let line = create_test_line("p1", None);
        assert!(line.matches("p1", None));
        assert!(!line.matches("p1", Some("v1")));
        assert!(!line.matches("p2", None));

        let line = create_test_line("p1", Some("v1"));
        assert!(line.matches("p1", Some("v1")));
        // No variant is a distinct identity from any variant
        assert!(!line.matches("p1", None));
        assert!(!line.matches("p1", Some("v2")));
    }

    #[test]
    fn test_is_open_not_serialized() {
        let mut state = CartState::default();
        state.is_open = true;
        state.lines.push(create_test_line("p1", None));

        let json = serde_json::to_string(&state).unwrap();
        assert!(!json.contains("is_open"));

        let restored: CartState = serde_json::from_str(&json).unwrap();
        assert!(!restored.is_open);
        assert_eq!(restored.lines, state.lines);
    }

    #[test]
    fn test_default_state_uses_fallback_fee() {
        let state = CartState::default();
        assert!(state.lines.is_empty());
        assert!(!state.is_open);
        assert_eq!(state.delivery_fee, FALLBACK_DELIVERY_FEE);
    }
}
