//! Product row model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Embedded product variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantRow {
    pub id: String,
    pub name: String,
    /// Minor currency units
    pub price: i64,
    pub stock: i64,
    #[serde(default)]
    pub sku: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    /// Base price in minor currency units
    pub price: i64,
    #[serde(default)]
    pub images: Vec<String>,
    /// Category reference as a "category:key" string
    pub category: Option<String>,
    #[serde(default)]
    pub variants: Vec<VariantRow>,
    pub has_variants: bool,
    pub stock: i64,
    pub is_active: bool,
    pub featured: bool,
    /// Epoch milliseconds
    pub created_at: i64,
}

impl ProductRow {
    /// Whether any purchasable configuration is in stock
    pub fn in_stock(&self) -> bool {
        if self.has_variants {
            self.variants.iter().any(|v| v.is_active && v.stock > 0)
        } else {
            self.stock > 0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_product() -> ProductRow {
        ProductRow {
            id: None,
            title: "Ceylon Tea".to_string(),
            slug: "ceylon-tea".to_string(),
            description: String::new(),
            price: 120_000,
            images: vec![],
            category: None,
            variants: vec![],
            has_variants: false,
            stock: 0,
            is_active: true,
            featured: false,
            created_at: 0,
        }
    }

    #[test]
    fn test_in_stock_without_variants() {
        let mut product = create_test_product();
        assert!(!product.in_stock());
        product.stock = 3;
        assert!(product.in_stock());
    }

    #[test]
    fn test_in_stock_with_variants_ignores_base_stock() {
        let mut product = create_test_product();
        product.stock = 10;
        product.has_variants = true;
        product.variants = vec![VariantRow {
            id: "v1".to_string(),
            name: "100g".to_string(),
            price: 80_000,
            stock: 0,
            sku: String::new(),
            is_active: true,
        }];
        assert!(!product.in_stock());

        product.variants[0].stock = 2;
        assert!(product.in_stock());

        // Inactive variants do not count
        product.variants[0].is_active = false;
        assert!(!product.in_stock());
    }
}
