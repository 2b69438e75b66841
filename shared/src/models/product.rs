//! Product wire models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product variant (size, colour, pack, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    pub id: String,
    pub name: String,
    /// Price in minor currency units
    pub price: i64,
    pub stock: i64,
    #[serde(default)]
    pub sku: String,
    pub is_active: bool,
}

/// Product as returned by the catalog API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    /// Base price in minor currency units
    pub price: i64,
    #[serde(default)]
    pub images: Vec<String>,
    /// Category reference (String ID)
    pub category: Option<String>,
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
    pub has_variants: bool,
    pub stock: i64,
    pub is_active: bool,
    pub featured: bool,
    /// Computed: any variant in stock, or base stock positive
    pub in_stock: bool,
    pub created_at: DateTime<Utc>,
}
