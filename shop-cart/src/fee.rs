//! Delivery fee lookup
//!
//! The fee is read-mostly configuration served by the settings API. Any
//! failure on the lookup path (network, status, response shape) makes the
//! cart fall back to [`FALLBACK_DELIVERY_FEE`]; the previous cached value
//! is never kept.

use async_trait::async_trait;

use crate::error::{CartError, CartResult};
use shared::error::ApiResponse;
use shared::models::{Setting, DELIVERY_FEE_SETTING};

/// Flat shipping charge used when the fee lookup fails, in minor
/// currency units (500.00)
pub const FALLBACK_DELIVERY_FEE: i64 = 50_000;

/// Delivery fee lookup seam
#[async_trait]
pub trait FeeSource: Send + Sync {
    /// Current delivery fee in minor currency units
    async fn delivery_fee(&self) -> CartResult<i64>;
}

/// Fee source backed by `GET /api/settings?name=delivery_fee`
pub struct HttpFeeSource {
    http: reqwest::Client,
    base_url: String,
}

impl HttpFeeSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl FeeSource for HttpFeeSource {
    async fn delivery_fee(&self) -> CartResult<i64> {
        let url = format!(
            "{}/api/settings?name={}",
            self.base_url, DELIVERY_FEE_SETTING
        );
        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(CartError::FeeLookup(format!(
                "settings API returned {}",
                response.status()
            )));
        }

        let body: ApiResponse<Setting> = response.json().await?;
        let setting = body
            .data
            .ok_or_else(|| CartError::FeeLookup("settings API returned no data".to_string()))?;
        setting.value.as_i64().ok_or_else(|| {
            CartError::FeeLookup(format!("setting '{}' is not numeric", setting.name))
        })
    }
}
