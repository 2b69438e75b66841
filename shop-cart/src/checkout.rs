//! Checkout client
//!
//! Builds the order creation request from the current cart snapshot and
//! submits it to the shop-server orders API. The cart is cleared exactly
//! once, only after the server confirms the order.

use chrono::Utc;
use uuid::Uuid;

use crate::error::{CartError, CartResult};
use crate::storage::CartStorage;
use crate::store::CartStore;
use shared::error::ApiResponse;
use shared::models::{OrderCreate, OrderItemInput, OrderSummary, PaymentMethod};

/// Customer and shipping fields collected by the checkout form
#[derive(Debug, Clone, Default)]
pub struct CustomerDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub province: String,
    pub district: String,
    pub notes: String,
    pub payment_method: PaymentMethod,
    /// URL returned by the bank slip upload, empty for cash on delivery
    pub bank_slip_url: String,
}

pub struct CheckoutClient {
    http: reqwest::Client,
    base_url: String,
}

impl CheckoutClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Generate a client-assigned order number (`ORD-` + UUID fragment)
    pub fn generate_order_no() -> String {
        let uuid = Uuid::new_v4().simple().to_string().to_uppercase();
        format!("ORD-{}", &uuid[..12])
    }

    /// Build the creation request from the cart snapshot
    ///
    /// Amounts come from the cart's derived values; the line metadata is a
    /// frozen copy independent of later catalog changes.
    pub fn build_request<S: CartStorage>(
        cart: &CartStore<S>,
        details: &CustomerDetails,
    ) -> OrderCreate {
        OrderCreate {
            order_id: Self::generate_order_no(),
            first_name: details.first_name.clone(),
            last_name: details.last_name.clone(),
            email: details.email.clone(),
            phone: details.phone.clone(),
            address: details.address.clone(),
            city: details.city.clone(),
            postal_code: details.postal_code.clone(),
            province: details.province.clone(),
            district: details.district.clone(),
            notes: details.notes.clone(),
            items: cart
                .lines()
                .iter()
                .map(|line| OrderItemInput {
                    product_id: line.product_id.clone(),
                    title: line.title.clone(),
                    price: line.price,
                    quantity: line.quantity,
                })
                .collect(),
            subtotal: cart.subtotal(),
            delivery_fee: cart.delivery_fee(),
            total: cart.total(),
            payment_method: details.payment_method.as_str().to_string(),
            bank_slip_url: details.bank_slip_url.clone(),
            order_date: Some(Utc::now()),
        }
    }

    /// Submit a prepared creation request
    pub async fn place_order(&self, request: &OrderCreate) -> CartResult<OrderSummary> {
        let response = self
            .http
            .post(format!("{}/api/orders", self.base_url))
            .json(request)
            .send()
            .await?;

        let body: ApiResponse<OrderSummary> = response.json().await?;
        match body.data {
            Some(summary) if body.code == Some(0) => Ok(summary),
            _ => Err(CartError::Checkout {
                code: body.code.unwrap_or(1),
                message: body.message,
            }),
        }
    }

    /// Place an order from the cart and clear it on success
    ///
    /// The cart is left untouched when the server rejects the submission,
    /// so the customer can fix the form and retry.
    pub async fn checkout<S: CartStorage>(
        &self,
        cart: &mut CartStore<S>,
        details: &CustomerDetails,
    ) -> CartResult<OrderSummary> {
        let request = Self::build_request(cart, details);
        let summary = self.place_order(&request).await?;
        cart.clear_cart();
        Ok(summary)
    }
}
