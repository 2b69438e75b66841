//! Order wire models
//!
//! Request and response shapes for the order API. All JSON fields are
//! camelCase to match the storefront frontend.

use crate::error::{AppError, ErrorCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payment method chosen at checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Cash on delivery
    #[default]
    Cod,
    /// Bank transfer with an uploaded payment slip
    BankTransfer,
}

impl PaymentMethod {
    /// Parse a wire value ("cod" or "bank_transfer")
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "cod" => Some(Self::Cod),
            "bank_transfer" => Some(Self::BankTransfer),
            _ => None,
        }
    }

    /// Get the wire string for this method
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cod => "cod",
            Self::BankTransfer => "bank_transfer",
        }
    }

    /// Initial order status assigned at creation for this method
    ///
    /// Cash on delivery starts at `Pending`; bank transfers start at
    /// `PendingVerification` until the uploaded slip is checked.
    pub fn initial_status(&self) -> OrderStatus {
        match self {
            Self::Cod => OrderStatus::Pending,
            Self::BankTransfer => OrderStatus::PendingVerification,
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Order lifecycle status
///
/// The set is closed: clients never submit a status, the server assigns
/// `pending` or `pending_verification` at creation and staff move orders
/// through the remaining states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    PendingVerification,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Get the wire string for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::PendingVerification => "pending_verification",
            Self::Confirmed => "confirmed",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Cart line submitted with an order creation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderItemInput {
    pub product_id: String,
    pub title: String,
    /// Price in minor currency units
    pub price: i64,
    pub quantity: u32,
}

/// Order creation request
///
/// Every field is optional on the wire; [`OrderCreate::validate`] performs
/// the presence checks so that a missing field produces a field-identifying
/// error instead of a deserialization failure. `payment_method` stays a raw
/// string here because the method is only interpreted after the required
/// field checks pass.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderCreate {
    pub order_id: String,
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
    pub items: Vec<OrderItemInput>,
    /// Subtotal in minor currency units
    pub subtotal: i64,
    /// Delivery fee in minor currency units
    pub delivery_fee: i64,
    /// Grand total in minor currency units
    pub total: i64,
    pub payment_method: String,
    pub bank_slip_url: String,
    pub order_date: Option<DateTime<Utc>>,
}

impl OrderCreate {
    /// Validate the request and resolve the payment method
    ///
    /// Checks run in a fixed sequence and stop at the first failure:
    /// 1. Required fields, in declaration order. Empty strings, zero
    ///    amounts and an empty item list all count as missing.
    /// 2. The payment method must be a known wire value.
    /// 3. Bank transfer orders must carry a bank slip URL.
    pub fn validate(&self) -> Result<PaymentMethod, AppError> {
        let required: [(&str, bool); 13] = [
            ("orderId", !self.order_id.is_empty()),
            ("firstName", !self.first_name.is_empty()),
            ("lastName", !self.last_name.is_empty()),
            ("email", !self.email.is_empty()),
            ("phone", !self.phone.is_empty()),
            ("address", !self.address.is_empty()),
            ("city", !self.city.is_empty()),
            ("postalCode", !self.postal_code.is_empty()),
            ("items", !self.items.is_empty()),
            ("subtotal", self.subtotal != 0),
            ("deliveryFee", self.delivery_fee != 0),
            ("total", self.total != 0),
            ("paymentMethod", !self.payment_method.is_empty()),
        ];

        for (field, present) in required {
            if !present {
                return Err(AppError::missing_field(field));
            }
        }

        let method = PaymentMethod::parse(&self.payment_method).ok_or_else(|| {
            AppError::with_message(ErrorCode::PaymentMethodInvalid, "Invalid payment method")
        })?;

        if method == PaymentMethod::BankTransfer && self.bank_slip_url.is_empty() {
            return Err(AppError::with_message(
                ErrorCode::BankSlipRequired,
                "Bank slip URL is required for bank transfer payments",
            ));
        }

        Ok(method)
    }
}

/// Line snapshot stored with a persisted order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    pub title: String,
    /// Price in minor currency units, frozen at creation
    pub price: i64,
    pub quantity: u32,
}

/// Persisted order as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub order_id: String,
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
    pub products: Vec<OrderItem>,
    /// Subtotal in minor currency units
    pub subtotal: i64,
    /// Delivery fee in minor currency units
    pub delivery_fee: i64,
    /// Grand total in minor currency units
    pub total: i64,
    pub payment_method: PaymentMethod,
    pub bank_slip_url: String,
    pub status: OrderStatus,
    pub paid: bool,
    pub tracking_number: String,
    pub order_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Condensed order returned from a successful creation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub order_id: String,
    pub status: OrderStatus,
    /// Grand total in minor currency units
    pub total: i64,
    pub payment_method: PaymentMethod,
}

/// Order lookup result
///
/// Lookups by order number or internal id return a single order; lookups
/// by email return the matching orders newest-first. The JSON shape is an
/// object or an array accordingly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderLookup {
    One(Box<Order>),
    Many(Vec<Order>),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> OrderCreate {
        OrderCreate {
            order_id: "ORD-TEST1".to_string(),
            first_name: "Amara".to_string(),
            last_name: "Perera".to_string(),
            email: "amara@example.com".to_string(),
            phone: "0771234567".to_string(),
            address: "12 Galle Road".to_string(),
            city: "Colombo".to_string(),
            postal_code: "00300".to_string(),
            items: vec![OrderItemInput {
                product_id: "product:tea".to_string(),
                title: "Ceylon Tea".to_string(),
                price: 120_000,
                quantity: 2,
            }],
            subtotal: 240_000,
            delivery_fee: 50_000,
            total: 290_000,
            payment_method: "cod".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_payment_method_parse() {
        assert_eq!(PaymentMethod::parse("cod"), Some(PaymentMethod::Cod));
        assert_eq!(
            PaymentMethod::parse("bank_transfer"),
            Some(PaymentMethod::BankTransfer)
        );
        assert_eq!(PaymentMethod::parse("paypal"), None);
        assert_eq!(PaymentMethod::parse(""), None);
        // Wire values are lowercase only
        assert_eq!(PaymentMethod::parse("COD"), None);
    }

    #[test]
    fn test_payment_method_initial_status() {
        assert_eq!(PaymentMethod::Cod.initial_status(), OrderStatus::Pending);
        assert_eq!(
            PaymentMethod::BankTransfer.initial_status(),
            OrderStatus::PendingVerification
        );
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&OrderStatus::PendingVerification).unwrap();
        assert_eq!(json, "\"pending_verification\"");

        let status: OrderStatus = serde_json::from_str("\"shipped\"").unwrap();
        assert_eq!(status, OrderStatus::Shipped);

        // The status set is closed
        let result: Result<OrderStatus, _> = serde_json::from_str("\"refunded\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_accepts_valid_request() {
        assert_eq!(valid_request().validate().unwrap(), PaymentMethod::Cod);
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let mut req = valid_request();
        req.email = String::new();
        req.phone = String::new();

        // email is checked before phone
        let err = req.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.message, "Missing required field: email");
    }

    #[test]
    fn test_validate_rejects_zero_amounts() {
        let mut req = valid_request();
        req.subtotal = 0;
        let err = req.validate().unwrap_err();
        assert_eq!(err.message, "Missing required field: subtotal");

        let mut req = valid_request();
        req.delivery_fee = 0;
        let err = req.validate().unwrap_err();
        assert_eq!(err.message, "Missing required field: deliveryFee");

        let mut req = valid_request();
        req.total = 0;
        let err = req.validate().unwrap_err();
        assert_eq!(err.message, "Missing required field: total");
    }

    #[test]
    fn test_validate_rejects_empty_items() {
        let mut req = valid_request();
        req.items.clear();
        let err = req.validate().unwrap_err();
        assert_eq!(err.message, "Missing required field: items");
    }

    #[test]
    fn test_validate_required_fields_run_before_method_check() {
        let mut req = valid_request();
        req.order_id = String::new();
        req.payment_method = "paypal".to_string();

        let err = req.validate().unwrap_err();
        assert_eq!(err.message, "Missing required field: orderId");
    }

    #[test]
    fn test_validate_rejects_unknown_payment_method() {
        let mut req = valid_request();
        req.payment_method = "paypal".to_string();

        let err = req.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::PaymentMethodInvalid);
        assert_eq!(err.message, "Invalid payment method");
    }

    #[test]
    fn test_validate_requires_bank_slip_for_bank_transfer() {
        let mut req = valid_request();
        req.payment_method = "bank_transfer".to_string();

        let err = req.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::BankSlipRequired);

        req.bank_slip_url = "http://localhost:3000/api/files/bank-slips/bankslip_1.png".to_string();
        assert_eq!(req.validate().unwrap(), PaymentMethod::BankTransfer);
    }

    #[test]
    fn test_validate_cod_ignores_bank_slip() {
        let req = valid_request();
        assert!(req.bank_slip_url.is_empty());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_order_create_deserializes_camel_case() {
        let json = r#"{
            "orderId": "ORD-1",
            "firstName": "Amara",
            "lastName": "Perera",
            "email": "amara@example.com",
            "phone": "0771234567",
            "address": "12 Galle Road",
            "city": "Colombo",
            "postalCode": "00300",
            "items": [{"productId": "product:tea", "title": "Ceylon Tea", "price": 120000, "quantity": 1}],
            "subtotal": 120000,
            "deliveryFee": 50000,
            "total": 170000,
            "paymentMethod": "cod"
        }"#;

        let req: OrderCreate = serde_json::from_str(json).unwrap();
        assert_eq!(req.order_id, "ORD-1");
        assert_eq!(req.items[0].product_id, "product:tea");
        assert!(req.order_date.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_order_summary_wire_format() {
        let summary = OrderSummary {
            order_id: "ORD-1".to_string(),
            status: OrderStatus::Pending,
            total: 170_000,
            payment_method: PaymentMethod::Cod,
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["orderId"], "ORD-1");
        assert_eq!(json["status"], "pending");
        assert_eq!(json["total"], 170_000);
        assert_eq!(json["paymentMethod"], "cod");
    }
}
