//! Order confirmation notifications
//!
//! Confirmations are dispatched fire-and-forget from a detached task:
//! the order creation response never waits on the provider, and a failed
//! delivery never rolls back the persisted order. Final failures land on
//! the `email_failures` log target with enough context for a manual
//! resend.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;

use crate::core::Config;
use shared::models::Order;

/// Attempts per confirmation; 4xx responses are never retried
const MAX_ATTEMPTS: u32 = 2;
/// Per-attempt HTTP timeout
const ATTEMPT_TIMEOUT: Duration = Duration::from_secs(8);
/// Pause between attempts
const RETRY_PAUSE: Duration = Duration::from_secs(1);

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider rejected request ({status}): {body}")]
    Provider { status: u16, body: String },
}

impl NotifyError {
    /// 4xx means the request itself is wrong; retrying cannot help
    fn is_client_error(&self) -> bool {
        matches!(self, NotifyError::Provider { status, .. } if (400..500).contains(status))
    }
}

/// Notification dispatch seam; tests inject failing doubles
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send an order confirmation, called from a detached task
    async fn send_order_confirmation(&self, order: &Order) -> Result<(), NotifyError>;
}

/// Notifier used when no provider API key is configured
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn send_order_confirmation(&self, order: &Order) -> Result<(), NotifyError> {
        tracing::debug!(order_no = %order.order_id, "Notifier disabled, skipping confirmation");
        Ok(())
    }
}

pub fn confirmation_subject(order_no: &str) -> String {
    format!("Order Confirmation - {}", order_no)
}

/// Brevo-compatible transactional email provider
pub struct BrevoNotifier {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    sender_email: String,
    sender_name: String,
}

impl BrevoNotifier {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: config.brevo_api_url.clone(),
            api_key: config.brevo_api_key.clone(),
            sender_email: config.sender_email.clone(),
            sender_name: config.sender_name.clone(),
        }
    }

    fn render_body(order: &Order) -> String {
        let mut rows = String::new();
        for item in &order.products {
            rows.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                item.title,
                item.quantity,
                format_amount(item.price * item.quantity as i64),
            ));
        }

        format!(
            "<h2>Thank you for your order, {first_name}!</h2>\
             <p>Order number: <strong>{order_no}</strong></p>\
             <table><tr><th>Item</th><th>Qty</th><th>Amount</th></tr>{rows}</table>\
             <p>Subtotal: {subtotal}<br>Delivery: {delivery_fee}<br>\
             <strong>Total: {total}</strong></p>\
             <p>Shipping to: {address}, {city} {postal_code}</p>",
            first_name = order.first_name,
            order_no = order.order_id,
            rows = rows,
            subtotal = format_amount(order.subtotal),
            delivery_fee = format_amount(order.delivery_fee),
            total = format_amount(order.total),
            address = order.address,
            city = order.city,
            postal_code = order.postal_code,
        )
    }

    async fn attempt(&self, order: &Order, subject: &str, html: &str) -> Result<(), NotifyError> {
        let payload = serde_json::json!({
            "sender": { "name": self.sender_name, "email": self.sender_email },
            "to": [{
                "email": order.email,
                "name": format!("{} {}", order.first_name, order.last_name),
            }],
            "subject": subject,
            "htmlContent": html,
        });

        let response = self
            .http
            .post(format!("{}/v3/smtp/email", self.api_url))
            .header("api-key", &self.api_key)
            .timeout(ATTEMPT_TIMEOUT)
            .json(&payload)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(NotifyError::Provider {
                status: response.status().as_u16(),
                body: response.text().await.unwrap_or_default(),
            })
        }
    }
}

#[async_trait]
impl Notifier for BrevoNotifier {
    async fn send_order_confirmation(&self, order: &Order) -> Result<(), NotifyError> {
        let subject = confirmation_subject(&order.order_id);
        let html = Self::render_body(order);

        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.attempt(order, &subject, &html).await {
                Ok(()) => return Ok(()),
                Err(err) => {
                    if attempt >= MAX_ATTEMPTS || err.is_client_error() {
                        return Err(err);
                    }
                    tracing::warn!(
                        order_no = %order.order_id,
                        attempt,
                        error = %err,
                        "Confirmation attempt failed, retrying"
                    );
                    tokio::time::sleep(RETRY_PAUSE).await;
                }
            }
        }
    }
}

fn format_amount(minor_units: i64) -> String {
    format!("{}.{:02}", minor_units / 100, (minor_units % 100).abs())
}

/// Spawn the confirmation send and return immediately
///
/// The task outlives the request handler; exhausted retries are logged,
/// never surfaced to the creation caller.
pub fn dispatch_confirmation(notifier: Arc<dyn Notifier>, order: Order) {
    tokio::spawn(async move {
        if let Err(e) = notifier.send_order_confirmation(&order).await {
            tracing::error!(
                target: "email_failures",
                timestamp = %Utc::now().to_rfc3339(),
                recipient = %order.email,
                subject = %confirmation_subject(&order.order_id),
                order_no = %order.order_id,
                error = %e,
                "Order confirmation delivery failed"
            );
        }
    });
}
