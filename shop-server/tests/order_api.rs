//! Order API integration tests against the in-memory database

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use http::StatusCode;
use serde_json::{json, Value};

use common::{get, post_json, spawn_app, spawn_app_with_notifier};
use shared::models::Order;
use shop_server::{Notifier, NotifyError};

fn order_payload(order_id: &str) -> Value {
    json!({
        "orderId": order_id,
        "firstName": "Amara",
        "lastName": "Perera",
        "email": "amara@example.com",
        "phone": "0771234567",
        "address": "12 Galle Road",
        "city": "Colombo",
        "postalCode": "00300",
        "province": "Western",
        "district": "Colombo",
        "notes": "",
        "items": [
            {"productId": "product:tea", "title": "Ceylon Tea", "price": 120000, "quantity": 2}
        ],
        "subtotal": 240000,
        "deliveryFee": 50000,
        "total": 290000,
        "paymentMethod": "cod",
        "bankSlipUrl": ""
    })
}

#[tokio::test]
async fn test_create_cod_order() {
    let server = spawn_app().await;

    let (status, body) = post_json(&server.app, "/api/orders", order_payload("ORD-COD1")).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["orderId"], "ORD-COD1");
    assert_eq!(body["data"]["status"], "pending");
    assert_eq!(body["data"]["total"], 290_000);
    assert_eq!(body["data"]["paymentMethod"], "cod");
}

#[tokio::test]
async fn test_create_bank_transfer_order() {
    let server = spawn_app().await;

    let mut payload = order_payload("ORD-BANK1");
    payload["paymentMethod"] = json!("bank_transfer");
    payload["bankSlipUrl"] =
        json!("http://localhost:3000/api/files/bank-slips/bankslip_1.png");

    let (status, body) = post_json(&server.app, "/api/orders", payload).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["status"], "pending_verification");
}

#[tokio::test]
async fn test_bank_transfer_without_slip_rejected() {
    let server = spawn_app().await;

    let mut payload = order_payload("ORD-BANK2");
    payload["paymentMethod"] = json!("bank_transfer");

    let (status, body) = post_json(&server.app, "/api/orders", payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4004);
    assert_eq!(
        body["message"],
        "Bank slip URL is required for bank transfer payments"
    );

    // Nothing was persisted
    let (status, _) = get(&server.app, "/api/orders?orderId=ORD-BANK2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_field_rejected() {
    let server = spawn_app().await;

    let mut payload = order_payload("ORD-MISS1");
    payload["email"] = json!("");

    let (status, body) = post_json(&server.app, "/api/orders", payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 7);
    assert_eq!(body["message"], "Missing required field: email");
}

#[tokio::test]
async fn test_invalid_payment_method_rejected() {
    let server = spawn_app().await;

    let mut payload = order_payload("ORD-PAY1");
    payload["paymentMethod"] = json!("paypal");

    let (status, body) = post_json(&server.app, "/api/orders", payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4003);
    assert_eq!(body["message"], "Invalid payment method");
}

#[tokio::test]
async fn test_duplicate_order_id_conflicts() {
    let server = spawn_app().await;

    let (status, _) = post_json(&server.app, "/api/orders", order_payload("ORD-DUP1")).await;
    assert_eq!(status, StatusCode::CREATED);

    let mut second = order_payload("ORD-DUP1");
    second["firstName"] = json!("Nimal");
    second["total"] = json!(999_999);

    let (status, body) = post_json(&server.app, "/api/orders", second).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 4002);
    assert_eq!(body["message"], "Order ID already exists");

    // The first order is untouched
    let (status, body) = get(&server.app, "/api/orders?orderId=ORD-DUP1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["firstName"], "Amara");
    assert_eq!(body["data"]["total"], 290_000);
}

struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn send_order_confirmation(&self, _order: &Order) -> Result<(), NotifyError> {
        Err(NotifyError::Provider {
            status: 500,
            body: "smtp relay down".to_string(),
        })
    }
}

#[tokio::test]
async fn test_notifier_failure_does_not_affect_creation() {
    let server = spawn_app_with_notifier(Arc::new(FailingNotifier)).await;

    let (status, body) = post_json(&server.app, "/api/orders", order_payload("ORD-MAIL1")).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["orderId"], "ORD-MAIL1");

    // Give the background dispatch a chance to run to completion
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;

    let (status, _) = get(&server.app, "/api/orders?orderId=ORD-MAIL1").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_lookup_by_order_id() {
    let server = spawn_app().await;
    post_json(&server.app, "/api/orders", order_payload("ORD-GET1")).await;

    let (status, body) = get(&server.app, "/api/orders?orderId=ORD-GET1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["orderId"], "ORD-GET1");
    assert_eq!(body["data"]["status"], "pending");
    assert_eq!(body["data"]["paid"], false);
    assert_eq!(body["data"]["trackingNumber"], "");
    assert_eq!(body["data"]["products"][0]["title"], "Ceylon Tea");
}

#[tokio::test]
async fn test_lookup_unknown_order_id() {
    let server = spawn_app().await;

    let (status, body) = get(&server.app, "/api/orders?orderId=ORD-NOPE").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 4001);
}

#[tokio::test]
async fn test_lookup_by_internal_id() {
    let server = spawn_app().await;
    post_json(&server.app, "/api/orders", order_payload("ORD-GET2")).await;

    let (_, body) = get(&server.app, "/api/orders?orderId=ORD-GET2").await;
    let internal_id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = get(&server.app, &format!("/api/orders?id={internal_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["orderId"], "ORD-GET2");
}

#[tokio::test]
async fn test_lookup_by_email_newest_first() {
    let server = spawn_app().await;

    for order_id in ["ORD-EM1", "ORD-EM2", "ORD-EM3"] {
        let (status, _) = post_json(&server.app, "/api/orders", order_payload(order_id)).await;
        assert_eq!(status, StatusCode::CREATED);
        // Distinct creation timestamps for a stable ordering
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }

    let (status, body) = get(&server.app, "/api/orders?email=amara@example.com").await;

    assert_eq!(status, StatusCode::OK);
    let orders = body["data"].as_array().unwrap();
    assert_eq!(orders.len(), 3);
    assert_eq!(orders[0]["orderId"], "ORD-EM3");
    assert_eq!(orders[1]["orderId"], "ORD-EM2");
    assert_eq!(orders[2]["orderId"], "ORD-EM1");
}

#[tokio::test]
async fn test_lookup_by_email_with_no_orders() {
    let server = spawn_app().await;

    let (status, body) = get(&server.app, "/api/orders?email=nobody@example.com").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_lookup_without_parameters_rejected() {
    let server = spawn_app().await;

    let (status, body) = get(&server.app, "/api/orders").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4005);
}
