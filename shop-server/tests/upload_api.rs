//! Bank slip upload and file serving integration tests

mod common;

use axum::body::Body;
use http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tower::util::ServiceExt;

use common::{send, spawn_app};

const BOUNDARY: &str = "----storefront-test-boundary";

fn multipart_body(field: &str, filename: &str, content_type: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn upload_request(field: &str, content_type: &str, data: &[u8]) -> Request<Body> {
    let body = multipart_body(field, "slip.bin", content_type, data);
    Request::builder()
        .method("POST")
        .uri("/api/upload/bank-slip")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_upload_and_serve_png() {
    let server = spawn_app().await;

    let png_data = b"\x89PNG\r\n\x1a\nfake image bytes";
    let (status, body) = send(&server.app, upload_request("bankSlip", "image/png", png_data)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 0);
    let filename = body["data"]["filename"].as_str().unwrap();
    assert!(filename.starts_with("bankslip_"));
    assert!(filename.ends_with(".png"));
    assert_eq!(body["data"]["size"], png_data.len());
    assert_eq!(body["data"]["contentType"], "image/png");
    let url = body["data"]["url"].as_str().unwrap();
    assert!(url.ends_with(&format!("/api/files/bank-slips/{filename}")));

    // The stored file is served back with its guessed content type
    let request = Request::builder()
        .uri(format!("/api/files/bank-slips/{filename}"))
        .body(Body::empty())
        .unwrap();
    let response = server.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "image/png"
    );
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(bytes.as_ref(), png_data);
}

#[tokio::test]
async fn test_upload_pdf_extension() {
    let server = spawn_app().await;

    let (status, body) = send(
        &server.app,
        upload_request("bankSlip", "application/pdf", b"%PDF-1.4 fake"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let filename = body["data"]["filename"].as_str().unwrap();
    assert!(filename.ends_with(".pdf"));
}

#[tokio::test]
async fn test_upload_oversized_file_rejected() {
    let server = spawn_app().await;

    let data = vec![0u8; 20 * 1024 * 1024 + 1];
    let (status, body) = send(&server.app, upload_request("bankSlip", "image/png", &data)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 5001);
    assert_eq!(body["message"], "File size exceeds 20MB limit");
}

#[tokio::test]
async fn test_upload_unsupported_type_rejected() {
    let server = spawn_app().await;

    let (status, body) = send(
        &server.app,
        upload_request("bankSlip", "image/gif", b"GIF89a"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 5002);
    assert_eq!(
        body["message"],
        "Invalid file type. Only JPEG, PNG, and PDF files are allowed."
    );
}

#[tokio::test]
async fn test_upload_wrong_field_name_rejected() {
    let server = spawn_app().await;

    let (status, body) = send(
        &server.app,
        upload_request("attachment", "image/png", b"\x89PNG"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 5003);
    assert_eq!(body["message"], "No bank slip file provided");
}

#[tokio::test]
async fn test_serve_rejects_path_traversal() {
    let server = spawn_app().await;

    let request = Request::builder()
        .uri("/api/files/bank-slips/..%2F..%2Fetc%2Fpasswd")
        .body(Body::empty())
        .unwrap();
    let response = server.app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_serve_unknown_file() {
    let server = spawn_app().await;

    let request = Request::builder()
        .uri("/api/files/bank-slips/bankslip_0.png")
        .body(Body::empty())
        .unwrap();
    let response = server.app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
