//! Shared test harness: in-memory database, stub notifier, request helpers

// Each integration test binary compiles its own copy of this module and
// uses a different subset of the helpers.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::Router;
use http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use surrealdb::engine::local::Mem;
use surrealdb::Surreal;
use tempfile::TempDir;
use tower::util::ServiceExt;

use shop_server::db::DbService;
use shop_server::{build_app, Config, Notifier, NoopNotifier, ServerState};

pub struct TestServer {
    pub app: Router,
    pub state: ServerState,
    // Keeps the work dir alive for upload tests
    #[allow(dead_code)]
    work_dir: TempDir,
}

pub async fn spawn_app() -> TestServer {
    spawn_app_with_notifier(Arc::new(NoopNotifier)).await
}

pub async fn spawn_app_with_notifier(notifier: Arc<dyn Notifier>) -> TestServer {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    let db = DbService::attach(db).await.unwrap().db;

    let work_dir = tempfile::tempdir().unwrap();
    let config = Config::with_overrides(work_dir.path().to_string_lossy(), 0);
    let state = ServerState::new(config, db, notifier);

    TestServer {
        app: build_app(state.clone()),
        state,
        work_dir,
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn put_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}
