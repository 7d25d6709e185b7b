#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use kotoba_config::ServerConfig;
use kotoba_db::service::KotobaService;
use kotoba_engine::{SetParser, VocabEngine};
use kotoba_server::{AppState, router};

pub async fn make_router_with_config(config: &ServerConfig) -> Router {
    let service = KotobaService::new_local(":memory:").await.unwrap();
    let engine = VocabEngine::new(service, SetParser::default());
    router(AppState::new(engine), config)
}

pub async fn make_router() -> Router {
    make_router_with_config(&ServerConfig::default()).await
}

pub struct TestResponse {
    pub status: StatusCode,
    pub cache_control: Option<String>,
    pub body: Value,
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };

    let resp = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = resp.status();
    let cache_control = resp
        .headers()
        .get(header::CACHE_CONTROL)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    TestResponse {
        status,
        cache_control,
        body,
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> TestResponse {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn register(app: &Router, key: &str, content: &str) {
    let resp = post(
        app,
        "/api/wordsets",
        serde_json::json!({ "key": key, "content": content }),
    )
    .await;
    assert_eq!(resp.status, StatusCode::CREATED);
}
