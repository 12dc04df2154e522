#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use exitnode::{
    AppState,
    config::{Config, MIN_BCRYPT_COST},
    router::create_router,
    storage::Store,
};
use serde_json::{Value, json};
use tower::ServiceExt;

/// 每个测试独立的应用实例
pub struct TestApp {
    pub router: Router,
    pub store: Arc<Store>,
}

impl TestApp {
    pub fn new() -> Self {
        let config = Config {
            bcrypt_cost: MIN_BCRYPT_COST,
            ..Config::default()
        };
        let state = AppState::new(Store::new(), config);
        let store = state.store.clone();
        TestApp {
            router: create_router(state),
            store,
        }
    }

    pub async fn send_raw(
        &self,
        method: &str,
        uri: &str,
        body: Option<String>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body)),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send_raw("GET", uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send_raw("POST", uri, Some(body.to_string())).await
    }

    pub async fn patch(&self, uri: &str) -> (StatusCode, Value) {
        self.send_raw("PATCH", uri, None).await
    }

    pub async fn register(&self, username: &str, email: &str) -> (StatusCode, Value) {
        self.post("/api/auth/register", registration(username, email))
            .await
    }

    /// 注册并返回新用户的 id
    pub async fn register_ok(&self, username: &str, email: &str) -> i64 {
        let (status, body) = self.register(username, email).await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_i64().unwrap()
    }
}

pub fn registration(username: &str, email: &str) -> Value {
    json!({
        "username": username,
        "email": email,
        "password": "secret",
        "displayName": format!("{username} display"),
        "company": "meta",
        "avatarInitials": "XX",
    })
}
