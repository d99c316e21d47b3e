#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use pizza_server::config::{establish_connection, AppConfig};
use pizza_server::seed::{seed, Seeded};
use pizza_server::{create_app, AppState};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub db: DatabaseConnection,
    pub seeded: Seeded,
}

/// 시드된 in-memory SQLite 위에 실제 라우터를 구성합니다.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(AppConfig::default()).await
}

pub async fn spawn_app_with(mut config: AppConfig) -> TestApp {
    config.database_url = "sqlite::memory:".to_string();
    config.schema_update = true;

    let db = establish_connection(&config.database_url, true)
        .await
        .expect("in-memory sqlite should connect");
    let seeded = seed(&db).await.expect("seed should succeed");

    let router = create_app(AppState {
        db: db.clone(),
        config,
    });

    TestApp { router, db, seeded }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    pub async fn send_json(&self, request: Request<Body>) -> (StatusCode, Value) {
        let (status, bytes) = self.send(request).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send_json(empty_request("GET", uri)).await
    }
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn create_json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
