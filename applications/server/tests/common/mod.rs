//! Common test utilities and fixtures
#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, Response, StatusCode},
    Router,
};
use melodia_server::{create_router, AppState};
use melodia_storage::LocalStorageContext;
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

/// A description that satisfies the length bounds
pub const VALID_DESCRIPTION: &str =
    "Songs for long drives along the coast, windows all the way down.";

/// Router backed by a real SQLite file that lives as long as this value
pub struct TestApp {
    pub router: Router,
    _temp_dir: TempDir,
}

impl TestApp {
    /// Create a test app with migrations applied
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());

        let pool = melodia_storage::create_pool(&db_url, 5)
            .await
            .expect("Failed to create pool");
        melodia_storage::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        let storage = Arc::new(LocalStorageContext::new(pool));
        let router = create_router(AppState::new(storage));

        Self {
            router,
            _temp_dir: temp_dir,
        }
    }

    /// Send a request and decode the JSON body (Null for empty bodies)
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        TestResponse::from_response(response).await
    }

    /// Send a raw body with a JSON content type
    pub async fn send_raw(&self, method: Method, uri: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        TestResponse::from_response(response).await
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.send(Method::POST, uri, Some(body)).await
    }

    /// Create a song and return its id
    pub async fn create_song(&self, title: &str, artist: &str) -> i64 {
        let response = self
            .post("/songs", serde_json::json!({ "title": title, "artist": artist }))
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
        response.body["data"]["id"].as_i64().unwrap()
    }

    /// Create a draft playlist and return its id
    pub async fn create_playlist(&self, name: &str) -> i64 {
        let response = self
            .post(
                "/playlists",
                serde_json::json!({ "name": name, "description": VALID_DESCRIPTION }),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
        response.body["data"]["id"].as_i64().unwrap()
    }
}

/// Status, headers and decoded body of a response
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub content_type: Option<String>,
    pub body: Value,
}

impl TestResponse {
    async fn from_response(response: Response<Body>) -> Self {
        let status = response.status();
        let headers = response.headers().clone();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        Self {
            status,
            headers,
            content_type,
            body,
        }
    }

    /// Assert an RFC 7807 problem with the given status and instance
    pub fn assert_problem(&self, status: StatusCode, instance: &str) {
        assert_eq!(self.status, status);
        assert_eq!(
            self.content_type.as_deref(),
            Some("application/problem+json")
        );
        assert_eq!(self.body["type"], "about:blank");
        assert_eq!(self.body["status"], status.as_u16());
        assert_eq!(self.body["instance"], instance);
        assert!(self.body["title"].is_string());
        assert!(self.body["detail"].is_string());
    }
}
