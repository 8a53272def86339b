#![allow(dead_code)]

use std::path::PathBuf;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use taskforge_api::middleware::ErrorRendering;
use taskforge_api::routes::create_router;
use taskforge_api::state::AppState;
use taskforge_infrastructure::JsonFileTaskStore;
use tempfile::TempDir;
use tower::ServiceExt;

// =============================================================================
// TestApp
// =============================================================================

/// Router over a JSON file store living in a temporary directory.
pub struct TestApp {
    router: Router,
    tasks_file: PathBuf,
    _directory: TempDir,
}

impl TestApp {
    /// Starts with `content` as the tasks file, or without a file for `None`.
    pub fn with_file(content: Option<&str>) -> Self {
        Self::build(content, true)
    }

    pub fn empty() -> Self {
        Self::with_file(Some("[]"))
    }

    pub fn production(content: Option<&str>) -> Self {
        Self::build(content, false)
    }

    fn build(content: Option<&str>, expose_stack: bool) -> Self {
        let directory = TempDir::new().unwrap();
        let tasks_file = directory.path().join("tasks.json");
        if let Some(content) = content {
            std::fs::write(&tasks_file, content).unwrap();
        }
        let router = create_router(
            AppState::new(JsonFileTaskStore::new(&tasks_file)),
            ErrorRendering { expose_stack },
        );
        Self {
            router,
            tasks_file,
            _directory: directory,
        }
    }

    pub fn tasks_file(&self) -> &PathBuf {
        &self.tasks_file
    }

    pub fn file_content(&self) -> String {
        std::fs::read_to_string(&self.tasks_file).unwrap()
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> TestResponse {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(Method::DELETE, uri, None).await
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        match body {
            Some(body) => {
                self.send_raw(method, uri, Some("application/json"), &body.to_string())
                    .await
            }
            None => self.send_raw(method, uri, None, "").await,
        }
    }

    pub async fn send_raw(
        &self,
        method: Method,
        uri: &str,
        content_type: Option<&str>,
        body: &str,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        let request = builder.body(Body::from(body.to_string())).unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        TestResponse::read(response).await
    }
}

// =============================================================================
// TestResponse
// =============================================================================

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub raw_body: Vec<u8>,
    pub body: Value,
}

impl TestResponse {
    async fn read(response: axum::response::Response) -> Self {
        let status = response.status();
        let headers = response.headers().clone();
        let raw_body = response
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec();
        let body = serde_json::from_slice(&raw_body).unwrap_or(Value::Null);
        Self {
            status,
            headers,
            raw_body,
            body,
        }
    }

    pub fn error_message(&self) -> &str {
        self.body["error"]["message"].as_str().unwrap_or_default()
    }

    pub fn has_stack(&self) -> bool {
        self.body["error"].get("stack").is_some()
    }
}
