//! Common test utilities for API tests
//!
//! Builds the full router over in-memory repositories (or PostgreSQL via
//! testcontainers) and offers small request helpers.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde::Deserialize;
use serde_json::Value;
use sqlx::PgPool;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tower::util::ServiceExt;

use memo_api::domain::gateways::{MemoListQuery, MemoRepository};
use memo_api::domain::models::memo::{Memo, MemoId, MemoRevision};
use memo_api::infrastructure::driven_adapters::config::DatabaseConfig;
use memo_api::infrastructure::driven_adapters::database::{create_pool, run_migrations};
use memo_api::infrastructure::driven_adapters::{
    InMemoryMemoRepository, InMemoryUserRepository, PostgresMemoRepository, PostgresUserRepository,
};
use memo_api::infrastructure::driving_adapters::api_rest::{build_router, AppState};
use memo_api::shared::RepositoryError;

/// Test application context
pub struct TestApp {
    pub router: Router,
    pub memos: Arc<InMemoryMemoRepository>,
}

impl TestApp {
    /// Router over fresh in-memory repositories
    pub fn new() -> Self {
        let memos = Arc::new(InMemoryMemoRepository::new());
        let users = Arc::new(InMemoryUserRepository::new());
        let router = build_router(AppState::new(memos.clone(), users));

        Self { router, memos }
    }

    /// Router whose memo store fails every call
    pub fn with_failing_store() -> Router {
        build_router(AppState::new(
            Arc::new(FailingMemoRepository),
            Arc::new(InMemoryUserRepository::new()),
        ))
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        send(&self.router, request).await
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(empty_request(Method::GET, uri)).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(empty_request(Method::DELETE, uri)).await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> TestResponse {
        self.send(json_request(Method::POST, uri, body)).await
    }

    pub async fn put_json(&self, uri: &str, body: &Value) -> TestResponse {
        self.send(json_request(Method::PUT, uri, body)).await
    }

    /// Create a memo through the API and return its id
    pub async fn create_memo(&self, body: &str, tags: &[&str]) -> String {
        let response = self
            .post_json("/api/memos", &serde_json::json!({ "body": body, "tags": tags }))
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["id"].as_str().unwrap().to_string()
    }
}

/// Router backed by a throwaway PostgreSQL container
pub struct PostgresTestApp {
    pub router: Router,
    pub pool: PgPool,
    _container: ContainerAsync<Postgres>,
}

impl PostgresTestApp {
    pub async fn new() -> Self {
        let container = Postgres::default()
            .with_tag("16-alpine")
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let config = DatabaseConfig {
            url: format!("postgres://postgres:postgres@{host}:{port}/postgres"),
            max_connections: 5,
            min_connections: 1,
        };
        let pool = create_pool(&config)
            .await
            .expect("Failed to connect to test database");
        run_migrations(&pool).await.expect("Failed to run migrations");

        let router = build_router(AppState::new(
            Arc::new(PostgresMemoRepository::new(pool.clone())),
            Arc::new(PostgresUserRepository::new(pool.clone())),
        ));

        Self {
            router,
            pool,
            _container: container,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        send(&self.router, request).await
    }
}

/// Status, headers and decoded JSON body (`Null` when empty)
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn error(&self) -> ErrorResponse {
        serde_json::from_value(self.body.clone()).expect("Expected an error body")
    }
}

pub async fn send(router: &Router, request: Request<Body>) -> TestResponse {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Memo store that is always unavailable
pub struct FailingMemoRepository;

fn unavailable() -> RepositoryError {
    RepositoryError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl MemoRepository for FailingMemoRepository {
    async fn create(&self, _memo: &Memo) -> Result<(), RepositoryError> {
        Err(unavailable())
    }

    async fn list(&self, _query: &MemoListQuery) -> Result<(Vec<Memo>, i64), RepositoryError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: &MemoId) -> Result<Option<Memo>, RepositoryError> {
        Err(unavailable())
    }

    async fn update(&self, _revision: &MemoRevision) -> Result<bool, RepositoryError> {
        Err(unavailable())
    }

    async fn delete(&self, _id: &MemoId) -> Result<bool, RepositoryError> {
        Err(unavailable())
    }
}

/// Error response structure for deserialization
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub details: Option<Vec<FieldError>>,
}

#[derive(Debug, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}
