//! Helpers for wiring an application instance over an in-memory store

use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tower::ServiceExt;

use cncf_explorer::application::landscape::{FetchLandscapeUseCase, SyncLandscapeUseCase};
use cncf_explorer::config::{Config, LandscapeConfig};
use cncf_explorer::domain::catalog::{IEnterpriseSolutionRepository, IProjectRepository};
use cncf_explorer::infrastructure::landscape::LandscapeClient;
use cncf_explorer::infrastructure::persistence::{
    MIGRATOR, SqlxEnterpriseSolutionRepository, SqlxProjectRepository,
};
use cncf_explorer::presentation::{AppState, create_router};

/// In-memory database with the schema applied.
///
/// One connection only: every pooled connection would otherwise see its
/// own private `:memory:` database.
pub async fn test_pool() -> Arc<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory database");

    MIGRATOR.run(&pool).await.expect("migrations");

    Arc::new(pool)
}

pub fn landscape_config(source_urls: Vec<String>) -> LandscapeConfig {
    LandscapeConfig {
        source_urls,
        fetch_timeout_seconds: 5,
        ..LandscapeConfig::default()
    }
}

/// Full application state over an in-memory store and the given landscape
/// source URLs
pub async fn test_state(source_urls: Vec<String>) -> AppState {
    let pool = test_pool().await;
    let project_repository: Arc<dyn IProjectRepository> =
        Arc::new(SqlxProjectRepository::new(pool.clone()));
    let solution_repository: Arc<dyn IEnterpriseSolutionRepository> =
        Arc::new(SqlxEnterpriseSolutionRepository::new(pool.clone()));
    let client = Arc::new(
        LandscapeClient::new(&landscape_config(source_urls)).expect("landscape client"),
    );

    AppState {
        sync_landscape: Arc::new(SyncLandscapeUseCase::new(
            client.clone(),
            project_repository.clone(),
        )),
        fetch_landscape: Arc::new(FetchLandscapeUseCase::new(client)),
        project_repository,
        solution_repository,
        config: Arc::new(Config::default()),
        startup_time: Instant::now(),
    }
}

/// Router over a fresh in-memory application instance
pub async fn test_router(source_urls: Vec<String>) -> Router {
    let state = test_state(source_urls).await;
    let config = state.config.clone();
    create_router(state, config)
}

/// Send a JSON request through the router and decode the JSON response.
/// Empty response bodies decode to `Null`.
pub async fn send_json(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).expect("encode body")))
            .expect("build request"),
        None => builder.body(Body::empty()).expect("build request"),
    };

    let response = router.clone().oneshot(request).await.expect("send request");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();

    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };

    (status, json)
}
