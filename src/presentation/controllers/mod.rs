//! HTTP controllers

pub mod landscape;
pub mod projects;
pub mod solutions;

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use chrono::Utc;

use crate::application::landscape::{FetchLandscapeUseCase, SyncLandscapeUseCase};
use crate::config::Config;
use crate::domain::catalog::{CatalogError, IEnterpriseSolutionRepository, IProjectRepository};
use crate::presentation::models::{ErrorResponse, HealthResponse};

/// Shared state injected into every handler
#[derive(Clone)]
pub struct AppState {
    pub project_repository: Arc<dyn IProjectRepository>,
    pub solution_repository: Arc<dyn IEnterpriseSolutionRepository>,
    pub sync_landscape: Arc<SyncLandscapeUseCase>,
    pub fetch_landscape: Arc<FetchLandscapeUseCase>,
    pub config: Arc<Config>,
    pub startup_time: Instant,
}

/// Map a catalog error onto the wire error contract
pub(crate) fn map_catalog_error(error: CatalogError) -> Response {
    let (status, code) = match &error {
        CatalogError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        CatalogError::Validation { .. } => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        CatalogError::Database { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
    };

    (status, Json(ErrorResponse::new(code, error.to_string()))).into_response()
}

/// GET /health - Service health probe
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        uptime_seconds: state.startup_time.elapsed().as_secs(),
    })
}
