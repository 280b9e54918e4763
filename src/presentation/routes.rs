//! Route definitions and router assembly

use std::sync::Arc;
use std::time::Duration;

use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::{Router, routing::post};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::config::Config;
use crate::presentation::controllers::landscape::{fetch_landscape, sync_landscape};
use crate::presentation::controllers::projects::{
    create_project, delete_project, get_project, list_categories, list_maturity_levels,
    list_projects, list_subcategories, update_project,
};
use crate::presentation::controllers::solutions::{
    create_solution, delete_solution, get_solution, list_solutions, update_solution,
};
use crate::presentation::controllers::{AppState, health_check};
use crate::presentation::models::{
    CreateEnterpriseSolutionRequest, CreateProjectRequest, EnterpriseSolutionResponse,
    ErrorResponse, FetchResponse, HealthResponse, ProjectResponse, SyncResponse,
    UpdateEnterpriseSolutionRequest, UpdateProjectRequest,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::controllers::projects::create_project,
        crate::presentation::controllers::projects::list_projects,
        crate::presentation::controllers::projects::list_categories,
        crate::presentation::controllers::projects::list_maturity_levels,
        crate::presentation::controllers::projects::list_subcategories,
        crate::presentation::controllers::projects::get_project,
        crate::presentation::controllers::projects::update_project,
        crate::presentation::controllers::projects::delete_project,
        crate::presentation::controllers::solutions::create_solution,
        crate::presentation::controllers::solutions::list_solutions,
        crate::presentation::controllers::solutions::get_solution,
        crate::presentation::controllers::solutions::update_solution,
        crate::presentation::controllers::solutions::delete_solution,
        crate::presentation::controllers::landscape::sync_landscape,
        crate::presentation::controllers::landscape::fetch_landscape,
        crate::presentation::controllers::health_check
    ),
    components(
        schemas(
            CreateProjectRequest,
            UpdateProjectRequest,
            ProjectResponse,
            CreateEnterpriseSolutionRequest,
            UpdateEnterpriseSolutionRequest,
            EnterpriseSolutionResponse,
            SyncResponse,
            FetchResponse,
            ErrorResponse,
            HealthResponse,
            crate::domain::catalog::MaturityLevel,
            crate::domain::catalog::ProjectExtra
        )
    ),
    tags(
        (name = "projects", description = "CNCF project catalog endpoints with filtering and distinct-value queries"),
        (name = "enterprise-solutions", description = "User-curated enterprise solution annotations"),
        (name = "landscape", description = "Landscape import endpoints mirroring the published CNCF dataset"),
        (name = "health", description = "System health monitoring endpoints")
    ),
    info(
        title = "CNCF Explorer API",
        version = "0.1.0",
        description = "Catalog browser and curation API for CNCF ecosystem projects. \
            Mirrors the published landscape dataset into a local store and lets users \
            attach enterprise solution annotations to categories.",
        license(
            name = "AGPL-3.0",
            url = "https://www.gnu.org/licenses/agpl-3.0.html"
        )
    )
)]
pub struct ApiDoc;

async fn root_handler() -> Response {
    Json(serde_json::json!({
        "name": "CNCF Explorer API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Catalog browser and curation API for CNCF ecosystem projects",
        "endpoints": {
            "health": "/health",
            "projects": "/api/projects",
            "enterprise_solutions": "/api/enterprise-solutions",
            "landscape_sync": "/api/landscape/sync",
            "docs": "/api-docs/openapi.json"
        }
    }))
    .into_response()
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the CORS layer from configuration.
///
/// A single "*" entry allows any origin; otherwise only the listed
/// origins are allowed and unparseable entries are skipped with a
/// warning.
fn build_cors_layer(config: &Config) -> CorsLayer {
    let methods = [
        axum::http::Method::GET,
        axum::http::Method::POST,
        axum::http::Method::PATCH,
        axum::http::Method::DELETE,
        axum::http::Method::OPTIONS,
    ];
    let headers = [
        axum::http::header::CONTENT_TYPE,
        axum::http::header::ACCEPT,
    ];

    if config.server.allowed_origins.len() == 1 && config.server.allowed_origins[0] == "*" {
        return CorsLayer::new()
            .allow_origin(tower_http::cors::AllowOrigin::any())
            .allow_methods(methods)
            .allow_headers(headers)
            .max_age(Duration::from_secs(3600));
    }

    let origins: Vec<axum::http::HeaderValue> = config
        .server
        .allowed_origins
        .iter()
        .filter_map(|origin| {
            axum::http::HeaderValue::from_str(origin)
                .map_err(|_| {
                    tracing::warn!(origin, "Invalid CORS origin in config; skipping");
                })
                .ok()
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(headers)
        .max_age(Duration::from_secs(3600))
}

/// Create the application router with the full middleware stack
pub fn create_router(state: AppState, config: Arc<Config>) -> Router {
    let project_routes = Router::new()
        .route("/projects", post(create_project).get(list_projects))
        .route("/projects/categories", get(list_categories))
        .route("/projects/maturity-levels", get(list_maturity_levels))
        .route("/projects/subcategories", get(list_subcategories))
        .route(
            "/projects/{id}",
            get(get_project).patch(update_project).delete(delete_project),
        );

    let solution_routes = Router::new()
        .route(
            "/enterprise-solutions",
            post(create_solution).get(list_solutions),
        )
        .route(
            "/enterprise-solutions/{id}",
            get(get_solution)
                .patch(update_solution)
                .delete(delete_solution),
        );

    let landscape_routes = Router::new()
        .route("/landscape/sync", post(sync_landscape))
        .route("/landscape/fetch", get(fetch_landscape));

    let api_routes = Router::new()
        .merge(project_routes)
        .merge(solution_routes)
        .merge(landscape_routes);

    let mut router = Router::new()
        .nest("/api", api_routes)
        .route("/", get(root_handler))
        .route("/health", get(health_check));

    // Avoid leaking the API surface in locked-down deployments
    if config.server.enable_docs {
        router = router.route("/api-docs/openapi.json", get(openapi_json));
    }

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(&config))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_seconds,
        )));

    router.layer(service_builder).with_state(state)
}
