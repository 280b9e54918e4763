//! Project catalog API controllers

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Json, Response};
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::domain::catalog::{CatalogError, Project, ProjectFilter};
use crate::presentation::controllers::{AppState, map_catalog_error};
use crate::presentation::models::{
    CategoryScopeParams, CreateProjectRequest, ErrorResponse, ProjectFilterParams,
    ProjectResponse, UpdateProjectRequest,
};

/// POST /api/projects - Create a project
#[utoipa::path(
    post,
    path = "/api/projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Project created", body = ProjectResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "projects"
)]
#[instrument(skip(state, request), fields(name = %request.name))]
pub async fn create_project(
    State(state): State<AppState>,
    Json(request): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<ProjectResponse>), Response> {
    let project = Project::new(request.into()).map_err(map_catalog_error)?;

    state
        .project_repository
        .create(&project)
        .await
        .map_err(|e| {
            error!(error = %e, "failed to create project");
            map_catalog_error(e)
        })?;

    info!(id = %project.id, "project created");
    Ok((StatusCode::CREATED, Json(project.into())))
}

/// GET /api/projects - List projects with optional exact-match filters
#[utoipa::path(
    get,
    path = "/api/projects",
    params(ProjectFilterParams),
    responses(
        (status = 200, description = "Projects retrieved", body = [ProjectResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "projects"
)]
#[instrument(skip(state, params))]
pub async fn list_projects(
    State(state): State<AppState>,
    Query(params): Query<ProjectFilterParams>,
) -> Result<Json<Vec<ProjectResponse>>, Response> {
    let filter: ProjectFilter = params.into();

    let projects = state
        .project_repository
        .find_all(&filter)
        .await
        .map_err(|e| {
            error!(error = %e, "failed to list projects");
            map_catalog_error(e)
        })?;

    Ok(Json(projects.into_iter().map(ProjectResponse::from).collect()))
}

/// GET /api/projects/categories - Distinct category names
#[utoipa::path(
    get,
    path = "/api/projects/categories",
    responses(
        (status = 200, description = "Categories retrieved", body = [String]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "projects"
)]
#[instrument(skip(state))]
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, Response> {
    let categories = state
        .project_repository
        .distinct_categories()
        .await
        .map_err(|e| {
            error!(error = %e, "failed to list categories");
            map_catalog_error(e)
        })?;

    Ok(Json(categories))
}

/// GET /api/projects/maturity-levels - Distinct maturity levels
#[utoipa::path(
    get,
    path = "/api/projects/maturity-levels",
    responses(
        (status = 200, description = "Maturity levels retrieved", body = [String]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "projects"
)]
#[instrument(skip(state))]
pub async fn list_maturity_levels(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, Response> {
    let levels = state
        .project_repository
        .distinct_maturity_levels()
        .await
        .map_err(|e| {
            error!(error = %e, "failed to list maturity levels");
            map_catalog_error(e)
        })?;

    Ok(Json(levels))
}

/// GET /api/projects/subcategories - Distinct subcategories, optionally
/// scoped to a category
#[utoipa::path(
    get,
    path = "/api/projects/subcategories",
    params(CategoryScopeParams),
    responses(
        (status = 200, description = "Subcategories retrieved", body = [String]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "projects"
)]
#[instrument(skip(state, params))]
pub async fn list_subcategories(
    State(state): State<AppState>,
    Query(params): Query<CategoryScopeParams>,
) -> Result<Json<Vec<String>>, Response> {
    let subcategories = state
        .project_repository
        .distinct_subcategories(params.category.as_deref())
        .await
        .map_err(|e| {
            error!(error = %e, "failed to list subcategories");
            map_catalog_error(e)
        })?;

    Ok(Json(subcategories))
}

/// GET /api/projects/{id} - Get a project
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    params(("id" = Uuid, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Project found", body = ProjectResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "projects"
)]
#[instrument(skip(state), fields(id = %id))]
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProjectResponse>, Response> {
    let project = state
        .project_repository
        .find_by_id(&id)
        .await
        .map_err(|e| {
            error!(error = %e, "failed to load project");
            map_catalog_error(e)
        })?
        .ok_or_else(|| map_catalog_error(CatalogError::not_found(id)))?;

    Ok(Json(project.into()))
}

/// PATCH /api/projects/{id} - Partially update a project
#[utoipa::path(
    patch,
    path = "/api/projects/{id}",
    params(("id" = Uuid, Path, description = "Project ID")),
    request_body = UpdateProjectRequest,
    responses(
        (status = 200, description = "Project updated", body = ProjectResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "projects"
)]
#[instrument(skip(state, request), fields(id = %id))]
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateProjectRequest>,
) -> Result<Json<ProjectResponse>, Response> {
    let mut project = state
        .project_repository
        .find_by_id(&id)
        .await
        .map_err(|e| {
            error!(error = %e, "failed to load project");
            map_catalog_error(e)
        })?
        .ok_or_else(|| map_catalog_error(CatalogError::not_found(id)))?;

    project.apply(request.into()).map_err(map_catalog_error)?;

    state
        .project_repository
        .update(&project)
        .await
        .map_err(|e| {
            error!(error = %e, "failed to update project");
            map_catalog_error(e)
        })?;

    info!(id = %id, "project updated");
    Ok(Json(project.into()))
}

/// DELETE /api/projects/{id} - Delete a project
#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    params(("id" = Uuid, Path, description = "Project ID")),
    responses(
        (status = 204, description = "Project deleted"),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "projects"
)]
#[instrument(skip(state), fields(id = %id))]
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, Response> {
    state.project_repository.delete(&id).await.map_err(|e| {
        error!(error = %e, "failed to delete project");
        map_catalog_error(e)
    })?;

    info!(id = %id, "project deleted");
    Ok(StatusCode::NO_CONTENT)
}
