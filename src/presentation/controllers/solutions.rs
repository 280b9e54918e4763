//! Enterprise solution API controllers

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Json, Response};
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::domain::catalog::{CatalogError, EnterpriseSolution};
use crate::presentation::controllers::{AppState, map_catalog_error};
use crate::presentation::models::{
    CategoryScopeParams, CreateEnterpriseSolutionRequest, EnterpriseSolutionResponse,
    ErrorResponse, UpdateEnterpriseSolutionRequest,
};

/// POST /api/enterprise-solutions - Create an enterprise solution
#[utoipa::path(
    post,
    path = "/api/enterprise-solutions",
    request_body = CreateEnterpriseSolutionRequest,
    responses(
        (status = 201, description = "Solution created", body = EnterpriseSolutionResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "enterprise-solutions"
)]
#[instrument(skip(state, request), fields(name = %request.name))]
pub async fn create_solution(
    State(state): State<AppState>,
    Json(request): Json<CreateEnterpriseSolutionRequest>,
) -> Result<(StatusCode, Json<EnterpriseSolutionResponse>), Response> {
    let solution = EnterpriseSolution::new(request.into()).map_err(map_catalog_error)?;

    state
        .solution_repository
        .create(&solution)
        .await
        .map_err(|e| {
            error!(error = %e, "failed to create enterprise solution");
            map_catalog_error(e)
        })?;

    info!(id = %solution.id, "enterprise solution created");
    Ok((StatusCode::CREATED, Json(solution.into())))
}

/// GET /api/enterprise-solutions - List solutions, optionally scoped to a
/// category
#[utoipa::path(
    get,
    path = "/api/enterprise-solutions",
    params(CategoryScopeParams),
    responses(
        (status = 200, description = "Solutions retrieved", body = [EnterpriseSolutionResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "enterprise-solutions"
)]
#[instrument(skip(state, params))]
pub async fn list_solutions(
    State(state): State<AppState>,
    Query(params): Query<CategoryScopeParams>,
) -> Result<Json<Vec<EnterpriseSolutionResponse>>, Response> {
    let category = params
        .category
        .as_deref()
        .filter(|c| !c.trim().is_empty());

    let solutions = match category {
        Some(category) => state.solution_repository.find_by_category(category).await,
        None => state.solution_repository.find_all().await,
    }
    .map_err(|e| {
        error!(error = %e, "failed to list enterprise solutions");
        map_catalog_error(e)
    })?;

    Ok(Json(
        solutions
            .into_iter()
            .map(EnterpriseSolutionResponse::from)
            .collect(),
    ))
}

/// GET /api/enterprise-solutions/{id} - Get a solution
#[utoipa::path(
    get,
    path = "/api/enterprise-solutions/{id}",
    params(("id" = Uuid, Path, description = "Solution ID")),
    responses(
        (status = 200, description = "Solution found", body = EnterpriseSolutionResponse),
        (status = 404, description = "Solution not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "enterprise-solutions"
)]
#[instrument(skip(state), fields(id = %id))]
pub async fn get_solution(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EnterpriseSolutionResponse>, Response> {
    let solution = state
        .solution_repository
        .find_by_id(&id)
        .await
        .map_err(|e| {
            error!(error = %e, "failed to load enterprise solution");
            map_catalog_error(e)
        })?
        .ok_or_else(|| map_catalog_error(CatalogError::not_found(id)))?;

    Ok(Json(solution.into()))
}

/// PATCH /api/enterprise-solutions/{id} - Partially update a solution
#[utoipa::path(
    patch,
    path = "/api/enterprise-solutions/{id}",
    params(("id" = Uuid, Path, description = "Solution ID")),
    request_body = UpdateEnterpriseSolutionRequest,
    responses(
        (status = 200, description = "Solution updated", body = EnterpriseSolutionResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Solution not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "enterprise-solutions"
)]
#[instrument(skip(state, request), fields(id = %id))]
pub async fn update_solution(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateEnterpriseSolutionRequest>,
) -> Result<Json<EnterpriseSolutionResponse>, Response> {
    let mut solution = state
        .solution_repository
        .find_by_id(&id)
        .await
        .map_err(|e| {
            error!(error = %e, "failed to load enterprise solution");
            map_catalog_error(e)
        })?
        .ok_or_else(|| map_catalog_error(CatalogError::not_found(id)))?;

    solution.apply(request.into()).map_err(map_catalog_error)?;

    state
        .solution_repository
        .update(&solution)
        .await
        .map_err(|e| {
            error!(error = %e, "failed to update enterprise solution");
            map_catalog_error(e)
        })?;

    info!(id = %id, "enterprise solution updated");
    Ok(Json(solution.into()))
}

/// DELETE /api/enterprise-solutions/{id} - Delete a solution
#[utoipa::path(
    delete,
    path = "/api/enterprise-solutions/{id}",
    params(("id" = Uuid, Path, description = "Solution ID")),
    responses(
        (status = 204, description = "Solution deleted"),
        (status = 404, description = "Solution not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "enterprise-solutions"
)]
#[instrument(skip(state), fields(id = %id))]
pub async fn delete_solution(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, Response> {
    state.solution_repository.delete(&id).await.map_err(|e| {
        error!(error = %e, "failed to delete enterprise solution");
        map_catalog_error(e)
    })?;

    info!(id = %id, "enterprise solution deleted");
    Ok(StatusCode::NO_CONTENT)
}
