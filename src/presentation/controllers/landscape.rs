//! Landscape import API controllers

use axum::http::StatusCode;
use axum::extract::State;
use axum::response::{IntoResponse, Json, Response};
use tracing::{error, info, instrument};

use crate::application::landscape::SyncError;
use crate::infrastructure::landscape::LandscapeError;
use crate::presentation::controllers::{AppState, map_catalog_error};
use crate::presentation::models::{ErrorResponse, FetchResponse, SyncResponse};

/// POST /api/landscape/sync - Fetch the landscape and upsert every
/// project into the catalog
#[utoipa::path(
    post,
    path = "/api/landscape/sync",
    responses(
        (status = 200, description = "Projects synced", body = SyncResponse),
        (status = 502, description = "All landscape source URLs failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "landscape"
)]
#[instrument(skip(state))]
pub async fn sync_landscape(
    State(state): State<AppState>,
) -> Result<Json<SyncResponse>, Response> {
    let outcome = state.sync_landscape.execute().await.map_err(|e| {
        error!(error = %e, "landscape sync failed");
        map_sync_error(e)
    })?;

    info!(imported = outcome.imported, "landscape sync completed");
    Ok(Json(SyncResponse {
        message: "Projects synced successfully".to_string(),
        imported: outcome.imported,
        updated: outcome.updated,
    }))
}

/// GET /api/landscape/fetch - Fetch and parse the landscape without
/// persisting anything
#[utoipa::path(
    get,
    path = "/api/landscape/fetch",
    responses(
        (status = 200, description = "Landscape fetched", body = FetchResponse),
        (status = 502, description = "All landscape source URLs failed", body = ErrorResponse)
    ),
    tag = "landscape"
)]
#[instrument(skip(state))]
pub async fn fetch_landscape(
    State(state): State<AppState>,
) -> Result<Json<FetchResponse>, Response> {
    let categories = state.fetch_landscape.execute().await.map_err(|e| {
        error!(error = %e, "landscape fetch failed");
        map_landscape_error(e)
    })?;

    Ok(Json(FetchResponse {
        message: "Landscape YAML data fetched successfully".to_string(),
        categories,
    }))
}

/// Map a landscape source error onto the wire error contract.
///
/// Per-URL failures never escape the fetch loop, so everything that
/// reaches here means the source as a whole was unavailable.
fn map_landscape_error(error: LandscapeError) -> Response {
    (
        StatusCode::BAD_GATEWAY,
        Json(ErrorResponse::new("SOURCE_UNAVAILABLE", error.to_string())),
    )
        .into_response()
}

fn map_sync_error(error: SyncError) -> Response {
    match error {
        SyncError::Source(e) => map_landscape_error(e),
        SyncError::Catalog(e) => map_catalog_error(e),
    }
}
