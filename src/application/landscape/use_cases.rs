//! Fetch-and-sync use cases over the landscape source

use std::sync::Arc;

use chrono::Utc;

use crate::domain::catalog::{CatalogError, IProjectRepository, Project};
use crate::infrastructure::landscape::{LandscapeClient, LandscapeError, flatten_document};

/// Outcome of a full landscape sync
#[derive(Debug, Clone, Copy)]
pub struct SyncOutcome {
    pub imported: usize,
    pub updated: usize,
}

/// Errors from the sync pipeline
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error(transparent)]
    Source(#[from] LandscapeError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Fetch the landscape document, flatten it, and upsert the records.
///
/// A fetch failure aborts the whole sync before anything is written.
/// Records already in the store but absent from the fetched document are
/// left untouched.
pub struct SyncLandscapeUseCase {
    client: Arc<LandscapeClient>,
    project_repository: Arc<dyn IProjectRepository>,
}

impl SyncLandscapeUseCase {
    pub fn new(
        client: Arc<LandscapeClient>,
        project_repository: Arc<dyn IProjectRepository>,
    ) -> Self {
        Self {
            client,
            project_repository,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self) -> Result<SyncOutcome, SyncError> {
        let document = self.client.fetch_and_parse().await?;

        let imported_at = Utc::now();
        let records = flatten_document(&document, imported_at);

        let mut projects = Vec::with_capacity(records.len());
        for record in records {
            match Project::new(record) {
                Ok(project) => projects.push(project),
                // Malformed entries never abort the batch
                Err(e) => tracing::debug!(error = %e, "skipping landscape record"),
            }
        }

        let count = self.project_repository.upsert_by_name(&projects).await?;
        tracing::info!(count, "synced landscape projects to the catalog");

        // The store cannot cheaply split inserts from updates; both counts
        // report the batch size, matching the published API contract.
        Ok(SyncOutcome {
            imported: count,
            updated: count,
        })
    }
}

/// Fetch and parse only, without touching the store
pub struct FetchLandscapeUseCase {
    client: Arc<LandscapeClient>,
}

impl FetchLandscapeUseCase {
    pub fn new(client: Arc<LandscapeClient>) -> Self {
        Self { client }
    }

    /// Returns the number of top-level categories in the fetched document
    #[tracing::instrument(skip(self))]
    pub async fn execute(&self) -> Result<usize, LandscapeError> {
        let document = self.client.fetch_and_parse().await?;
        Ok(document.category_count())
    }
}
