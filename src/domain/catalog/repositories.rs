//! Catalog repository traits

use async_trait::async_trait;
use uuid::Uuid;

use super::entities::{EnterpriseSolution, Project};
use super::errors::CatalogError;
use super::value_objects::ProjectFilter;

/// Project persistence operations
#[async_trait]
pub trait IProjectRepository: Send + Sync {
    /// Persist a new project
    async fn create(&self, project: &Project) -> Result<(), CatalogError>;

    /// List projects matching the filter, sorted by name ascending
    async fn find_all(&self, filter: &ProjectFilter) -> Result<Vec<Project>, CatalogError>;

    /// Find a project by id
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Project>, CatalogError>;

    /// Persist an updated project; `NotFound` if the id does not exist
    async fn update(&self, project: &Project) -> Result<(), CatalogError>;

    /// Delete a project by id; `NotFound` if the id does not exist
    async fn delete(&self, id: &Uuid) -> Result<(), CatalogError>;

    /// Insert-or-update each record keyed by `name`, keeping existing ids
    /// and creation timestamps. Returns the batch size.
    async fn upsert_by_name(&self, projects: &[Project]) -> Result<usize, CatalogError>;

    /// Distinct category names, sorted
    async fn distinct_categories(&self) -> Result<Vec<String>, CatalogError>;

    /// Distinct maturity levels, sorted, blanks excluded
    async fn distinct_maturity_levels(&self) -> Result<Vec<String>, CatalogError>;

    /// Distinct non-blank subcategories, sorted, optionally scoped to a
    /// category
    async fn distinct_subcategories(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<String>, CatalogError>;
}

/// Enterprise solution persistence operations
#[async_trait]
pub trait IEnterpriseSolutionRepository: Send + Sync {
    /// Persist a new solution
    async fn create(&self, solution: &EnterpriseSolution) -> Result<(), CatalogError>;

    /// List all solutions, sorted by name ascending
    async fn find_all(&self) -> Result<Vec<EnterpriseSolution>, CatalogError>;

    /// List solutions in a category, sorted by name ascending
    async fn find_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<EnterpriseSolution>, CatalogError>;

    /// Find a solution by id
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<EnterpriseSolution>, CatalogError>;

    /// Persist an updated solution; `NotFound` if the id does not exist
    async fn update(&self, solution: &EnterpriseSolution) -> Result<(), CatalogError>;

    /// Delete a solution by id; `NotFound` if the id does not exist
    async fn delete(&self, id: &Uuid) -> Result<(), CatalogError>;
}
