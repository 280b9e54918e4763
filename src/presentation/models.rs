//! API request and response models
//!
//! The wire format uses camelCase field names, matching the catalog UI's
//! existing contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::domain::catalog::{
    EnterpriseSolution, MaturityLevel, Project, ProjectChanges, ProjectExtra, ProjectFilter,
    ProjectRecord, SolutionChanges, SolutionRecord,
};

/// Request body for creating a project
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    #[schema(example = "Kubernetes")]
    pub name: String,

    #[schema(example = "Orchestration & Management")]
    pub category: String,

    #[schema(example = "Scheduling & Orchestration")]
    pub subcategory: Option<String>,

    pub maturity_level: MaturityLevel,

    pub github_stars: Option<i64>,
    pub last_updated: Option<DateTime<Utc>>,
    pub homepage_url: Option<String>,
    pub repo_url: Option<String>,
    pub logo: Option<String>,
    pub description: Option<String>,
    pub extra: Option<ProjectExtra>,
}

impl From<CreateProjectRequest> for ProjectRecord {
    fn from(request: CreateProjectRequest) -> Self {
        Self {
            name: request.name,
            category: request.category,
            subcategory: request.subcategory,
            maturity_level: request.maturity_level,
            github_stars: request.github_stars,
            last_updated: request.last_updated,
            homepage_url: request.homepage_url,
            repo_url: request.repo_url,
            logo: request.logo,
            description: request.description,
            extra: request.extra,
        }
    }
}

/// Partial project update; absent fields are left unchanged
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub maturity_level: Option<MaturityLevel>,
    pub github_stars: Option<i64>,
    pub last_updated: Option<DateTime<Utc>>,
    pub homepage_url: Option<String>,
    pub repo_url: Option<String>,
    pub logo: Option<String>,
    pub description: Option<String>,
    pub extra: Option<ProjectExtra>,
}

impl From<UpdateProjectRequest> for ProjectChanges {
    fn from(request: UpdateProjectRequest) -> Self {
        Self {
            name: request.name,
            category: request.category,
            subcategory: request.subcategory,
            maturity_level: request.maturity_level,
            github_stars: request.github_stars,
            last_updated: request.last_updated,
            homepage_url: request.homepage_url,
            repo_url: request.repo_url,
            logo: request.logo,
            description: request.description,
            extra: request.extra,
        }
    }
}

/// Query filters for project listing; blank values act as wildcards
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFilterParams {
    pub maturity_level: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
}

impl From<ProjectFilterParams> for ProjectFilter {
    fn from(params: ProjectFilterParams) -> Self {
        Self {
            maturity_level: params.maturity_level,
            category: params.category,
            subcategory: params.subcategory,
        }
    }
}

/// Optional category scope for distinct-value and listing queries
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct CategoryScopeParams {
    pub category: Option<String>,
}

/// Wire form of a project
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub maturity_level: MaturityLevel,
    pub github_stars: Option<i64>,
    pub last_updated: Option<DateTime<Utc>>,
    pub homepage_url: Option<String>,
    pub repo_url: Option<String>,
    pub logo: Option<String>,
    pub description: Option<String>,
    pub extra: Option<ProjectExtra>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            name: project.name,
            category: project.category,
            subcategory: project.subcategory,
            maturity_level: project.maturity_level,
            github_stars: project.github_stars,
            last_updated: project.last_updated,
            homepage_url: project.homepage_url,
            repo_url: project.repo_url,
            logo: project.logo,
            description: project.description,
            extra: project.extra,
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}

/// Request body for creating an enterprise solution
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnterpriseSolutionRequest {
    #[schema(example = "Observability and Analysis")]
    pub category: String,

    #[schema(example = "Acme Observability Suite")]
    pub name: String,

    pub description: Option<String>,
    pub website_url: Option<String>,

    /// The CNCF project this solution builds on
    #[schema(example = "OpenTelemetry")]
    pub cncf_project_used: Option<String>,

    pub additional_info: Option<String>,

    /// Subcategories this solution applies to; empty means all
    pub subcategories: Option<Vec<String>>,
}

impl From<CreateEnterpriseSolutionRequest> for SolutionRecord {
    fn from(request: CreateEnterpriseSolutionRequest) -> Self {
        Self {
            category: request.category,
            name: request.name,
            description: request.description,
            website_url: request.website_url,
            cncf_project_used: request.cncf_project_used,
            additional_info: request.additional_info,
            subcategories: request.subcategories.unwrap_or_default(),
        }
    }
}

/// Partial enterprise solution update; absent fields are left unchanged
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEnterpriseSolutionRequest {
    pub category: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub website_url: Option<String>,
    pub cncf_project_used: Option<String>,
    pub additional_info: Option<String>,
    pub subcategories: Option<Vec<String>>,
}

impl From<UpdateEnterpriseSolutionRequest> for SolutionChanges {
    fn from(request: UpdateEnterpriseSolutionRequest) -> Self {
        Self {
            category: request.category,
            name: request.name,
            description: request.description,
            website_url: request.website_url,
            cncf_project_used: request.cncf_project_used,
            additional_info: request.additional_info,
            subcategories: request.subcategories,
        }
    }
}

/// Wire form of an enterprise solution
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnterpriseSolutionResponse {
    pub id: Uuid,
    pub category: String,
    pub name: String,
    pub description: Option<String>,
    pub website_url: Option<String>,
    pub cncf_project_used: Option<String>,
    pub additional_info: Option<String>,
    pub subcategories: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<EnterpriseSolution> for EnterpriseSolutionResponse {
    fn from(solution: EnterpriseSolution) -> Self {
        Self {
            id: solution.id,
            category: solution.category,
            name: solution.name,
            description: solution.description,
            website_url: solution.website_url,
            cncf_project_used: solution.cncf_project_used,
            additional_info: solution.additional_info,
            subcategories: solution.subcategories,
            created_at: solution.created_at,
            updated_at: solution.updated_at,
        }
    }
}

/// Result of a full landscape sync
#[derive(Debug, Serialize, ToSchema)]
pub struct SyncResponse {
    #[schema(example = "Projects synced successfully")]
    pub message: String,

    /// Records submitted to the store (equals the batch size)
    pub imported: usize,

    /// Records updated in the store (equals the batch size)
    pub updated: usize,
}

/// Result of a fetch-only landscape probe
#[derive(Debug, Serialize, ToSchema)]
pub struct FetchResponse {
    #[schema(example = "Landscape YAML data fetched successfully")]
    pub message: String,

    /// Number of top-level categories in the fetched document
    pub categories: usize,
}

/// Error response model
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Machine-readable error code
    #[schema(example = "NOT_FOUND")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Record not found: 550e8400-e29b-41d4-a716-446655440000")]
    pub message: String,

    /// Additional error context
    pub details: Option<serde_json::Value>,

    /// Unique request identifier for tracking and support
    pub request_id: Uuid,

    /// Error occurrence timestamp
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
            request_id: Uuid::new_v4(),
            timestamp: Utc::now(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,

    #[schema(example = "0.1.0")]
    pub version: String,

    pub timestamp: DateTime<Utc>,

    pub uptime_seconds: u64,
}
