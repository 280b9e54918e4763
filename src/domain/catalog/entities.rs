//! Catalog domain entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::errors::CatalogError;
use super::value_objects::MaturityLevel;

/// Optional external links carried verbatim from the landscape source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProjectExtra {
    pub github: Option<String>,
    pub url: Option<String>,
    pub twitter: Option<String>,
}

/// A CNCF ecosystem project mirrored from the landscape document.
///
/// `name` is the upsert key: re-importing a name overwrites every other
/// field while keeping the original id and creation timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub maturity_level: MaturityLevel,
    /// Reserved for GitHub enrichment; the importer never populates it
    pub github_stars: Option<i64>,
    /// Set to the import instant by the landscape sync
    pub last_updated: Option<DateTime<Utc>>,
    pub homepage_url: Option<String>,
    pub repo_url: Option<String>,
    pub logo: Option<String>,
    pub description: Option<String>,
    pub extra: Option<ProjectExtra>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Flat project payload, as produced by the importer or a create request
#[derive(Debug, Clone, Default)]
pub struct ProjectRecord {
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
}

/// Partial project update; absent fields keep their current value
#[derive(Debug, Clone, Default)]
pub struct ProjectChanges {
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

impl Project {
    /// Build a new project, assigning an id and store timestamps
    pub fn new(record: ProjectRecord) -> Result<Self, CatalogError> {
        if record.name.trim().is_empty() {
            return Err(CatalogError::validation("project name must not be blank"));
        }
        if record.category.trim().is_empty() {
            return Err(CatalogError::validation("project category must not be blank"));
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: record.name,
            category: record.category,
            subcategory: record.subcategory,
            maturity_level: record.maturity_level,
            github_stars: record.github_stars,
            last_updated: record.last_updated,
            homepage_url: record.homepage_url,
            repo_url: record.repo_url,
            logo: record.logo,
            description: record.description,
            extra: record.extra,
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply a partial update, bumping `updated_at`
    pub fn apply(&mut self, changes: ProjectChanges) -> Result<(), CatalogError> {
        if let Some(name) = changes.name {
            if name.trim().is_empty() {
                return Err(CatalogError::validation("project name must not be blank"));
            }
            self.name = name;
        }
        if let Some(category) = changes.category {
            if category.trim().is_empty() {
                return Err(CatalogError::validation("project category must not be blank"));
            }
            self.category = category;
        }
        if let Some(subcategory) = changes.subcategory {
            self.subcategory = Some(subcategory);
        }
        if let Some(maturity_level) = changes.maturity_level {
            self.maturity_level = maturity_level;
        }
        if let Some(github_stars) = changes.github_stars {
            self.github_stars = Some(github_stars);
        }
        if let Some(last_updated) = changes.last_updated {
            self.last_updated = Some(last_updated);
        }
        if let Some(homepage_url) = changes.homepage_url {
            self.homepage_url = Some(homepage_url);
        }
        if let Some(repo_url) = changes.repo_url {
            self.repo_url = Some(repo_url);
        }
        if let Some(logo) = changes.logo {
            self.logo = Some(logo);
        }
        if let Some(description) = changes.description {
            self.description = Some(description);
        }
        if let Some(extra) = changes.extra {
            self.extra = Some(extra);
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}

/// A user-curated vendor offering attached to a catalog category.
///
/// An empty `subcategories` list means the solution applies to every
/// subcategory of its category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnterpriseSolution {
    pub id: Uuid,
    pub category: String,
    pub name: String,
    pub description: Option<String>,
    pub website_url: Option<String>,
    /// The CNCF project this solution builds on (e.g. "OpenTelemetry")
    pub cncf_project_used: Option<String>,
    pub additional_info: Option<String>,
    pub subcategories: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating an enterprise solution
#[derive(Debug, Clone, Default)]
pub struct SolutionRecord {
    pub category: String,
    pub name: String,
    pub description: Option<String>,
    pub website_url: Option<String>,
    pub cncf_project_used: Option<String>,
    pub additional_info: Option<String>,
    pub subcategories: Vec<String>,
}

/// Partial enterprise solution update
#[derive(Debug, Clone, Default)]
pub struct SolutionChanges {
    pub category: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub website_url: Option<String>,
    pub cncf_project_used: Option<String>,
    pub additional_info: Option<String>,
    pub subcategories: Option<Vec<String>>,
}

impl EnterpriseSolution {
    /// Build a new solution, assigning an id and store timestamps
    pub fn new(record: SolutionRecord) -> Result<Self, CatalogError> {
        if record.name.trim().is_empty() {
            return Err(CatalogError::validation("solution name must not be blank"));
        }
        if record.category.trim().is_empty() {
            return Err(CatalogError::validation(
                "solution category must not be blank",
            ));
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            category: record.category,
            name: record.name,
            description: record.description,
            website_url: record.website_url,
            cncf_project_used: record.cncf_project_used,
            additional_info: record.additional_info,
            subcategories: record.subcategories,
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply a partial update, bumping `updated_at`
    pub fn apply(&mut self, changes: SolutionChanges) -> Result<(), CatalogError> {
        if let Some(name) = changes.name {
            if name.trim().is_empty() {
                return Err(CatalogError::validation("solution name must not be blank"));
            }
            self.name = name;
        }
        if let Some(category) = changes.category {
            if category.trim().is_empty() {
                return Err(CatalogError::validation(
                    "solution category must not be blank",
                ));
            }
            self.category = category;
        }
        if let Some(description) = changes.description {
            self.description = Some(description);
        }
        if let Some(website_url) = changes.website_url {
            self.website_url = Some(website_url);
        }
        if let Some(cncf_project_used) = changes.cncf_project_used {
            self.cncf_project_used = Some(cncf_project_used);
        }
        if let Some(additional_info) = changes.additional_info {
            self.additional_info = Some(additional_info);
        }
        if let Some(subcategories) = changes.subcategories {
            self.subcategories = subcategories;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Whether this solution should be shown alongside a project.
    ///
    /// Matches when the categories are equal, or `cncf_project_used` is a
    /// case-insensitive substring of the project name. A solution that
    /// restricts itself to specific subcategories never matches a project
    /// outside them, including projects without any subcategory.
    pub fn applies_to(&self, project: &Project) -> bool {
        let category_match = self.category == project.category;

        let project_match = self.cncf_project_used.as_deref().is_some_and(|used| {
            !used.trim().is_empty()
                && project.name.to_lowercase().contains(&used.to_lowercase())
        });

        let subcategory_match = if self.subcategories.is_empty() {
            true
        } else {
            project
                .subcategory
                .as_deref()
                .is_some_and(|sub| self.subcategories.iter().any(|s| s == sub))
        };

        (category_match || project_match) && subcategory_match
    }
}
