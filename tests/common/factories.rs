//! Test data factories for creating consistent records across test modules
//!
//! These provide sensible defaults while allowing per-test customization
//! through struct update syntax on the returned records.

use cncf_explorer::domain::catalog::{
    EnterpriseSolution, MaturityLevel, Project, ProjectRecord, SolutionRecord,
};

/// Factory for project records and entities
pub struct ProjectFactory;

impl ProjectFactory {
    /// A minimal record in the given category
    pub fn record(name: &str, category: &str) -> ProjectRecord {
        ProjectRecord {
            name: name.to_string(),
            category: category.to_string(),
            ..ProjectRecord::default()
        }
    }

    /// A record nested under a subcategory
    pub fn record_in_subcategory(name: &str, category: &str, subcategory: &str) -> ProjectRecord {
        ProjectRecord {
            subcategory: Some(subcategory.to_string()),
            ..Self::record(name, category)
        }
    }

    /// A persisted-shape entity in the given category
    pub fn project(name: &str, category: &str) -> Project {
        Project::new(Self::record(name, category)).expect("valid project record")
    }

    /// A graduated entity nested under a subcategory
    pub fn graduated(name: &str, category: &str, subcategory: &str) -> Project {
        Project::new(ProjectRecord {
            maturity_level: MaturityLevel::Graduated,
            ..Self::record_in_subcategory(name, category, subcategory)
        })
        .expect("valid project record")
    }
}

/// Factory for enterprise solution records and entities
pub struct SolutionFactory;

impl SolutionFactory {
    pub fn record(name: &str, category: &str) -> SolutionRecord {
        SolutionRecord {
            name: name.to_string(),
            category: category.to_string(),
            ..SolutionRecord::default()
        }
    }

    pub fn solution(name: &str, category: &str) -> EnterpriseSolution {
        EnterpriseSolution::new(Self::record(name, category)).expect("valid solution record")
    }
}
