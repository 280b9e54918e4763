//! Catalog bounded context: CNCF projects and enterprise solutions

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod value_objects;

pub use entities::{
    EnterpriseSolution, Project, ProjectChanges, ProjectExtra, ProjectRecord, SolutionChanges,
    SolutionRecord,
};
pub use errors::CatalogError;
pub use repositories::{IEnterpriseSolutionRepository, IProjectRepository};
pub use value_objects::{MaturityLevel, ProjectFilter};
