//! SQLite persistence via sqlx

pub mod project_repository;
pub mod solution_repository;

pub use project_repository::SqlxProjectRepository;
pub use solution_repository::SqlxEnterpriseSolutionRepository;

use std::time::Duration;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::config::DatabaseConfig;
use crate::domain::catalog::CatalogError;

/// Embedded schema migrations
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Open the connection pool and bring the schema up to date
pub async fn init_pool(config: &DatabaseConfig) -> Result<SqlitePool, CatalogError> {
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .connect(&config.url)
        .await
        .map_err(|e| {
            CatalogError::database(format!("failed to open database {}: {}", config.url, e))
        })?;

    MIGRATOR
        .run(&pool)
        .await
        .map_err(|e| CatalogError::database(format!("failed to run migrations: {}", e)))?;

    Ok(pool)
}

/// Map an sqlx error onto the domain error, logging it once
pub(crate) fn storage_error(e: sqlx::Error) -> CatalogError {
    tracing::error!("database error: {}", e);
    CatalogError::database(e.to_string())
}
