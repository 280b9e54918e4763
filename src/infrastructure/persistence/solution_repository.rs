//! SQLx implementation of the enterprise solution repository

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::Row;
use sqlx::sqlite::{SqlitePool, SqliteRow};
use uuid::Uuid;

use super::storage_error;
use crate::domain::catalog::{CatalogError, EnterpriseSolution, IEnterpriseSolutionRepository};

const SOLUTION_COLUMNS: &str = "id, category, name, description, website_url, \
     cncf_project_used, additional_info, subcategories, created_at, updated_at";

/// SQLx implementation of the enterprise solution repository
pub struct SqlxEnterpriseSolutionRepository {
    pool: Arc<SqlitePool>,
}

impl SqlxEnterpriseSolutionRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

fn map_row(row: &SqliteRow) -> Result<EnterpriseSolution, CatalogError> {
    let id: String = row.try_get("id").map_err(storage_error)?;
    let id = Uuid::parse_str(&id)
        .map_err(|e| CatalogError::database(format!("invalid solution id {}: {}", id, e)))?;

    let subcategories: String = row.try_get("subcategories").map_err(storage_error)?;
    let subcategories: Vec<String> = serde_json::from_str(&subcategories)
        .map_err(|e| CatalogError::database(format!("corrupt subcategories column: {}", e)))?;

    Ok(EnterpriseSolution {
        id,
        category: row.try_get("category").map_err(storage_error)?,
        name: row.try_get("name").map_err(storage_error)?,
        description: row.try_get("description").map_err(storage_error)?,
        website_url: row.try_get("website_url").map_err(storage_error)?,
        cncf_project_used: row.try_get("cncf_project_used").map_err(storage_error)?,
        additional_info: row.try_get("additional_info").map_err(storage_error)?,
        subcategories,
        created_at: row.try_get("created_at").map_err(storage_error)?,
        updated_at: row.try_get("updated_at").map_err(storage_error)?,
    })
}

fn encode_subcategories(subcategories: &[String]) -> Result<String, CatalogError> {
    serde_json::to_string(subcategories)
        .map_err(|e| CatalogError::database(format!("failed to encode subcategories: {}", e)))
}

#[async_trait]
impl IEnterpriseSolutionRepository for SqlxEnterpriseSolutionRepository {
    #[tracing::instrument(skip(self, solution), fields(name = %solution.name))]
    async fn create(&self, solution: &EnterpriseSolution) -> Result<(), CatalogError> {
        let subcategories = encode_subcategories(&solution.subcategories)?;

        sqlx::query(
            "INSERT INTO enterprise_solutions (id, category, name, description, website_url, \
             cncf_project_used, additional_info, subcategories, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        )
        .bind(solution.id.to_string())
        .bind(&solution.category)
        .bind(&solution.name)
        .bind(&solution.description)
        .bind(&solution.website_url)
        .bind(&solution.cncf_project_used)
        .bind(&solution.additional_info)
        .bind(subcategories)
        .bind(solution.created_at)
        .bind(solution.updated_at)
        .execute(&*self.pool)
        .await
        .map_err(storage_error)?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<EnterpriseSolution>, CatalogError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM enterprise_solutions ORDER BY name ASC",
            SOLUTION_COLUMNS
        ))
        .fetch_all(&*self.pool)
        .await
        .map_err(storage_error)?;

        rows.iter().map(map_row).collect()
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<EnterpriseSolution>, CatalogError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM enterprise_solutions WHERE category = ?1 ORDER BY name ASC",
            SOLUTION_COLUMNS
        ))
        .bind(category)
        .fetch_all(&*self.pool)
        .await
        .map_err(storage_error)?;

        rows.iter().map(map_row).collect()
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<EnterpriseSolution>, CatalogError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM enterprise_solutions WHERE id = ?1",
            SOLUTION_COLUMNS
        ))
        .bind(id.to_string())
        .fetch_optional(&*self.pool)
        .await
        .map_err(storage_error)?;

        row.as_ref().map(map_row).transpose()
    }

    #[tracing::instrument(skip(self, solution), fields(id = %solution.id))]
    async fn update(&self, solution: &EnterpriseSolution) -> Result<(), CatalogError> {
        let subcategories = encode_subcategories(&solution.subcategories)?;

        let result = sqlx::query(
            "UPDATE enterprise_solutions SET category = ?2, name = ?3, description = ?4, \
             website_url = ?5, cncf_project_used = ?6, additional_info = ?7, \
             subcategories = ?8, updated_at = ?9 \
             WHERE id = ?1",
        )
        .bind(solution.id.to_string())
        .bind(&solution.category)
        .bind(&solution.name)
        .bind(&solution.description)
        .bind(&solution.website_url)
        .bind(&solution.cncf_project_used)
        .bind(&solution.additional_info)
        .bind(subcategories)
        .bind(solution.updated_at)
        .execute(&*self.pool)
        .await
        .map_err(storage_error)?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::not_found(solution.id));
        }

        Ok(())
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: &Uuid) -> Result<(), CatalogError> {
        let result = sqlx::query("DELETE FROM enterprise_solutions WHERE id = ?1")
            .bind(id.to_string())
            .execute(&*self.pool)
            .await
            .map_err(storage_error)?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::not_found(id));
        }

        Ok(())
    }
}
