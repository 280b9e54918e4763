//! SQLx implementation of the project repository

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::{QueryBuilder, Row};
use uuid::Uuid;

use super::storage_error;
use crate::domain::catalog::{
    CatalogError, IProjectRepository, MaturityLevel, Project, ProjectExtra, ProjectFilter,
};

const PROJECT_COLUMNS: &str = "id, name, category, subcategory, maturity_level, github_stars, \
     last_updated, homepage_url, repo_url, logo, description, extra, created_at, updated_at";

const UPSERT_PROJECT_SQL: &str = "INSERT INTO projects (id, name, category, subcategory, \
     maturity_level, github_stars, last_updated, homepage_url, repo_url, logo, description, \
     extra, created_at, updated_at) \
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14) \
     ON CONFLICT(name) DO UPDATE SET \
     category = excluded.category, subcategory = excluded.subcategory, \
     maturity_level = excluded.maturity_level, github_stars = excluded.github_stars, \
     last_updated = excluded.last_updated, homepage_url = excluded.homepage_url, \
     repo_url = excluded.repo_url, logo = excluded.logo, description = excluded.description, \
     extra = excluded.extra, updated_at = excluded.updated_at";

/// SQLx implementation of the project repository
pub struct SqlxProjectRepository {
    pool: Arc<SqlitePool>,
}

impl SqlxProjectRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

fn map_row(row: &SqliteRow) -> Result<Project, CatalogError> {
    let id: String = row.try_get("id").map_err(storage_error)?;
    let id = Uuid::parse_str(&id)
        .map_err(|e| CatalogError::database(format!("invalid project id {}: {}", id, e)))?;

    let maturity_level: String = row.try_get("maturity_level").map_err(storage_error)?;
    let maturity_level = MaturityLevel::from_str(&maturity_level)
        .map_err(|e| CatalogError::database(format!("corrupt maturity_level column: {}", e)))?;

    let extra: Option<String> = row.try_get("extra").map_err(storage_error)?;
    let extra: Option<ProjectExtra> = extra
        .map(|json| {
            serde_json::from_str(&json)
                .map_err(|e| CatalogError::database(format!("corrupt extra column: {}", e)))
        })
        .transpose()?;

    Ok(Project {
        id,
        name: row.try_get("name").map_err(storage_error)?,
        category: row.try_get("category").map_err(storage_error)?,
        subcategory: row.try_get("subcategory").map_err(storage_error)?,
        maturity_level,
        github_stars: row.try_get("github_stars").map_err(storage_error)?,
        last_updated: row
            .try_get::<Option<DateTime<Utc>>, _>("last_updated")
            .map_err(storage_error)?,
        homepage_url: row.try_get("homepage_url").map_err(storage_error)?,
        repo_url: row.try_get("repo_url").map_err(storage_error)?,
        logo: row.try_get("logo").map_err(storage_error)?,
        description: row.try_get("description").map_err(storage_error)?,
        extra,
        created_at: row.try_get("created_at").map_err(storage_error)?,
        updated_at: row.try_get("updated_at").map_err(storage_error)?,
    })
}

fn encode_extra(extra: Option<&ProjectExtra>) -> Result<Option<String>, CatalogError> {
    extra
        .map(|e| {
            serde_json::to_string(e)
                .map_err(|err| CatalogError::database(format!("failed to encode extra: {}", err)))
        })
        .transpose()
}

fn map_write_error(e: sqlx::Error, name: &str) -> CatalogError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return CatalogError::validation(format!("project name '{}' already exists", name));
        }
    }
    storage_error(e)
}

#[async_trait]
impl IProjectRepository for SqlxProjectRepository {
    #[tracing::instrument(skip(self, project), fields(name = %project.name))]
    async fn create(&self, project: &Project) -> Result<(), CatalogError> {
        let extra = encode_extra(project.extra.as_ref())?;

        sqlx::query(
            "INSERT INTO projects (id, name, category, subcategory, maturity_level, \
             github_stars, last_updated, homepage_url, repo_url, logo, description, extra, \
             created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
        )
        .bind(project.id.to_string())
        .bind(&project.name)
        .bind(&project.category)
        .bind(&project.subcategory)
        .bind(project.maturity_level.as_str())
        .bind(project.github_stars)
        .bind(project.last_updated)
        .bind(&project.homepage_url)
        .bind(&project.repo_url)
        .bind(&project.logo)
        .bind(&project.description)
        .bind(extra)
        .bind(project.created_at)
        .bind(project.updated_at)
        .execute(&*self.pool)
        .await
        .map_err(|e| map_write_error(e, &project.name))?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn find_all(&self, filter: &ProjectFilter) -> Result<Vec<Project>, CatalogError> {
        let mut query: QueryBuilder<sqlx::Sqlite> =
            QueryBuilder::new(format!("SELECT {} FROM projects", PROJECT_COLUMNS));

        let clauses = [
            ("maturity_level", filter.maturity_level()),
            ("category", filter.category()),
            ("subcategory", filter.subcategory()),
        ];

        let mut has_clause = false;
        for (column, value) in clauses {
            let Some(value) = value else { continue };
            query.push(if has_clause { " AND " } else { " WHERE " });
            has_clause = true;
            query.push(column);
            query.push(" = ");
            query.push_bind(value.to_owned());
        }

        query.push(" ORDER BY name ASC");

        let rows = query
            .build()
            .fetch_all(&*self.pool)
            .await
            .map_err(storage_error)?;
        rows.iter().map(map_row).collect()
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Project>, CatalogError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM projects WHERE id = ?1",
            PROJECT_COLUMNS
        ))
        .bind(id.to_string())
        .fetch_optional(&*self.pool)
        .await
        .map_err(storage_error)?;

        row.as_ref().map(map_row).transpose()
    }

    #[tracing::instrument(skip(self, project), fields(id = %project.id))]
    async fn update(&self, project: &Project) -> Result<(), CatalogError> {
        let extra = encode_extra(project.extra.as_ref())?;

        let result = sqlx::query(
            "UPDATE projects SET name = ?2, category = ?3, subcategory = ?4, \
             maturity_level = ?5, github_stars = ?6, last_updated = ?7, homepage_url = ?8, \
             repo_url = ?9, logo = ?10, description = ?11, extra = ?12, updated_at = ?13 \
             WHERE id = ?1",
        )
        .bind(project.id.to_string())
        .bind(&project.name)
        .bind(&project.category)
        .bind(&project.subcategory)
        .bind(project.maturity_level.as_str())
        .bind(project.github_stars)
        .bind(project.last_updated)
        .bind(&project.homepage_url)
        .bind(&project.repo_url)
        .bind(&project.logo)
        .bind(&project.description)
        .bind(extra)
        .bind(project.updated_at)
        .execute(&*self.pool)
        .await
        .map_err(|e| map_write_error(e, &project.name))?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::not_found(project.id));
        }

        Ok(())
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: &Uuid) -> Result<(), CatalogError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?1")
            .bind(id.to_string())
            .execute(&*self.pool)
            .await
            .map_err(storage_error)?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::not_found(id));
        }

        Ok(())
    }

    #[tracing::instrument(skip_all, fields(records = projects.len()))]
    async fn upsert_by_name(&self, projects: &[Project]) -> Result<usize, CatalogError> {
        // Not wrapped in a transaction: a crash mid-batch leaves a
        // partially updated catalog that the next sync repairs.
        for project in projects {
            let extra = encode_extra(project.extra.as_ref())?;

            sqlx::query(UPSERT_PROJECT_SQL)
                .bind(project.id.to_string())
                .bind(&project.name)
                .bind(&project.category)
                .bind(&project.subcategory)
                .bind(project.maturity_level.as_str())
                .bind(project.github_stars)
                .bind(project.last_updated)
                .bind(&project.homepage_url)
                .bind(&project.repo_url)
                .bind(&project.logo)
                .bind(&project.description)
                .bind(extra)
                .bind(project.created_at)
                .bind(project.updated_at)
                .execute(&*self.pool)
                .await
                .map_err(storage_error)?;
        }

        Ok(projects.len())
    }

    #[tracing::instrument(skip(self))]
    async fn distinct_categories(&self) -> Result<Vec<String>, CatalogError> {
        sqlx::query_scalar("SELECT DISTINCT category FROM projects ORDER BY category ASC")
            .fetch_all(&*self.pool)
            .await
            .map_err(storage_error)
    }

    #[tracing::instrument(skip(self))]
    async fn distinct_maturity_levels(&self) -> Result<Vec<String>, CatalogError> {
        sqlx::query_scalar(
            "SELECT DISTINCT maturity_level FROM projects \
             WHERE maturity_level IS NOT NULL AND TRIM(maturity_level) <> '' \
             ORDER BY maturity_level ASC",
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(storage_error)
    }

    #[tracing::instrument(skip(self))]
    async fn distinct_subcategories(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<String>, CatalogError> {
        let mut query: QueryBuilder<sqlx::Sqlite> = QueryBuilder::new(
            "SELECT DISTINCT subcategory FROM projects \
             WHERE subcategory IS NOT NULL AND TRIM(subcategory) <> ''",
        );

        if let Some(category) = category.filter(|c| !c.trim().is_empty()) {
            query.push(" AND category = ");
            query.push_bind(category.to_owned());
        }

        query.push(" ORDER BY subcategory ASC");

        query
            .build_query_scalar()
            .fetch_all(&*self.pool)
            .await
            .map_err(storage_error)
    }
}
