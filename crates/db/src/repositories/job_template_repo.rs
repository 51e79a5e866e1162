//! Repository for the `job_templates` table.

use careers_core::job::DEFAULT_CURRENCY;
use careers_core::types::DbId;
use sqlx::PgPool;

use crate::models::job_template::{CreateJobTemplate, JobTemplate};

const COLUMNS: &str = "id, name, category, title, type, salary_min, salary_max, currency, \
    location, description, requirements, responsibilities, benefits, created_at";

/// Category assigned when a template is created without one.
pub const DEFAULT_TEMPLATE_CATEGORY: &str = "General";

/// Provides create/list/delete operations for job templates.
pub struct JobTemplateRepo;

impl JobTemplateRepo {
    /// Insert a new template, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateJobTemplate,
    ) -> Result<JobTemplate, sqlx::Error> {
        let query = format!(
            "INSERT INTO job_templates
                (name, category, title, type, salary_min, salary_max, currency, location,
                 description, requirements, responsibilities, benefits)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JobTemplate>(&query)
            .bind(input.name.trim())
            .bind(input.category.as_deref().unwrap_or(DEFAULT_TEMPLATE_CATEGORY))
            .bind(input.title.trim())
            .bind(input.job_type.unwrap_or_default().as_str())
            .bind(input.salary_min.as_deref().unwrap_or(""))
            .bind(input.salary_max.as_deref().unwrap_or(""))
            .bind(input.currency.as_deref().unwrap_or(DEFAULT_CURRENCY))
            .bind(input.location.as_deref().unwrap_or(""))
            .bind(input.description.as_deref().unwrap_or(""))
            .bind(&input.requirements)
            .bind(&input.responsibilities)
            .bind(&input.benefits)
            .fetch_one(pool)
            .await
    }

    /// List all templates, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<JobTemplate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM job_templates ORDER BY created_at DESC, id");
        sqlx::query_as::<_, JobTemplate>(&query)
            .fetch_all(pool)
            .await
    }

    /// Delete a template by ID. Jobs created from it keep their content and
    /// have `template_id` cleared. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM job_templates WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
