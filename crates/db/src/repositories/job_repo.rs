//! Repository for the `jobs` table.

use careers_core::job::{default_meta_description, ClosureReason, JobStatus};
use careers_core::slug::{generate_slug, next_available_slug};
use careers_core::types::DbId;
use sqlx::PgPool;

use crate::models::job::{CreateJob, Job, JobFilter, UpdateJob};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, slug, title, type, salary_min, salary_max, currency, location, color, \
    description, requirements, responsibilities, benefits, status, closure_reason, \
    application_deadline, category, meta_title, meta_description, template_id, \
    status_changed_at, created_at, updated_at";

/// Advisory lock key serializing slug allocation across all job creates.
///
/// One title's suffixed slug (`role-2`) can be another title's base slug, so
/// a per-base lock is not enough.
const SLUG_LOCK_KEY: &str = "jobs.slug";

/// Live application count for the row in scope.
const APPLICATIONS_COUNT: &str =
    "(SELECT COUNT(*) FROM applications a WHERE a.job_id = jobs.id) AS applications_count";

/// Provides CRUD operations for job postings.
pub struct JobRepo;

impl JobRepo {
    /// Insert a new job, allocating a unique slug from its title.
    ///
    /// Slug allocation runs in a transaction holding a table-wide advisory
    /// lock, so concurrent creates serialize and receive `base`, `base-2`, ...
    /// in turn even when their titles differ.
    pub async fn create(pool: &PgPool, input: &CreateJob) -> Result<Job, sqlx::Error> {
        let title = input.title.trim();
        let base = generate_slug(title);

        let mut tx = pool.begin().await?;

        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1))")
            .bind(SLUG_LOCK_KEY)
            .execute(&mut *tx)
            .await?;

        let taken: Vec<String> =
            sqlx::query_scalar("SELECT slug FROM jobs WHERE slug = $1 OR slug LIKE $2")
                .bind(&base)
                .bind(format!("{base}-%"))
                .fetch_all(&mut *tx)
                .await?;
        let slug = next_available_slug(&base, &taken);

        let description = input.description.as_deref().unwrap_or("");
        let meta_title = input.meta_title.as_deref().unwrap_or(title);
        let meta_description = input
            .meta_description
            .clone()
            .or_else(|| default_meta_description(description));

        let query = format!(
            "INSERT INTO jobs
                (slug, title, type, salary_min, salary_max, currency, location, color,
                 description, requirements, responsibilities, benefits, status,
                 closure_reason, application_deadline, category, meta_title,
                 meta_description, template_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15,
                     $16, $17, $18, $19)
             RETURNING {COLUMNS}, 0::BIGINT AS applications_count"
        );
        let job = sqlx::query_as::<_, Job>(&query)
            .bind(&slug)
            .bind(title)
            .bind(input.job_type.unwrap_or_default().as_str())
            .bind(input.salary_min.as_deref().unwrap_or(""))
            .bind(input.salary_max.as_deref().unwrap_or(""))
            .bind(
                input
                    .currency
                    .as_deref()
                    .unwrap_or(careers_core::job::DEFAULT_CURRENCY),
            )
            .bind(input.location.as_deref().unwrap_or(""))
            .bind(
                input
                    .color
                    .as_deref()
                    .unwrap_or(careers_core::job::DEFAULT_COLOR),
            )
            .bind(description)
            .bind(&input.requirements)
            .bind(&input.responsibilities)
            .bind(&input.benefits)
            .bind(input.status.unwrap_or_default().as_str())
            .bind(input.closure_reason.map(ClosureReason::as_str))
            .bind(input.application_deadline)
            .bind(&input.category)
            .bind(meta_title)
            .bind(meta_description)
            .bind(input.template_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(job_id = %job.id, slug = %job.slug, "Allocated job slug");
        Ok(job)
    }

    /// Find a job by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Job>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS}, {APPLICATIONS_COUNT} FROM jobs WHERE id = $1");
        sqlx::query_as::<_, Job>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a job by its slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Job>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS}, {APPLICATIONS_COUNT} FROM jobs WHERE slug = $1");
        sqlx::query_as::<_, Job>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Resolve a job by ID first, then by slug.
    pub async fn find_by_id_or_slug(pool: &PgPool, key: &str) -> Result<Option<Job>, sqlx::Error> {
        if let Ok(id) = key.parse::<DbId>() {
            if let Some(job) = Self::find_by_id(pool, id).await? {
                return Ok(Some(job));
            }
        }
        Self::find_by_slug(pool, key).await
    }

    /// Whether a job with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM jobs WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List jobs newest first.
    ///
    /// An explicit status filter is an exact match. Without one, archived jobs
    /// are hidden unless `include_archived` is set.
    pub async fn list(pool: &PgPool, filter: JobFilter) -> Result<Vec<Job>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS}, {APPLICATIONS_COUNT} FROM jobs
             WHERE ($1::TEXT IS NOT NULL AND status = $1)
                OR ($1::TEXT IS NULL AND ($2 OR status <> $3))
             ORDER BY created_at DESC, id"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(filter.status.map(JobStatus::as_str))
            .bind(filter.include_archived)
            .bind(JobStatus::Archived.as_str())
            .fetch_all(pool)
            .await
    }

    /// Update a job. Only non-`None` fields in `input` are applied; the slug
    /// never changes. Supplying a status stamps `status_changed_at`.
    ///
    /// The nullable fields are `Option<Option<T>>`: each gets a "provided"
    /// flag so `Some(None)` writes NULL instead of keeping the old value.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateJob,
    ) -> Result<Option<Job>, sqlx::Error> {
        let query = format!(
            "UPDATE jobs SET
                title = COALESCE($2, title),
                type = COALESCE($3, type),
                salary_min = COALESCE($4, salary_min),
                salary_max = COALESCE($5, salary_max),
                currency = COALESCE($6, currency),
                location = COALESCE($7, location),
                color = COALESCE($8, color),
                description = COALESCE($9, description),
                requirements = COALESCE($10, requirements),
                responsibilities = COALESCE($11, responsibilities),
                benefits = COALESCE($12, benefits),
                status = COALESCE($13, status),
                closure_reason = CASE WHEN $14 THEN $15 ELSE closure_reason END,
                application_deadline = CASE WHEN $16 THEN $17
                                            ELSE application_deadline END,
                category = CASE WHEN $18 THEN $19 ELSE category END,
                meta_title = CASE WHEN $20 THEN $21 ELSE meta_title END,
                meta_description = CASE WHEN $22 THEN $23 ELSE meta_description END,
                status_changed_at = CASE WHEN $13::TEXT IS NOT NULL
                                         THEN NOW() ELSE status_changed_at END,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}, {APPLICATIONS_COUNT}"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(id)
            .bind(input.title.as_deref().map(str::trim))
            .bind(input.job_type.map(|t| t.as_str()))
            .bind(&input.salary_min)
            .bind(&input.salary_max)
            .bind(&input.currency)
            .bind(&input.location)
            .bind(&input.color)
            .bind(&input.description)
            .bind(&input.requirements)
            .bind(&input.responsibilities)
            .bind(&input.benefits)
            .bind(input.status.map(JobStatus::as_str))
            .bind(input.closure_reason.is_some())
            .bind(input.closure_reason.flatten().map(ClosureReason::as_str))
            .bind(input.application_deadline.is_some())
            .bind(input.application_deadline.flatten())
            .bind(input.category.is_some())
            .bind(input.category.as_ref().and_then(|v| v.as_deref()))
            .bind(input.meta_title.is_some())
            .bind(input.meta_title.as_ref().and_then(|v| v.as_deref()))
            .bind(input.meta_description.is_some())
            .bind(input.meta_description.as_ref().and_then(|v| v.as_deref()))
            .fetch_optional(pool)
            .await
    }

    /// Delete a job by ID. Its applications (and their ratings and notes) are
    /// removed by `ON DELETE CASCADE`. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
