//! Repository for the `applications` table.

use careers_core::application::ApplicationStage;
use careers_core::types::DbId;
use sqlx::PgPool;

use crate::models::application::{
    Application, ApplicationFilter, CreateApplication, UpdateApplication,
};

/// Column list over `applications a JOIN jobs j`. `status` mirrors `stage`.
const COLUMNS: &str = "a.id, a.job_id, a.name, a.email, a.phone, a.position, a.experience, \
    a.linkedin, a.portfolio, a.cover_letter, a.resume_url, a.stage, a.stage AS status, \
    a.rating, a.applied_at, a.stage_changed_at, a.updated_at, \
    j.title AS job_title, j.slug AS job_slug";

/// Provides CRUD operations for applications.
pub struct ApplicationRepo;

impl ApplicationRepo {
    /// Insert a new application at stage `new`, returning the joined row.
    ///
    /// Fails with a foreign-key violation if the job does not exist.
    pub async fn create(
        pool: &PgPool,
        input: &CreateApplication,
    ) -> Result<Application, sqlx::Error> {
        let query = format!(
            "WITH inserted AS (
                INSERT INTO applications
                    (job_id, name, email, phone, position, experience, linkedin,
                     portfolio, cover_letter, resume_url, stage)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                RETURNING *
             )
             SELECT {COLUMNS} FROM inserted a JOIN jobs j ON j.id = a.job_id"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(input.job_id)
            .bind(input.name.trim())
            .bind(input.email.trim())
            .bind(&input.phone)
            .bind(&input.position)
            .bind(&input.experience)
            .bind(&input.linkedin)
            .bind(&input.portfolio)
            .bind(&input.cover_letter)
            .bind(&input.resume_url)
            .bind(ApplicationStage::New.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find an application by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Application>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM applications a JOIN jobs j ON j.id = a.job_id
             WHERE a.id = $1"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether an application with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM applications WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List applications newest first, optionally filtered by job and stage.
    pub async fn list(
        pool: &PgPool,
        filter: ApplicationFilter,
    ) -> Result<Vec<Application>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM applications a JOIN jobs j ON j.id = a.job_id
             WHERE ($1::UUID IS NULL OR a.job_id = $1)
               AND ($2::TEXT IS NULL OR a.stage = $2)
             ORDER BY a.applied_at DESC, a.id"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(filter.job_id)
            .bind(filter.stage.map(ApplicationStage::as_str))
            .fetch_all(pool)
            .await
    }

    /// Update an application. Only non-`None` fields in `input` are applied.
    ///
    /// `stage` is the already-reconciled stage/status value; supplying it
    /// stamps `stage_changed_at`. Returns `None` if no row with the given `id`
    /// exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateApplication,
        stage: Option<ApplicationStage>,
    ) -> Result<Option<Application>, sqlx::Error> {
        let query = format!(
            "WITH updated AS (
                UPDATE applications SET
                    name = COALESCE($2, name),
                    email = COALESCE($3, email),
                    phone = COALESCE($4, phone),
                    position = COALESCE($5, position),
                    experience = COALESCE($6, experience),
                    linkedin = COALESCE($7, linkedin),
                    portfolio = COALESCE($8, portfolio),
                    cover_letter = COALESCE($9, cover_letter),
                    resume_url = COALESCE($10, resume_url),
                    stage = COALESCE($11, stage),
                    rating = COALESCE($12, rating),
                    stage_changed_at = CASE WHEN $11::TEXT IS NOT NULL
                                            THEN NOW() ELSE stage_changed_at END,
                    updated_at = NOW()
                WHERE id = $1
                RETURNING *
             )
             SELECT {COLUMNS} FROM updated a JOIN jobs j ON j.id = a.job_id"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .bind(input.name.as_deref().map(str::trim))
            .bind(input.email.as_deref().map(str::trim))
            .bind(&input.phone)
            .bind(&input.position)
            .bind(&input.experience)
            .bind(&input.linkedin)
            .bind(&input.portfolio)
            .bind(&input.cover_letter)
            .bind(&input.resume_url)
            .bind(stage.map(ApplicationStage::as_str))
            .bind(input.rating)
            .fetch_optional(pool)
            .await
    }

    /// Delete an application by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM applications WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
