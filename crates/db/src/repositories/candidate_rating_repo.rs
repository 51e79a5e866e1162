//! Repository for the `candidate_ratings` table.

use careers_core::application::{ANONYMOUS, DEFAULT_MAX_SCORE, DEFAULT_RATING_CATEGORY};
use careers_core::types::DbId;
use sqlx::PgPool;

use crate::models::candidate_rating::{CandidateRating, CreateCandidateRating};

const COLUMNS: &str =
    "id, application_id, category, score, max_score, reviewer_name, comment, created_at";

/// Provides create/list operations for candidate ratings.
pub struct CandidateRatingRepo;

impl CandidateRatingRepo {
    /// Insert a rating for an application, returning the created row.
    pub async fn create(
        pool: &PgPool,
        application_id: DbId,
        input: &CreateCandidateRating,
    ) -> Result<CandidateRating, sqlx::Error> {
        let query = format!(
            "INSERT INTO candidate_ratings
                (application_id, category, score, max_score, reviewer_name, comment)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CandidateRating>(&query)
            .bind(application_id)
            .bind(input.category.as_deref().unwrap_or(DEFAULT_RATING_CATEGORY))
            .bind(input.score)
            .bind(input.max_score.unwrap_or(DEFAULT_MAX_SCORE))
            .bind(input.reviewer_name.as_deref().unwrap_or(ANONYMOUS))
            .bind(&input.comment)
            .fetch_one(pool)
            .await
    }

    /// List ratings for an application, newest first.
    pub async fn list_by_application(
        pool: &PgPool,
        application_id: DbId,
    ) -> Result<Vec<CandidateRating>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM candidate_ratings
             WHERE application_id = $1
             ORDER BY created_at DESC, id"
        );
        sqlx::query_as::<_, CandidateRating>(&query)
            .bind(application_id)
            .fetch_all(pool)
            .await
    }
}
