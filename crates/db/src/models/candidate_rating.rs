//! Candidate rating model (one reviewer's score for an application).

use careers_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `candidate_ratings` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct CandidateRating {
    pub id: DbId,
    pub application_id: DbId,
    pub category: String,
    pub score: i32,
    pub max_score: i32,
    pub reviewer_name: String,
    pub comment: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for adding a rating to an application.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCandidateRating {
    pub score: i32,
    pub max_score: Option<i32>,
    #[validate(length(min = 1, max = 100))]
    pub category: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub reviewer_name: Option<String>,
    #[validate(length(max = 2000))]
    pub comment: Option<String>,
}
