//! Job posting model and DTOs.

use careers_core::error::CoreError;
use careers_core::job::{ClosureReason, JobStatus, JobType};
use careers_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::nullable;

/// A row from the `jobs` table plus its live `applications_count`.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Job {
    pub id: DbId,
    pub slug: String,
    pub title: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type", try_from = "String")]
    pub job_type: JobType,
    pub salary_min: String,
    pub salary_max: String,
    pub currency: String,
    pub location: String,
    pub color: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub responsibilities: Vec<String>,
    pub benefits: Vec<String>,
    #[sqlx(try_from = "String")]
    pub status: JobStatus,
    #[sqlx(try_from = "ClosureReasonColumn")]
    pub closure_reason: Option<ClosureReason>,
    pub application_deadline: Option<Timestamp>,
    pub category: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub template_id: Option<DbId>,
    /// Number of applications referencing this job, counted on every read.
    pub applications_count: i64,
    pub status_changed_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a job. Only `title` is required.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateJob {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,
    #[serde(rename = "type")]
    pub job_type: Option<JobType>,
    #[validate(length(max = 50))]
    pub salary_min: Option<String>,
    #[validate(length(max = 50))]
    pub salary_max: Option<String>,
    #[validate(length(equal = 3, message = "currency must be a 3-letter code"))]
    pub currency: Option<String>,
    #[validate(length(max = 200))]
    pub location: Option<String>,
    pub color: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    #[validate(length(max = 50))]
    pub requirements: Vec<String>,
    #[serde(default)]
    #[validate(length(max = 50))]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    #[validate(length(max = 50))]
    pub benefits: Vec<String>,
    pub status: Option<JobStatus>,
    pub closure_reason: Option<ClosureReason>,
    pub application_deadline: Option<Timestamp>,
    #[validate(length(max = 100))]
    pub category: Option<String>,
    #[validate(length(max = 200))]
    pub meta_title: Option<String>,
    #[validate(length(max = 320))]
    pub meta_description: Option<String>,
    pub template_id: Option<DbId>,
}

/// DTO for a partial job update. Absent fields are left untouched; the slug
/// is never changed.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateJob {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<JobType>,
    #[validate(length(max = 50))]
    pub salary_min: Option<String>,
    #[validate(length(max = 50))]
    pub salary_max: Option<String>,
    #[validate(length(equal = 3, message = "currency must be a 3-letter code"))]
    pub currency: Option<String>,
    #[validate(length(max = 200))]
    pub location: Option<String>,
    pub color: Option<String>,
    pub description: Option<String>,
    #[validate(length(max = 50))]
    pub requirements: Option<Vec<String>>,
    #[validate(length(max = 50))]
    pub responsibilities: Option<Vec<String>>,
    #[validate(length(max = 50))]
    pub benefits: Option<Vec<String>>,
    pub status: Option<JobStatus>,
    /// `Some(None)` (an explicit `null`) clears the column; likewise for the
    /// fields below.
    #[serde(default, deserialize_with = "nullable")]
    pub closure_reason: Option<Option<ClosureReason>>,
    #[serde(default, deserialize_with = "nullable")]
    pub application_deadline: Option<Option<Timestamp>>,
    #[serde(default, deserialize_with = "nullable")]
    #[validate(length(max = 100))]
    pub category: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[validate(length(max = 200))]
    pub meta_title: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[validate(length(max = 320))]
    pub meta_description: Option<Option<String>>,
}

/// Nullable `closure_reason` column as read from the database.
#[derive(Debug, sqlx::Type)]
#[sqlx(transparent)]
pub struct ClosureReasonColumn(Option<String>);

impl TryFrom<ClosureReasonColumn> for Option<ClosureReason> {
    type Error = CoreError;

    fn try_from(column: ClosureReasonColumn) -> Result<Self, Self::Error> {
        column.0.map(ClosureReason::try_from).transpose()
    }
}

/// Filter for listing jobs.
#[derive(Debug, Clone, Copy, Default)]
pub struct JobFilter {
    /// Exact status match. When set, `include_archived` is ignored.
    pub status: Option<JobStatus>,
    /// Include archived jobs in an unfiltered listing.
    pub include_archived: bool,
}
