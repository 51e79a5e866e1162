//! Job template model. Templates prefill the job creation form.

use careers_core::job::JobType;
use careers_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `job_templates` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct JobTemplate {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub title: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type", try_from = "String")]
    pub job_type: JobType,
    pub salary_min: String,
    pub salary_max: String,
    pub currency: String,
    pub location: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub responsibilities: Vec<String>,
    pub benefits: Vec<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a template.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateJobTemplate {
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,
    #[validate(length(max = 100))]
    pub category: Option<String>,
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
}
