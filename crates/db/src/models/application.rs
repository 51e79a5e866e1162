//! Application model and DTOs.

use careers_core::application::ApplicationStage;
use careers_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::candidate_note::CandidateNote;
use crate::models::candidate_rating::CandidateRating;

/// A row from the `applications` table joined with its job's title and slug.
///
/// `status` is read as an alias of the `stage` column, so the two always
/// agree.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Application {
    pub id: DbId,
    pub job_id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub experience: String,
    pub linkedin: Option<String>,
    pub portfolio: Option<String>,
    pub cover_letter: Option<String>,
    pub resume_url: Option<String>,
    #[sqlx(try_from = "String")]
    pub stage: ApplicationStage,
    #[sqlx(try_from = "String")]
    pub status: ApplicationStage,
    pub rating: f64,
    pub applied_at: Timestamp,
    pub stage_changed_at: Timestamp,
    pub updated_at: Timestamp,
    pub job_title: String,
    pub job_slug: String,
}

/// An application with its rating entries and notes.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationDetail {
    #[serde(flatten)]
    pub application: Application,
    pub ratings: Vec<CandidateRating>,
    pub notes: Vec<CandidateNote>,
}

/// DTO for submitting an application. New applications always start at
/// stage `new`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateApplication {
    #[serde(alias = "jobId")]
    pub job_id: DbId,
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 50))]
    pub phone: String,
    #[serde(default)]
    #[validate(length(max = 200))]
    pub position: String,
    #[serde(default)]
    #[validate(length(max = 200))]
    pub experience: String,
    #[serde(alias = "linkedIn")]
    #[validate(length(max = 500))]
    pub linkedin: Option<String>,
    #[validate(length(max = 500))]
    pub portfolio: Option<String>,
    #[serde(alias = "coverLetter")]
    #[validate(length(max = 10000))]
    pub cover_letter: Option<String>,
    #[serde(alias = "resumeUrl")]
    #[validate(url(message = "resume_url must be a valid URL"))]
    pub resume_url: Option<String>,
}

/// DTO for a partial application update.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateApplication {
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: Option<String>,
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    #[validate(length(max = 50))]
    pub phone: Option<String>,
    #[validate(length(max = 200))]
    pub position: Option<String>,
    #[validate(length(max = 200))]
    pub experience: Option<String>,
    #[validate(length(max = 500))]
    pub linkedin: Option<String>,
    #[validate(length(max = 500))]
    pub portfolio: Option<String>,
    #[validate(length(max = 10000))]
    pub cover_letter: Option<String>,
    #[validate(url(message = "resume_url must be a valid URL"))]
    pub resume_url: Option<String>,
    pub stage: Option<ApplicationStage>,
    pub status: Option<ApplicationStage>,
    pub rating: Option<f64>,
}

impl UpdateApplication {
    /// `true` when the request carries no field at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.position.is_none()
            && self.experience.is_none()
            && self.linkedin.is_none()
            && self.portfolio.is_none()
            && self.cover_letter.is_none()
            && self.resume_url.is_none()
            && self.stage.is_none()
            && self.status.is_none()
            && self.rating.is_none()
    }
}

/// Filter for listing applications.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApplicationFilter {
    pub job_id: Option<DbId>,
    pub stage: Option<ApplicationStage>,
}
