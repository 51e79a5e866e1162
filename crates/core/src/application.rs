//! Application rules: hiring stages, candidate ratings and candidate notes.

use crate::error::CoreError;

define_text_enum! {
    /// Position of an application in the hiring pipeline.
    #[derive(Default)]
    ApplicationStage ("application stage") {
        #[default]
        New = "new",
        Screening = "screening",
        InterviewScheduled = "interview_scheduled",
        InterviewComplete = "interview_complete",
        OfferPending = "offer_pending",
        Hired = "hired",
        Rejected = "rejected",
        OnHold = "on_hold",
    }
}

define_text_enum! {
    /// Kind of a candidate note.
    #[derive(Default)]
    NoteType ("note type") {
        #[default]
        General = "general",
        PhoneScreen = "phone_screen",
        Interview = "interview",
        Reference = "reference",
        Other = "other",
    }
}

define_text_enum! {
    /// Who may read a candidate note.
    #[derive(Default)]
    NoteVisibility ("note visibility") {
        Private = "private",
        #[default]
        Team = "team",
    }
}

/// Upper bound of the overall application rating.
pub const MAX_OVERALL_RATING: f64 = 5.0;

pub const DEFAULT_RATING_CATEGORY: &str = "overall";
pub const DEFAULT_MAX_SCORE: i32 = 5;
pub const MAX_SCORE_LIMIT: i32 = 10;

/// Author / reviewer name used when the caller does not supply one.
pub const ANONYMOUS: &str = "Anonymous";

pub const MAX_NOTE_LEN: usize = 10_000;

/// Merge the `stage` and `status` fields of an update request.
///
/// The two fields mirror each other: either one alone sets both, and when
/// both are supplied they must agree.
pub fn resolve_stage(
    stage: Option<ApplicationStage>,
    status: Option<ApplicationStage>,
) -> Result<Option<ApplicationStage>, CoreError> {
    match (stage, status) {
        (Some(a), Some(b)) if a != b => Err(CoreError::Validation(format!(
            "stage '{a}' and status '{b}' must match"
        ))),
        (stage, status) => Ok(stage.or(status)),
    }
}

/// Validate the overall rating stored on the application (0 to 5 inclusive).
pub fn validate_overall_rating(rating: f64) -> Result<(), CoreError> {
    if !rating.is_finite() || !(0.0..=MAX_OVERALL_RATING).contains(&rating) {
        return Err(CoreError::Validation(format!(
            "Rating must be between 0 and {MAX_OVERALL_RATING}"
        )));
    }
    Ok(())
}

/// Validate a rating entry score against its scale.
pub fn validate_score(score: i32, max_score: i32) -> Result<(), CoreError> {
    if !(1..=MAX_SCORE_LIMIT).contains(&max_score) {
        return Err(CoreError::Validation(format!(
            "max_score must be between 1 and {MAX_SCORE_LIMIT}"
        )));
    }
    if !(1..=max_score).contains(&score) {
        return Err(CoreError::Validation(format!(
            "score must be between 1 and {max_score}"
        )));
    }
    Ok(())
}

/// Validate note content (non-blank, at most [`MAX_NOTE_LEN`] characters).
pub fn validate_note_content(content: &str) -> Result<(), CoreError> {
    if content.trim().is_empty() {
        return Err(CoreError::Validation("Note content must not be empty".into()));
    }
    if content.chars().count() > MAX_NOTE_LEN {
        return Err(CoreError::Validation(format!(
            "Note content must be at most {MAX_NOTE_LEN} characters"
        )));
    }
    Ok(())
}
