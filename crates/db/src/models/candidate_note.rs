//! Candidate note model.

use careers_core::application::{NoteType, NoteVisibility};
use careers_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `candidate_notes` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct CandidateNote {
    pub id: DbId,
    pub application_id: DbId,
    pub author_name: String,
    #[sqlx(try_from = "String")]
    pub note_type: NoteType,
    pub content: String,
    pub is_pinned: bool,
    #[sqlx(try_from = "String")]
    pub visibility: NoteVisibility,
    pub created_at: Timestamp,
}

/// DTO for adding a note to an application.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCandidateNote {
    pub content: String,
    pub note_type: Option<NoteType>,
    pub visibility: Option<NoteVisibility>,
    pub is_pinned: Option<bool>,
    #[validate(length(min = 1, max = 200))]
    pub author_name: Option<String>,
}
