//! Repository for the `candidate_notes` table.

use careers_core::application::ANONYMOUS;
use careers_core::types::DbId;
use sqlx::PgPool;

use crate::models::candidate_note::{CandidateNote, CreateCandidateNote};

const COLUMNS: &str =
    "id, application_id, author_name, note_type, content, is_pinned, visibility, created_at";

/// Provides create/list operations for candidate notes.
pub struct CandidateNoteRepo;

impl CandidateNoteRepo {
    /// Insert a note for an application, returning the created row.
    pub async fn create(
        pool: &PgPool,
        application_id: DbId,
        input: &CreateCandidateNote,
    ) -> Result<CandidateNote, sqlx::Error> {
        let query = format!(
            "INSERT INTO candidate_notes
                (application_id, author_name, note_type, content, is_pinned, visibility)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CandidateNote>(&query)
            .bind(application_id)
            .bind(input.author_name.as_deref().unwrap_or(ANONYMOUS))
            .bind(input.note_type.unwrap_or_default().as_str())
            .bind(input.content.trim())
            .bind(input.is_pinned.unwrap_or(false))
            .bind(input.visibility.unwrap_or_default().as_str())
            .fetch_one(pool)
            .await
    }

    /// List notes for an application, pinned first, then newest first.
    pub async fn list_by_application(
        pool: &PgPool,
        application_id: DbId,
    ) -> Result<Vec<CandidateNote>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM candidate_notes
             WHERE application_id = $1
             ORDER BY is_pinned DESC, created_at DESC, id"
        );
        sqlx::query_as::<_, CandidateNote>(&query)
            .bind(application_id)
            .fetch_all(pool)
            .await
    }
}

