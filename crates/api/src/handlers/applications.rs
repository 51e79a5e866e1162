//! Handlers for job applications and their ratings and notes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use careers_core::application::{
    resolve_stage, validate_note_content, validate_overall_rating, validate_score,
    ApplicationStage, DEFAULT_MAX_SCORE,
};
use careers_core::error::CoreError;
use careers_core::types::DbId;
use careers_db::models::application::{
    ApplicationDetail, ApplicationFilter, CreateApplication, UpdateApplication,
};
use careers_db::models::candidate_note::CreateCandidateNote;
use careers_db::models::candidate_rating::CreateCandidateRating;
use careers_db::repositories::{
    ApplicationRepo, CandidateNoteRepo, CandidateRatingRepo, JobRepo,
};

use crate::error::{AppError, AppResult};
use crate::handlers::parse_id;
use crate::query::{non_empty, ApplicationListParams};
use crate::response::DeleteResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Applications
// ---------------------------------------------------------------------------

/// GET /applications?jobId=&stage=&status=
pub async fn list_applications(
    State(state): State<AppState>,
    Query(params): Query<ApplicationListParams>,
) -> AppResult<impl IntoResponse> {
    let job_id = non_empty(params.job_id.as_deref())
        .map(|raw| {
            raw.parse::<DbId>()
                .map_err(|_| CoreError::Validation(format!("Invalid jobId '{raw}'")))
        })
        .transpose()?;
    let stage = non_empty(params.stage.as_deref())
        .map(str::parse::<ApplicationStage>)
        .transpose()?;
    let status = non_empty(params.status.as_deref())
        .map(str::parse::<ApplicationStage>)
        .transpose()?;

    let applications = ApplicationRepo::list(
        &state.pool,
        ApplicationFilter {
            job_id,
            stage: resolve_stage(stage, status)?,
        },
    )
    .await?;

    Ok(Json(applications))
}

/// POST /applications
///
/// The referenced job must exist; otherwise 422.
pub async fn create_application(
    State(state): State<AppState>,
    Json(input): Json<CreateApplication>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    if !JobRepo::exists(&state.pool, input.job_id).await? {
        return Err(AppError::Core(CoreError::UnknownReference {
            entity: "Job",
            id: input.job_id.to_string(),
        }));
    }

    let application = ApplicationRepo::create(&state.pool, &input).await?;

    tracing::info!(
        application_id = %application.id,
        job_id = %application.job_id,
        "Application submitted"
    );

    Ok((StatusCode::CREATED, Json(application)))
}

/// GET /applications/{id}
///
/// Returns the application with its ratings and notes.
pub async fn get_application(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id("Application", &raw_id)?;

    let application = ApplicationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Application", id)))?;

    let (ratings, notes) = tokio::try_join!(
        CandidateRatingRepo::list_by_application(&state.pool, id),
        CandidateNoteRepo::list_by_application(&state.pool, id),
    )?;

    Ok(Json(ApplicationDetail {
        application,
        ratings,
        notes,
    }))
}

/// PUT /applications/{id}
///
/// Partial update. `stage` and `status` are interchangeable; if both are
/// given they must be equal.
pub async fn update_application(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(input): Json<UpdateApplication>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id("Application", &raw_id)?;

    if input.is_empty() {
        return Err(AppError::BadRequest("No fields to update".into()));
    }
    input.validate()?;
    let stage = resolve_stage(input.stage, input.status)?;
    if let Some(rating) = input.rating {
        validate_overall_rating(rating)?;
    }

    let application = ApplicationRepo::update(&state.pool, id, &input, stage)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Application", id)))?;

    tracing::info!(
        application_id = %id,
        stage = %application.stage,
        "Application updated"
    );

    Ok(Json(application))
}

/// DELETE /applications/{id}
pub async fn delete_application(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id("Application", &raw_id)?;

    if !ApplicationRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::not_found("Application", id)));
    }

    tracing::info!(application_id = %id, "Application deleted");

    Ok(Json(DeleteResponse::ok()))
}

// ---------------------------------------------------------------------------
// Ratings and notes
// ---------------------------------------------------------------------------

/// POST /applications/{id}/ratings
pub async fn create_rating(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(input): Json<CreateCandidateRating>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id("Application", &raw_id)?;

    input.validate()?;
    validate_score(input.score, input.max_score.unwrap_or(DEFAULT_MAX_SCORE))?;
    ensure_application_exists(&state, id).await?;

    let rating = CandidateRatingRepo::create(&state.pool, id, &input).await?;

    tracing::info!(
        application_id = %id,
        rating_id = %rating.id,
        score = rating.score,
        "Candidate rating added"
    );

    Ok((StatusCode::CREATED, Json(rating)))
}

/// POST /applications/{id}/notes
pub async fn create_note(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(input): Json<CreateCandidateNote>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id("Application", &raw_id)?;

    input.validate()?;
    validate_note_content(&input.content)?;
    ensure_application_exists(&state, id).await?;

    let note = CandidateNoteRepo::create(&state.pool, id, &input).await?;

    tracing::info!(
        application_id = %id,
        note_id = %note.id,
        note_type = %note.note_type,
        "Candidate note added"
    );

    Ok((StatusCode::CREATED, Json(note)))
}

async fn ensure_application_exists(
    state: &AppState,
    id: DbId,
) -> AppResult<()> {
    if ApplicationRepo::exists(&state.pool, id).await? {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::not_found("Application", id)))
    }
}
