//! Handlers for job postings.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use careers_core::error::CoreError;
use careers_core::job::{parse_status_filter, validate_color, validate_title};
use careers_core::slug::validate_slug;
use careers_core::types::DbId;
use careers_db::models::job::{CreateJob, JobFilter, UpdateJob};
use careers_db::repositories::JobRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::parse_id;
use crate::query::JobListParams;
use crate::response::DeleteResponse;
use crate::state::AppState;

/// GET /jobs?status=&includeArchived=
///
/// `status=all` (or no status) lists every non-archived job; an explicit
/// status matches exactly.
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobListParams>,
) -> AppResult<impl IntoResponse> {
    let status = parse_status_filter(params.status.as_deref())?;
    let jobs = JobRepo::list(
        &state.pool,
        JobFilter {
            status,
            include_archived: params.include_archived,
        },
    )
    .await?;

    Ok(Json(jobs))
}

/// GET /jobs/{id_or_slug}
///
/// A key that is neither a UUID nor a well-formed slug cannot match a job.
pub async fn get_job(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<impl IntoResponse> {
    if key.parse::<DbId>().is_err() && validate_slug(&key).is_err() {
        return Err(AppError::Core(CoreError::not_found("Job", &key)));
    }

    let job = JobRepo::find_by_id_or_slug(&state.pool, &key)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Job", &key)))?;

    Ok(Json(job))
}

/// POST /jobs
pub async fn create_job(
    State(state): State<AppState>,
    Json(input): Json<CreateJob>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    validate_title(&input.title)?;
    if let Some(color) = &input.color {
        validate_color(color)?;
    }

    let job = JobRepo::create(&state.pool, &input).await?;

    tracing::info!(
        job_id = %job.id,
        slug = %job.slug,
        status = %job.status,
        "Job created"
    );

    Ok((StatusCode::CREATED, Json(job)))
}

/// PUT /jobs/{id}
///
/// Partial update. Any status may move to any other status.
pub async fn update_job(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(input): Json<UpdateJob>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id("Job", &raw_id)?;

    input.validate()?;
    if let Some(title) = &input.title {
        validate_title(title)?;
    }
    if let Some(color) = &input.color {
        validate_color(color)?;
    }

    let job = JobRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Job", id)))?;

    tracing::info!(job_id = %id, status = %job.status, "Job updated");

    Ok(Json(job))
}

/// DELETE /jobs/{id}
///
/// Applications of the job are removed with it.
pub async fn delete_job(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id("Job", &raw_id)?;

    if !JobRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::not_found("Job", id)));
    }

    tracing::info!(job_id = %id, "Job deleted");

    Ok(Json(DeleteResponse::ok()))
}
