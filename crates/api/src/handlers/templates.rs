//! Handlers for reusable job templates.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use careers_core::error::CoreError;
use careers_core::job::validate_title;
use careers_db::models::job_template::CreateJobTemplate;
use careers_db::repositories::JobTemplateRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::parse_id;
use crate::response::DeleteResponse;
use crate::state::AppState;

/// GET /templates
pub async fn list_templates(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let templates = JobTemplateRepo::list(&state.pool).await?;
    Ok(Json(templates))
}

/// POST /templates
pub async fn create_template(
    State(state): State<AppState>,
    Json(input): Json<CreateJobTemplate>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    validate_title(&input.title)?;
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Template name must not be empty".into(),
        )));
    }

    let template = JobTemplateRepo::create(&state.pool, &input).await?;

    tracing::info!(
        template_id = %template.id,
        name = %template.name,
        "Job template created"
    );

    Ok((StatusCode::CREATED, Json(template)))
}

/// DELETE /templates/{id}
///
/// Jobs created from the template keep their content; their `template_id`
/// is cleared.
pub async fn delete_template(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id("JobTemplate", &raw_id)?;

    if !JobTemplateRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::not_found("JobTemplate", id)));
    }

    tracing::info!(template_id = %id, "Job template deleted");

    Ok(Json(DeleteResponse::ok()))
}
