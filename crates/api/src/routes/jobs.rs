use axum::routing::get;
use axum::Router;

use crate::handlers::jobs;
use crate::state::AppState;

/// Job routes.
///
/// ```text
/// GET    /              -> list_jobs (?status, includeArchived)
/// POST   /              -> create_job
/// GET    /{id_or_slug}  -> get_job
/// PUT    /{id}          -> update_job
/// DELETE /{id}          -> delete_job
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(jobs::list_jobs).post(jobs::create_job))
        .route(
            "/{id}",
            get(jobs::get_job)
                .put(jobs::update_job)
                .delete(jobs::delete_job),
        )
}
