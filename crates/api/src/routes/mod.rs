pub mod applications;
pub mod health;
pub mod jobs;
pub mod templates;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /health                      health check
/// /jobs                        job postings (list, create)
/// /jobs/{id_or_slug}           get, update, delete
/// /applications                applications (list, create)
/// /applications/{id}           get (with ratings and notes), update, delete
/// /applications/{id}/ratings   add a rating
/// /applications/{id}/notes     add a note
/// /templates                   job templates (list, create)
/// /templates/{id}              delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/jobs", jobs::router())
        .nest("/applications", applications::router())
        .nest("/templates", templates::router())
}
