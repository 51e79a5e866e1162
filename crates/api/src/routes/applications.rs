use axum::routing::{get, post};
use axum::Router;

use crate::handlers::applications;
use crate::state::AppState;

/// Application routes.
///
/// ```text
/// GET    /               -> list_applications (?jobId, stage, status)
/// POST   /               -> create_application
/// GET    /{id}           -> get_application
/// PUT    /{id}           -> update_application
/// DELETE /{id}           -> delete_application
/// POST   /{id}/ratings   -> create_rating
/// POST   /{id}/notes     -> create_note
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(applications::list_applications).post(applications::create_application),
        )
        .route(
            "/{id}",
            get(applications::get_application)
                .put(applications::update_application)
                .delete(applications::delete_application),
        )
        .route("/{id}/ratings", post(applications::create_rating))
        .route("/{id}/notes", post(applications::create_note))
}
