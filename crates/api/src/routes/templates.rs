use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::templates;
use crate::state::AppState;

/// Job template routes.
///
/// ```text
/// GET    /      -> list_templates
/// POST   /      -> create_template
/// DELETE /{id}  -> delete_template
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(templates::list_templates).post(templates::create_template),
        )
        .route("/{id}", delete(templates::delete_template))
}
