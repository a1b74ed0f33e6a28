//! Route definitions for the top-level `/actions` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::action;
use crate::state::AppState;

/// Routes mounted at `/actions`.
///
/// ```text
/// GET   /       -> scope-aware listing (optionally ?status=...)
/// PATCH /{id}   -> move an action between statuses
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(action::list_scoped))
        .route("/{id}", patch(action::update_status))
}
