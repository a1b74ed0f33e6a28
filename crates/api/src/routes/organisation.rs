//! Route definitions for the `/organisations` resource and its nested
//! per-organisation sub-resources.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{action, incident, organisation, risk_score, supplier};
use crate::state::AppState;

/// Routes mounted at `/organisations`.
///
/// ```text
/// GET  /                              -> portfolio list (consultant)
/// GET  /{id}                          -> detail
/// GET  /{id}/risk-score               -> latest score
/// POST /{id}/risk-score/recalculate   -> re-run scoring (consultant)
/// POST /{id}/quickscan                -> submit questionnaire
/// GET  /{id}/actions                  -> list actions
/// POST /{id}/actions                  -> create manual action (consultant)
/// GET  /{id}/incidents                -> list incidents
/// POST /{id}/incidents                -> report incident
/// GET  /{id}/suppliers                -> list suppliers
/// POST /{id}/suppliers                -> register supplier
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(organisation::list))
        .route("/{id}", get(organisation::get_by_id))
        .route("/{id}/risk-score", get(risk_score::get_latest))
        .route(
            "/{id}/risk-score/recalculate",
            post(risk_score::recalculate),
        )
        .route("/{id}/quickscan", post(risk_score::submit_quickscan))
        .route(
            "/{id}/actions",
            get(action::list_for_organisation).post(action::create),
        )
        .route("/{id}/incidents", get(incident::list).post(incident::create))
        .route("/{id}/suppliers", get(supplier::list).post(supplier::create))
}
