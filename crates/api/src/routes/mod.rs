pub mod action;
pub mod audit;
pub mod auth;
pub mod health;
pub mod organisation;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                login (public)
/// /auth/refresh                              refresh (public)
/// /auth/logout                               logout (requires auth)
/// /auth/me                                   identity (requires auth)
///
/// /organisations                             portfolio list (consultant)
/// /organisations/{id}                        detail
/// /organisations/{id}/risk-score             latest score (GET)
/// /organisations/{id}/risk-score/recalculate re-run scoring (POST, consultant)
/// /organisations/{id}/quickscan              submit questionnaire (POST)
/// /organisations/{id}/actions                list (GET), create manual (POST, consultant)
/// /organisations/{id}/incidents              list (GET), report (POST)
/// /organisations/{id}/suppliers              list (GET), register (POST)
///
/// /actions                                   scope-aware listing (GET)
/// /actions/{id}                              status update (PATCH)
///
/// /audit-log                                 recent entries (GET, consultant)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/organisations", organisation::router())
        .nest("/actions", action::router())
        .merge(audit::router())
}
