//! Route definition for the `/audit-log` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::audit;
use crate::state::AppState;

/// Routes for the audit trail.
///
/// ```text
/// GET /audit-log -> recent entries (consultant)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/audit-log", get(audit::list_recent))
}
