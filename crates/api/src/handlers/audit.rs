//! Handler for the `/audit-log` resource.

use axum::extract::State;
use axum::Json;
use riskpilot_core::access::{authorize, Operation};
use riskpilot_db::models::audit::AuditLog;
use riskpilot_db::repositories::AuditLogRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Maximum number of entries returned by the audit log listing.
const AUDIT_LOG_LIMIT: i64 = 100;

/// GET /api/v1/audit-log
///
/// The most recent audit entries across all organisations. Consultant-only.
pub async fn list_recent(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<Vec<AuditLog>>> {
    authorize(Some(&auth_user.actor()), Operation::ViewAuditLog)?;
    let entries = AuditLogRepo::list_recent(&state.pool, AUDIT_LOG_LIMIT).await?;
    Ok(Json(entries))
}
