//! Audit log entity model and DTOs.
//!
//! Audit logs are append-only and have no `updated_at` (immutable records).

use riskpilot_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single audit log entry. Immutable once created.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AuditLog {
    pub id: DbId,
    pub organisation_id: Option<DbId>,
    pub user_id: Option<DbId>,
    pub action: String,
    pub details: Option<serde_json::Value>,
    pub created_at: Timestamp,
}

/// DTO for inserting an audit log entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAuditLog {
    pub organisation_id: Option<DbId>,
    pub user_id: Option<DbId>,
    pub action: String,
    pub details: Option<serde_json::Value>,
}
