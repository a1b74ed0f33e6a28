//! Repository for the `audit_logs` table.

use sqlx::PgPool;

use crate::models::audit::{AuditLog, CreateAuditLog};

const COLUMNS: &str = "id, organisation_id, user_id, action, details, created_at";

/// Provides append and recent-listing operations for audit entries.
pub struct AuditLogRepo;

impl AuditLogRepo {
    /// Append an audit entry, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAuditLog) -> Result<AuditLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO audit_logs (organisation_id, user_id, action, details)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AuditLog>(&query)
            .bind(input.organisation_id)
            .bind(input.user_id)
            .bind(&input.action)
            .bind(&input.details)
            .fetch_one(pool)
            .await
    }

    /// The most recent audit entries across all organisations, newest first.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<AuditLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM audit_logs
             ORDER BY created_at DESC, id DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, AuditLog>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
