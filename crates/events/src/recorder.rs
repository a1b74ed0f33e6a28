//! Durable audit recording service.
//!
//! [`AuditRecorder`] subscribes to the [`AuditBus`](crate::bus::AuditBus)
//! broadcast channel and writes every received [`AuditEvent`] to the
//! `audit_logs` table. It runs as a long-lived background task and shuts
//! down gracefully when the bus sender is dropped.

use riskpilot_db::models::audit::CreateAuditLog;
use riskpilot_db::repositories::AuditLogRepo;
use riskpilot_db::DbPool;
use tokio::sync::broadcast;

use crate::bus::AuditEvent;

/// Background service that persists audit events to the database.
pub struct AuditRecorder;

impl AuditRecorder {
    /// Run the recording loop.
    ///
    /// Subscribes to the audit bus via the provided `receiver` and persists
    /// every event it receives. A write failure is logged together with the
    /// serialized event so the entry can be recovered from the log stream;
    /// it never propagates. The loop exits when the channel is closed.
    pub async fn run(pool: DbPool, mut receiver: broadcast::Receiver<AuditEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => {
                    if let Err(e) = Self::persist(&pool, &event).await {
                        let dropped = serde_json::to_string(&event)
                            .unwrap_or_else(|_| event.action.clone());
                        tracing::error!(
                            error = %e,
                            action = %event.action,
                            event = %dropped,
                            "Failed to persist audit event"
                        );
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(
                        skipped = n,
                        "Audit recorder lagged, some events were not persisted"
                    );
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Audit bus closed, recorder shutting down");
                    break;
                }
            }
        }
    }

    /// Write a single event to the `audit_logs` table.
    async fn persist(pool: &DbPool, event: &AuditEvent) -> Result<(), sqlx::Error> {
        let input = CreateAuditLog {
            organisation_id: event.organisation_id,
            user_id: event.user_id,
            action: event.action.clone(),
            details: event.details.clone(),
        };
        AuditLogRepo::create(pool, &input).await?;
        Ok(())
    }
}
