use std::sync::Arc;

use riskpilot_core::scoring::QuestionDef;
use riskpilot_events::AuditBus;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: riskpilot_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Question catalog the scoring engine runs against. Injected here so
    /// tests and future deployments can substitute their own.
    pub catalog: Arc<Vec<QuestionDef>>,
    /// Bus for publishing audit events; the recorder persists them.
    pub audit_bus: Arc<AuditBus>,
}
