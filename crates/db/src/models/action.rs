//! Improvement action entity model and DTOs.

use riskpilot_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An improvement action row.
///
/// `category`, `priority`, and `status` hold the canonical string forms of
/// the `riskpilot_core::improvement` enumerations (enforced by CHECK
/// constraints in the schema).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ImprovementAction {
    pub id: DbId,
    pub organisation_id: DbId,
    pub title: String,
    pub category: String,
    pub priority: String,
    pub status: String,
    pub due_date: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting an improvement action. Status always starts at `open`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAction {
    pub organisation_id: DbId,
    pub title: String,
    pub category: String,
    pub priority: String,
    pub due_date: Option<Timestamp>,
}
