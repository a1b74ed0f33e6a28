//! Quickscan submission entity model and DTOs.
//!
//! The raw answer mapping is stored verbatim as JSONB alongside the derived
//! score so a later recalculation can replay it against a newer catalog.

use riskpilot_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A quickscan submission row. Immutable once created.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QuickscanResult {
    pub id: DbId,
    pub organisation_id: DbId,
    /// The submitted answer mapping, exactly as received.
    pub raw_answers: serde_json::Value,
    /// Where the submission came from (e.g. `"manual"`, `"wizard"`).
    pub source: String,
    pub submitted_at: Timestamp,
}

/// DTO for inserting a quickscan submission.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuickscan {
    pub organisation_id: DbId,
    pub raw_answers: serde_json::Value,
    pub source: String,
}
