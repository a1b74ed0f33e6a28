//! Risk score entity model and DTOs.

use riskpilot_core::scoring::ScoreResult;
use riskpilot_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A derived risk score row. Immutable once computed; the most recent row
/// per organisation (by `calculated_at`) is authoritative for display.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RiskScore {
    pub id: DbId,
    pub organisation_id: DbId,
    pub overall_score: i32,
    pub governance_score: i32,
    pub risk_management_score: i32,
    pub incident_score: i32,
    pub suppliers_score: i32,
    pub method_version: String,
    pub calculated_at: Timestamp,
}

/// DTO for inserting a risk score derived by the scoring engine.
#[derive(Debug, Clone)]
pub struct CreateRiskScore {
    pub organisation_id: DbId,
    pub overall_score: i32,
    pub governance_score: i32,
    pub risk_management_score: i32,
    pub incident_score: i32,
    pub suppliers_score: i32,
    pub method_version: String,
}

impl CreateRiskScore {
    /// Build an insert DTO from an engine result.
    pub fn from_result(organisation_id: DbId, result: &ScoreResult) -> Self {
        Self {
            organisation_id,
            overall_score: result.overall_score,
            governance_score: result.governance_score,
            risk_management_score: result.risk_management_score,
            incident_score: result.incident_score,
            suppliers_score: result.suppliers_score,
            method_version: result.method_version.clone(),
        }
    }
}
