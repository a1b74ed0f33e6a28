//! Incident entity model and DTOs.

use riskpilot_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A logged security incident row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Incident {
    pub id: DbId,
    pub organisation_id: DbId,
    pub incident_type: String,
    pub impact: String,
    pub discovered_at: Timestamp,
    pub initial_actions: Option<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for logging an incident.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateIncident {
    pub organisation_id: DbId,
    pub incident_type: String,
    pub impact: String,
    pub discovered_at: Timestamp,
    pub initial_actions: Option<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
}
