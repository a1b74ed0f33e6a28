//! Supplier entity model and DTOs.

use riskpilot_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered supplier row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Supplier {
    pub id: DbId,
    pub organisation_id: DbId,
    pub name: String,
    pub supplier_type: Option<String>,
    pub contact_email: Option<String>,
    /// `low` / `medium` / `high` (CHECK-constrained).
    pub risk_level: String,
    /// Questionnaire workflow status, free-form text.
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a supplier.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSupplier {
    pub organisation_id: DbId,
    pub name: String,
    pub supplier_type: Option<String>,
    pub contact_email: Option<String>,
    pub risk_level: String,
    pub status: String,
}
