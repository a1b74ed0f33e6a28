//! Organisation (tenant root) entity model and DTOs.

use riskpilot_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An organisation row. The tenant root: every scoped entity carries exactly
/// one `organisation_id` foreign key back to this table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Organisation {
    pub id: DbId,
    pub name: String,
    /// Regulatory segment tag (e.g. `"Essential"`, `"Important"`).
    pub nis2_segment: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new organisation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrganisation {
    pub name: String,
    pub nis2_segment: String,
}

/// Portfolio listing row: organisation plus its latest overall score.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OrganisationSummary {
    pub id: DbId,
    pub name: String,
    pub nis2_segment: String,
    pub overall_score: Option<i32>,
    pub score_calculated_at: Option<Timestamp>,
    pub updated_at: Timestamp,
}
