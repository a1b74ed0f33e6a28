//! Repository for the `risk_scores` table.

use riskpilot_core::types::DbId;
use sqlx::PgPool;

use crate::models::risk_score::{CreateRiskScore, RiskScore};

const COLUMNS: &str = "\
    id, organisation_id, overall_score, governance_score, risk_management_score, \
    incident_score, suppliers_score, method_version, calculated_at";

/// Provides insert and latest-lookup operations for risk scores.
pub struct RiskScoreRepo;

impl RiskScoreRepo {
    /// Persist a derived score, returning the created row. Rows are
    /// append-only; older scores stay untouched as historical snapshots.
    pub async fn create(pool: &PgPool, input: &CreateRiskScore) -> Result<RiskScore, sqlx::Error> {
        let query = format!(
            "INSERT INTO risk_scores
                 (organisation_id, overall_score, governance_score,
                  risk_management_score, incident_score, suppliers_score, method_version)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RiskScore>(&query)
            .bind(input.organisation_id)
            .bind(input.overall_score)
            .bind(input.governance_score)
            .bind(input.risk_management_score)
            .bind(input.incident_score)
            .bind(input.suppliers_score)
            .bind(&input.method_version)
            .fetch_one(pool)
            .await
    }

    /// The authoritative (most recent) score for an organisation, if any.
    pub async fn find_latest_for_organisation(
        pool: &PgPool,
        organisation_id: DbId,
    ) -> Result<Option<RiskScore>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM risk_scores
             WHERE organisation_id = $1
             ORDER BY calculated_at DESC, id DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, RiskScore>(&query)
            .bind(organisation_id)
            .fetch_optional(pool)
            .await
    }
}
