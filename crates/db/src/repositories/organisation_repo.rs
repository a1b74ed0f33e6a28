//! Repository for the `organisations` table.

use riskpilot_core::types::DbId;
use sqlx::PgPool;

use crate::models::organisation::{CreateOrganisation, Organisation, OrganisationSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, nis2_segment, created_at, updated_at";

/// Provides CRUD operations for organisations.
pub struct OrganisationRepo;

impl OrganisationRepo {
    /// Insert a new organisation, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateOrganisation,
    ) -> Result<Organisation, sqlx::Error> {
        let query = format!(
            "INSERT INTO organisations (name, nis2_segment)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Organisation>(&query)
            .bind(&input.name)
            .bind(&input.nis2_segment)
            .fetch_one(pool)
            .await
    }

    /// Find an organisation by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Organisation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM organisations WHERE id = $1");
        sqlx::query_as::<_, Organisation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Portfolio listing: every organisation joined with its most recent
    /// overall score (NULL when the organisation was never scored).
    pub async fn list_with_latest_score(
        pool: &PgPool,
    ) -> Result<Vec<OrganisationSummary>, sqlx::Error> {
        sqlx::query_as::<_, OrganisationSummary>(
            "SELECT o.id, o.name, o.nis2_segment,
                    rs.overall_score, rs.calculated_at AS score_calculated_at,
                    o.updated_at
             FROM organisations o
             LEFT JOIN LATERAL (
                 SELECT overall_score, calculated_at
                 FROM risk_scores
                 WHERE organisation_id = o.id
                 ORDER BY calculated_at DESC, id DESC
                 LIMIT 1
             ) rs ON TRUE
             ORDER BY o.name",
        )
        .fetch_all(pool)
        .await
    }

    /// Bump the related-record timestamp after a scoped write.
    pub async fn touch(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE organisations SET updated_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
