//! Repository for the `quickscan_results` table.

use riskpilot_core::types::DbId;
use sqlx::PgPool;

use crate::models::quickscan::{CreateQuickscan, QuickscanResult};

const COLUMNS: &str = "id, organisation_id, raw_answers, source, submitted_at";

/// Provides insert and latest-lookup operations for quickscan submissions.
pub struct QuickscanRepo;

impl QuickscanRepo {
    /// Persist a raw submission, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateQuickscan,
    ) -> Result<QuickscanResult, sqlx::Error> {
        let query = format!(
            "INSERT INTO quickscan_results (organisation_id, raw_answers, source)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, QuickscanResult>(&query)
            .bind(input.organisation_id)
            .bind(&input.raw_answers)
            .bind(&input.source)
            .fetch_one(pool)
            .await
    }

    /// The most recently submitted quickscan for an organisation, if any.
    ///
    /// This is the answer blob a recalculation replays; the blob itself is
    /// never mutated.
    pub async fn find_latest_for_organisation(
        pool: &PgPool,
        organisation_id: DbId,
    ) -> Result<Option<QuickscanResult>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM quickscan_results
             WHERE organisation_id = $1
             ORDER BY submitted_at DESC, id DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, QuickscanResult>(&query)
            .bind(organisation_id)
            .fetch_optional(pool)
            .await
    }
}
