//! Repository for the `incidents` table.

use riskpilot_core::types::DbId;
use sqlx::PgPool;

use crate::models::incident::{CreateIncident, Incident};

const COLUMNS: &str = "\
    id, organisation_id, incident_type, impact, discovered_at, initial_actions, \
    contact_name, contact_email, created_at";

/// Provides insert and list operations for reported incidents.
pub struct IncidentRepo;

impl IncidentRepo {
    /// Insert a new incident report, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateIncident) -> Result<Incident, sqlx::Error> {
        let query = format!(
            "INSERT INTO incidents
                 (organisation_id, incident_type, impact, discovered_at,
                  initial_actions, contact_name, contact_email)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Incident>(&query)
            .bind(input.organisation_id)
            .bind(&input.incident_type)
            .bind(&input.impact)
            .bind(input.discovered_at)
            .bind(&input.initial_actions)
            .bind(&input.contact_name)
            .bind(&input.contact_email)
            .fetch_one(pool)
            .await
    }

    /// List an organisation's incidents, newest first.
    pub async fn list_for_organisation(
        pool: &PgPool,
        organisation_id: DbId,
    ) -> Result<Vec<Incident>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM incidents
             WHERE organisation_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Incident>(&query)
            .bind(organisation_id)
            .fetch_all(pool)
            .await
    }
}
