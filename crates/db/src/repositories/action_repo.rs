//! Repository for the `improvement_actions` table.

use riskpilot_core::access::OrgScope;
use riskpilot_core::types::DbId;
use sqlx::PgPool;

use crate::models::action::{CreateAction, ImprovementAction};

const COLUMNS: &str = "\
    id, organisation_id, title, category, priority, status, due_date, \
    created_at, updated_at";

/// Provides CRUD operations for improvement actions.
pub struct ActionRepo;

impl ActionRepo {
    /// Insert a new action with status `open`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAction,
    ) -> Result<ImprovementAction, sqlx::Error> {
        let query = format!(
            "INSERT INTO improvement_actions
                 (organisation_id, title, category, priority, status, due_date)
             VALUES ($1, $2, $3, $4, 'open', $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ImprovementAction>(&query)
            .bind(input.organisation_id)
            .bind(&input.title)
            .bind(&input.category)
            .bind(&input.priority)
            .bind(input.due_date)
            .fetch_one(pool)
            .await
    }

    /// Find an action by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ImprovementAction>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM improvement_actions WHERE id = $1");
        sqlx::query_as::<_, ImprovementAction>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List actions within an [`OrgScope`], optionally filtered by status,
    /// newest first.
    ///
    /// The scope variant decides the WHERE clause; there is no loosely-typed
    /// filter object to drift out of sync with the access decision.
    pub async fn list_scoped(
        pool: &PgPool,
        scope: OrgScope,
        status: Option<&str>,
    ) -> Result<Vec<ImprovementAction>, sqlx::Error> {
        match (scope, status) {
            (OrgScope::AllOrganisations, None) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM improvement_actions ORDER BY created_at DESC, id DESC"
                );
                sqlx::query_as::<_, ImprovementAction>(&query)
                    .fetch_all(pool)
                    .await
            }
            (OrgScope::AllOrganisations, Some(status)) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM improvement_actions
                     WHERE status = $1
                     ORDER BY created_at DESC, id DESC"
                );
                sqlx::query_as::<_, ImprovementAction>(&query)
                    .bind(status)
                    .fetch_all(pool)
                    .await
            }
            (OrgScope::SingleOrganisation(org_id), None) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM improvement_actions
                     WHERE organisation_id = $1
                     ORDER BY created_at DESC, id DESC"
                );
                sqlx::query_as::<_, ImprovementAction>(&query)
                    .bind(org_id)
                    .fetch_all(pool)
                    .await
            }
            (OrgScope::SingleOrganisation(org_id), Some(status)) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM improvement_actions
                     WHERE organisation_id = $1 AND status = $2
                     ORDER BY created_at DESC, id DESC"
                );
                sqlx::query_as::<_, ImprovementAction>(&query)
                    .bind(org_id)
                    .bind(status)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Update an action's status. Returns `None` if the action does not exist.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<ImprovementAction>, sqlx::Error> {
        let query = format!(
            "UPDATE improvement_actions
             SET status = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ImprovementAction>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }
}
