//! Repository for the `suppliers` table.

use riskpilot_core::types::DbId;
use sqlx::PgPool;

use crate::models::supplier::{CreateSupplier, Supplier};

const COLUMNS: &str = "\
    id, organisation_id, name, supplier_type, contact_email, risk_level, status, \
    created_at, updated_at";

/// Provides insert and list operations for supplier registrations.
pub struct SupplierRepo;

impl SupplierRepo {
    /// Insert a new supplier, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSupplier) -> Result<Supplier, sqlx::Error> {
        let query = format!(
            "INSERT INTO suppliers
                 (organisation_id, name, supplier_type, contact_email, risk_level, status)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Supplier>(&query)
            .bind(input.organisation_id)
            .bind(&input.name)
            .bind(&input.supplier_type)
            .bind(&input.contact_email)
            .bind(&input.risk_level)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// List an organisation's suppliers, ordered by name.
    pub async fn list_for_organisation(
        pool: &PgPool,
        organisation_id: DbId,
    ) -> Result<Vec<Supplier>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM suppliers
             WHERE organisation_id = $1
             ORDER BY name ASC, id ASC"
        );
        sqlx::query_as::<_, Supplier>(&query)
            .bind(organisation_id)
            .fetch_all(pool)
            .await
    }
}
