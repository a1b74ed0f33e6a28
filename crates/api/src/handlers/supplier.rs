//! Handlers for the per-organisation `/suppliers` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use riskpilot_core::access::{authorize, Operation};
use riskpilot_core::audit::action_types;
use riskpilot_core::error::CoreError;
use riskpilot_core::types::DbId;
use riskpilot_db::models::supplier::{CreateSupplier, Supplier};
use riskpilot_db::repositories::{OrganisationRepo, SupplierRepo};
use riskpilot_events::AuditEvent;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Supplier risk rating. Serialized in snake_case like the other
/// enumerations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    fn as_str(self) -> &'static str {
        match self {
            RiskLevel::High => "high",
            RiskLevel::Medium => "medium",
            RiskLevel::Low => "low",
        }
    }
}

/// Request body for `POST /organisations/{id}/suppliers`.
#[derive(Debug, Deserialize)]
pub struct RegisterSupplierRequest {
    pub name: String,
    pub supplier_type: Option<String>,
    pub contact_email: Option<String>,
    pub risk_level: RiskLevel,
    /// Questionnaire workflow status; defaults to `"pending"`.
    pub status: Option<String>,
}

/// GET /api/v1/organisations/{id}/suppliers
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Supplier>>> {
    authorize(
        Some(&auth_user.actor()),
        Operation::ListSuppliers { organisation_id: id },
    )?;
    let suppliers = SupplierRepo::list_for_organisation(&state.pool, id).await?;
    Ok(Json(suppliers))
}

/// POST /api/v1/organisations/{id}/suppliers
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<RegisterSupplierRequest>,
) -> AppResult<(StatusCode, Json<Supplier>)> {
    authorize(
        Some(&auth_user.actor()),
        Operation::RegisterSupplier { organisation_id: id },
    )?;

    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Supplier name must not be empty".into(),
        )));
    }

    let supplier = SupplierRepo::create(
        &state.pool,
        &CreateSupplier {
            organisation_id: id,
            name: input.name,
            supplier_type: input.supplier_type,
            contact_email: input.contact_email,
            risk_level: input.risk_level.as_str().to_string(),
            status: input.status.unwrap_or_else(|| "pending".to_string()),
        },
    )
    .await?;

    OrganisationRepo::touch(&state.pool, id).await?;

    state.audit_bus.publish(
        AuditEvent::new(action_types::SUPPLIER_CREATED)
            .with_organisation(id)
            .with_actor(auth_user.user_id)
            .with_details(serde_json::json!({ "supplier_id": supplier.id })),
    );

    Ok((StatusCode::CREATED, Json(supplier)))
}
