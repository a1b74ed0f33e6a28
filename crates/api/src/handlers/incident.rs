//! Handlers for the per-organisation `/incidents` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use riskpilot_core::access::{authorize, Operation};
use riskpilot_core::audit::action_types;
use riskpilot_core::error::CoreError;
use riskpilot_core::types::{DbId, Timestamp};
use riskpilot_db::models::incident::{CreateIncident, Incident};
use riskpilot_db::repositories::{IncidentRepo, OrganisationRepo};
use riskpilot_events::AuditEvent;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /organisations/{id}/incidents`.
#[derive(Debug, Deserialize)]
pub struct ReportIncidentRequest {
    pub incident_type: String,
    pub impact: String,
    pub discovered_at: Timestamp,
    pub initial_actions: Option<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
}

/// GET /api/v1/organisations/{id}/incidents
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Incident>>> {
    authorize(
        Some(&auth_user.actor()),
        Operation::ListIncidents { organisation_id: id },
    )?;
    let incidents = IncidentRepo::list_for_organisation(&state.pool, id).await?;
    Ok(Json(incidents))
}

/// POST /api/v1/organisations/{id}/incidents
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<ReportIncidentRequest>,
) -> AppResult<(StatusCode, Json<Incident>)> {
    authorize(
        Some(&auth_user.actor()),
        Operation::ReportIncident { organisation_id: id },
    )?;

    if input.incident_type.trim().is_empty() || input.impact.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Incident type and impact must not be empty".into(),
        )));
    }

    let incident = IncidentRepo::create(
        &state.pool,
        &CreateIncident {
            organisation_id: id,
            incident_type: input.incident_type,
            impact: input.impact,
            discovered_at: input.discovered_at,
            initial_actions: input.initial_actions,
            contact_name: input.contact_name,
            contact_email: input.contact_email,
        },
    )
    .await?;

    OrganisationRepo::touch(&state.pool, id).await?;

    state.audit_bus.publish(
        AuditEvent::new(action_types::INCIDENT_CREATED)
            .with_organisation(id)
            .with_actor(auth_user.user_id)
            .with_details(serde_json::json!({ "incident_id": incident.id })),
    );

    Ok((StatusCode::CREATED, Json(incident)))
}
