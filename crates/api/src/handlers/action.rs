//! Handlers for improvement actions.
//!
//! Actions are reachable two ways: nested under an organisation (list,
//! consultant-created manual actions) and at the top level (`/actions` for
//! scope-aware listing across the actor's entitlement, `/actions/{id}` for
//! status updates).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use riskpilot_core::access::{authorize, list_scope, Operation};
use riskpilot_core::audit::action_types;
use riskpilot_core::error::CoreError;
use riskpilot_core::improvement::{ActionCategory, ActionPriority, ActionStatus};
use riskpilot_core::types::{DbId, Timestamp};
use riskpilot_db::models::action::{CreateAction, ImprovementAction};
use riskpilot_db::repositories::ActionRepo;
use riskpilot_events::AuditEvent;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /organisations/{id}/actions`.
#[derive(Debug, Deserialize)]
pub struct CreateActionRequest {
    pub title: String,
    pub category: ActionCategory,
    pub priority: ActionPriority,
    pub due_date: Option<Timestamp>,
}

/// Request body for `PATCH /actions/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateActionStatusRequest {
    pub status: ActionStatus,
}

/// Query parameters for action listings.
#[derive(Debug, Deserialize)]
pub struct ActionListQuery {
    pub status: Option<ActionStatus>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/actions
///
/// List actions across the actor's entitlement: the whole portfolio for
/// consultants, their own organisation for clients.
pub async fn list_scoped(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(query): Query<ActionListQuery>,
) -> AppResult<Json<Vec<ImprovementAction>>> {
    let scope = list_scope(&auth_user.actor()).map_err(AppError::from)?;
    let status = query.status.map(ActionStatus::as_str);
    let actions = ActionRepo::list_scoped(&state.pool, scope, status).await?;
    Ok(Json(actions))
}

/// GET /api/v1/organisations/{id}/actions
pub async fn list_for_organisation(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Query(query): Query<ActionListQuery>,
) -> AppResult<Json<Vec<ImprovementAction>>> {
    authorize(
        Some(&auth_user.actor()),
        Operation::ListActions { organisation_id: id },
    )?;
    let status = query.status.map(ActionStatus::as_str);
    let actions = ActionRepo::list_scoped(
        &state.pool,
        riskpilot_core::access::OrgScope::SingleOrganisation(id),
        status,
    )
    .await?;
    Ok(Json(actions))
}

/// POST /api/v1/organisations/{id}/actions
///
/// Create a manual improvement action. Consultant-only.
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreateActionRequest>,
) -> AppResult<(StatusCode, Json<ImprovementAction>)> {
    authorize(
        Some(&auth_user.actor()),
        Operation::CreateManualAction { organisation_id: id },
    )?;

    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Action title must not be empty".into(),
        )));
    }

    let action = ActionRepo::create(
        &state.pool,
        &CreateAction {
            organisation_id: id,
            title: input.title,
            category: input.category.as_str().to_string(),
            priority: input.priority.as_str().to_string(),
            due_date: input.due_date,
        },
    )
    .await?;

    state.audit_bus.publish(
        AuditEvent::new(action_types::ACTION_CREATED)
            .with_organisation(id)
            .with_actor(auth_user.user_id)
            .with_details(serde_json::json!({ "action_id": action.id })),
    );

    Ok((StatusCode::CREATED, Json(action)))
}

/// PATCH /api/v1/actions/{id}
///
/// Move an action to a new status. The owning organisation is looked up
/// from the action itself, then the ownership gate runs against it.
pub async fn update_status(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateActionStatusRequest>,
) -> AppResult<Json<ImprovementAction>> {
    let action = ActionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ImprovementAction",
            id,
        }))?;

    authorize(
        Some(&auth_user.actor()),
        Operation::UpdateActionStatus {
            organisation_id: action.organisation_id,
        },
    )?;

    let previous_status = action.status.clone();
    let updated = ActionRepo::update_status(&state.pool, id, input.status.as_str())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ImprovementAction",
            id,
        }))?;

    state.audit_bus.publish(
        AuditEvent::new(action_types::ACTION_STATUS_CHANGED)
            .with_organisation(updated.organisation_id)
            .with_actor(auth_user.user_id)
            .with_details(serde_json::json!({
                "action_id": id,
                "from": previous_status,
                "to": updated.status,
            })),
    );

    Ok(Json(updated))
}
