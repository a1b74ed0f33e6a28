//! Handlers for the `/organisations` resource.

use axum::extract::{Path, State};
use axum::Json;
use riskpilot_core::access::{authorize, Operation};
use riskpilot_core::error::CoreError;
use riskpilot_core::types::DbId;
use riskpilot_db::models::organisation::{Organisation, OrganisationSummary};
use riskpilot_db::repositories::OrganisationRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/organisations
///
/// Portfolio listing with each organisation's latest overall score.
/// Consultant-only.
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<Vec<OrganisationSummary>>> {
    authorize(Some(&auth_user.actor()), Operation::ListOrganisations)?;
    let organisations = OrganisationRepo::list_with_latest_score(&state.pool).await?;
    Ok(Json(organisations))
}

/// GET /api/v1/organisations/{id}
///
/// Single organisation detail. Clients may only read their own organisation.
pub async fn get_by_id(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Organisation>> {
    authorize(
        Some(&auth_user.actor()),
        Operation::ViewOrganisation { organisation_id: id },
    )?;
    let organisation = OrganisationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Organisation",
            id,
        }))?;
    Ok(Json(organisation))
}
