//! Handlers for quickscan submission and risk-score reads/recalculation.
//!
//! The flow is always the same: authorize, run the pure scoring engine
//! against the injected catalog, persist the derived score, emit an audit
//! event. Scores are append-only; the latest row per organisation wins.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use riskpilot_core::access::{authorize, Operation};
use riskpilot_core::audit::action_types;
use riskpilot_core::error::CoreError;
use riskpilot_core::improvement::{ActionCategory, ActionPriority};
use riskpilot_core::scoring::{calculate_risk_score, Answer};
use riskpilot_core::types::DbId;
use riskpilot_db::models::action::CreateAction;
use riskpilot_db::models::quickscan::CreateQuickscan;
use riskpilot_db::models::risk_score::{CreateRiskScore, RiskScore};
use riskpilot_db::repositories::{ActionRepo, OrganisationRepo, QuickscanRepo, RiskScoreRepo};
use riskpilot_events::AuditEvent;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Overall score below which a quickscan auto-creates a follow-up action.
const AUTO_ACTION_THRESHOLD: i32 = 50;

/// Title of the auto-created follow-up action.
const AUTO_ACTION_TITLE: &str = "Review NIS2 Gaps based on recent Quickscan";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /organisations/{id}/quickscan`.
///
/// Answer values outside the three-value enumeration are rejected by serde
/// before any scoring runs.
#[derive(Debug, Deserialize)]
pub struct QuickscanRequest {
    pub answers: HashMap<String, Answer>,
    /// Where the submission came from; defaults to `"portal"`.
    pub source: Option<String>,
}

/// Response body for a quickscan submission.
#[derive(Debug, Serialize)]
pub struct QuickscanResponse {
    pub score: RiskScore,
    /// Whether the low-score follow-up action was created.
    pub action_created: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/organisations/{id}/risk-score
///
/// The organisation's latest risk score. 404 when never scored.
pub async fn get_latest(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<RiskScore>> {
    authorize(
        Some(&auth_user.actor()),
        Operation::ViewRiskScore { organisation_id: id },
    )?;
    let score = RiskScoreRepo::find_latest_for_organisation(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "RiskScore",
            id,
        }))?;
    Ok(Json(score))
}

/// POST /api/v1/organisations/{id}/quickscan
///
/// Score a questionnaire submission. Stores the raw answers verbatim, the
/// derived score, and (below the threshold) a high-priority follow-up action.
pub async fn submit_quickscan(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<QuickscanRequest>,
) -> AppResult<(StatusCode, Json<QuickscanResponse>)> {
    authorize(
        Some(&auth_user.actor()),
        Operation::SubmitQuickscan { organisation_id: id },
    )?;

    // The submission targets an existing organisation.
    OrganisationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Organisation",
            id,
        }))?;

    let result = calculate_risk_score(&input.answers, &state.catalog);

    let raw_answers = serde_json::to_value(&input.answers)
        .map_err(|e| AppError::InternalError(format!("Answer serialization error: {e}")))?;
    QuickscanRepo::create(
        &state.pool,
        &CreateQuickscan {
            organisation_id: id,
            raw_answers,
            source: input.source.unwrap_or_else(|| "portal".to_string()),
        },
    )
    .await?;

    let score =
        RiskScoreRepo::create(&state.pool, &CreateRiskScore::from_result(id, &result)).await?;

    let action_created = if result.overall_score < AUTO_ACTION_THRESHOLD {
        ActionRepo::create(
            &state.pool,
            &CreateAction {
                organisation_id: id,
                title: AUTO_ACTION_TITLE.to_string(),
                category: ActionCategory::Governance.as_str().to_string(),
                priority: ActionPriority::High.as_str().to_string(),
                due_date: None,
            },
        )
        .await?;
        true
    } else {
        false
    };

    OrganisationRepo::touch(&state.pool, id).await?;

    state.audit_bus.publish(
        AuditEvent::new(action_types::QUICKSCAN_SUBMITTED)
            .with_organisation(id)
            .with_actor(auth_user.user_id)
            .with_details(serde_json::json!({
                "overall_score": result.overall_score,
                "action_created": action_created,
            })),
    );

    Ok((
        StatusCode::CREATED,
        Json(QuickscanResponse {
            score,
            action_created,
        }),
    ))
}

/// POST /api/v1/organisations/{id}/risk-score/recalculate
///
/// Replay the organisation's most recent stored answers through the scoring
/// engine and append a fresh score row. Consultant-only.
pub async fn recalculate(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<RiskScore>> {
    authorize(
        Some(&auth_user.actor()),
        Operation::RecalculateRiskScore { organisation_id: id },
    )?;

    let quickscan = QuickscanRepo::find_latest_for_organisation(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "QuickscanResult",
            id,
        }))?;

    let answers: HashMap<String, Answer> = serde_json::from_value(quickscan.raw_answers)
        .map_err(|e| AppError::InternalError(format!("Stored answers are unreadable: {e}")))?;

    let result = calculate_risk_score(&answers, &state.catalog);
    let score =
        RiskScoreRepo::create(&state.pool, &CreateRiskScore::from_result(id, &result)).await?;

    state.audit_bus.publish(
        AuditEvent::new(action_types::SCORE_RECALCULATED)
            .with_organisation(id)
            .with_actor(auth_user.user_id)
            .with_details(serde_json::json!({ "overall_score": result.overall_score })),
    );

    Ok(Json(score))
}
