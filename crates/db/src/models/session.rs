//! Refresh-token session entity model and DTOs.

use riskpilot_core::types::{DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;

/// A refresh-token session row. Only the SHA-256 hash of the refresh token
/// is stored.
#[derive(Debug, Clone, FromRow)]
pub struct UserSession {
    pub id: DbId,
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub revoked_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for creating a session.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSession {
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
}
