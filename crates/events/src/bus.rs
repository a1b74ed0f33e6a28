//! In-process audit bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`AuditBus`] is the publish side of the audit trail. It is shared via
//! `Arc<AuditBus>` across the application; publishing never blocks and never
//! fails the request path.

use chrono::{DateTime, Utc};
use riskpilot_core::types::DbId;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

// ---------------------------------------------------------------------------
// AuditEvent
// ---------------------------------------------------------------------------

/// A recordable action that occurred on the platform.
///
/// Constructed via [`AuditEvent::new`] and enriched with the builder methods
/// [`with_organisation`](AuditEvent::with_organisation),
/// [`with_actor`](AuditEvent::with_actor), and
/// [`with_details`](AuditEvent::with_details).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Action name from `riskpilot_core::audit::action_types`, e.g.
    /// `"QUICKSCAN_SUBMITTED"`.
    pub action: String,

    /// Organisation the action concerns, if any.
    pub organisation_id: Option<DbId>,

    /// User that performed the action, if known.
    pub user_id: Option<DbId>,

    /// Free-form JSON details carrying action-specific data.
    pub details: Option<serde_json::Value>,

    /// When the action occurred (UTC).
    pub occurred_at: DateTime<Utc>,
}

impl AuditEvent {
    /// Create a new event with only the required action name.
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            organisation_id: None,
            user_id: None,
            details: None,
            occurred_at: Utc::now(),
        }
    }

    /// Attach the organisation the action concerns.
    pub fn with_organisation(mut self, organisation_id: DbId) -> Self {
        self.organisation_id = Some(organisation_id);
        self
    }

    /// Attach the acting user.
    pub fn with_actor(mut self, user_id: DbId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Set the JSON details for the event.
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

// ---------------------------------------------------------------------------
// AuditBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out bus for audit events.
///
/// Wraps a [`broadcast::Sender`] so any number of subscribers can
/// independently receive every published [`AuditEvent`].
pub struct AuditBus {
    sender: broadcast::Sender<AuditEvent>,
}

impl AuditBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full the oldest un-consumed messages are dropped
    /// and slow receivers observe `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently dropped; the
    /// recorder (when running) ensures database capture.
    pub fn publish(&self, event: AuditEvent) {
        // Ignore the SendError — it only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<AuditEvent> {
        self.sender.subscribe()
    }
}

impl Default for AuditBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
