//! Well-known audit action-type constants.
//!
//! These live in `core` (zero internal deps) so the API handlers that emit
//! audit events and the recorder that persists them agree on one vocabulary.

pub mod action_types {
    pub const LOGIN: &str = "LOGIN";
    pub const QUICKSCAN_SUBMITTED: &str = "QUICKSCAN_SUBMITTED";
    pub const SCORE_RECALCULATED: &str = "SCORE_RECALCULATED";
    pub const ACTION_CREATED: &str = "ACTION_CREATED";
    pub const ACTION_STATUS_CHANGED: &str = "ACTION_STATUS_CHANGED";
    pub const INCIDENT_CREATED: &str = "INCIDENT_CREATED";
    pub const SUPPLIER_CREATED: &str = "SUPPLIER_CREATED";
}
