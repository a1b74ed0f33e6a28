//! Improvement-action enumerations.
//!
//! Category mirrors the scoring categories plus `other`; priority and status
//! are the fixed three-value sets from the questionnaire workflow. Status is
//! a free-form enumeration: `open -> in_progress -> done` is the expected
//! direction but backward transitions are accepted (see DESIGN.md).

use serde::{Deserialize, Serialize};

/// Category of an improvement action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionCategory {
    Governance,
    RiskManagement,
    Incident,
    Suppliers,
    Other,
}

impl ActionCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionCategory::Governance => "governance",
            ActionCategory::RiskManagement => "risk_management",
            ActionCategory::Incident => "incident",
            ActionCategory::Suppliers => "suppliers",
            ActionCategory::Other => "other",
        }
    }
}

/// Priority of an improvement action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionPriority {
    High,
    Medium,
    Low,
}

impl ActionPriority {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionPriority::High => "high",
            ActionPriority::Medium => "medium",
            ActionPriority::Low => "low",
        }
    }
}

/// Workflow status of an improvement action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionStatus {
    Open,
    InProgress,
    Done,
}

impl ActionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionStatus::Open => "open",
            ActionStatus::InProgress => "in_progress",
            ActionStatus::Done => "done",
        }
    }
}
