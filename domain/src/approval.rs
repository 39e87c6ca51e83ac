//! Trust policy and approval types
//!
//! A [`TrustPolicy`] is set once at session start and consulted by the
//! approval gate on every call. It is replaced wholesale if the mode must
//! change; there is no in-place mutation.

use serde::{Deserialize, Serialize};

use crate::tool::entities::ActionClass;

/// Session-scoped policy governing which action classes require operator
/// confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrustPolicy {
    /// Every action requires operator confirmation
    Interactive,
    /// File-edit actions are auto-approved; everything else asks
    AutoEdit,
    /// Every action is auto-approved
    FullAuto,
}

impl TrustPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrustPolicy::Interactive => "interactive",
            TrustPolicy::AutoEdit => "auto-edit",
            TrustPolicy::FullAuto => "full-auto",
        }
    }

    /// The pure decision table: does this policy grant the given action
    /// class without asking the operator?
    pub fn auto_grants(&self, class: ActionClass) -> bool {
        match self {
            TrustPolicy::FullAuto => true,
            TrustPolicy::AutoEdit => class.is_file_edit(),
            TrustPolicy::Interactive => false,
        }
    }
}

impl Default for TrustPolicy {
    fn default() -> Self {
        TrustPolicy::Interactive
    }
}

impl std::fmt::Display for TrustPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TrustPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "interactive" => Ok(TrustPolicy::Interactive),
            "auto-edit" => Ok(TrustPolicy::AutoEdit),
            "full-auto" => Ok(TrustPolicy::FullAuto),
            other => Err(format!(
                "Unknown trust policy '{}' (expected interactive, auto-edit, or full-auto)",
                other
            )),
        }
    }
}

/// What the gate presents to the operator for one tool call
///
/// Built by the execution gateway after validation and before any mutation:
/// a human-readable action category plus an operation-specific detail string.
#[derive(Debug, Clone)]
pub struct ApprovalRequest {
    /// Human-readable action category (e.g., "Write file")
    pub action: String,
    /// Operation-specific details shown to the operator
    pub details: String,
    /// Side-effect classification, consumed by the policy
    pub class: ActionClass,
}

impl ApprovalRequest {
    pub fn new(action: impl Into<String>, details: impl Into<String>, class: ActionClass) -> Self {
        Self {
            action: action.into(),
            details: details.into(),
            class,
        }
    }
}

/// The gate's answer for a single tool call
///
/// Ephemeral: produced per call, never persisted, never reused even for
/// identical arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalDecision {
    Approved,
    Denied,
}

impl ApprovalDecision {
    pub fn is_approved(&self) -> bool {
        matches!(self, ApprovalDecision::Approved)
    }
}

impl From<bool> for ApprovalDecision {
    fn from(approved: bool) -> Self {
        if approved {
            ApprovalDecision::Approved
        } else {
            ApprovalDecision::Denied
        }
    }
}
