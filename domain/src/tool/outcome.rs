//! Tool outcome — the discriminated result of one mediated call
//!
//! Every call through the execution gateway produces exactly one
//! [`ToolOutcome`]. A withheld approval is `Cancelled`, an expected and
//! recoverable outcome the agent should adapt to; `Error` carries validation
//! and execution failures. Nothing else crosses the gateway boundary.

use serde_json::{json, Value};

/// Outcome of a mediated tool call
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutcome {
    /// The operation ran; payload shape is operation-specific
    Success(Value),
    /// Approval was withheld; no side effects occurred
    Cancelled,
    /// Validation or execution failed; message carries the underlying reason
    Error(String),
}

impl ToolOutcome {
    /// Create a successful outcome from a serializable payload
    pub fn success<T: serde::Serialize>(payload: T) -> Self {
        match serde_json::to_value(payload) {
            Ok(value) => ToolOutcome::Success(value),
            Err(e) => ToolOutcome::Error(format!("Failed to encode payload: {}", e)),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        ToolOutcome::Error(message.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ToolOutcome::Success(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ToolOutcome::Cancelled)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ToolOutcome::Error(_))
    }

    /// The success payload, if any
    pub fn payload(&self) -> Option<&Value> {
        match self {
            ToolOutcome::Success(value) => Some(value),
            _ => None,
        }
    }

    /// The error message, if any
    pub fn error_message(&self) -> Option<&str> {
        match self {
            ToolOutcome::Error(message) => Some(message),
            _ => None,
        }
    }

    /// The wire shape handed back to the agent loop:
    /// the payload itself on success, `{"cancelled": true}`, or
    /// `{"error": message}`.
    pub fn into_value(self) -> Value {
        match self {
            ToolOutcome::Success(value) => value,
            ToolOutcome::Cancelled => json!({ "cancelled": true }),
            ToolOutcome::Error(message) => json!({ "error": message }),
        }
    }
}

impl From<Result<Value, String>> for ToolOutcome {
    fn from(result: Result<Value, String>) -> Self {
        match result {
            Ok(value) => ToolOutcome::Success(value),
            Err(message) => ToolOutcome::Error(message),
        }
    }
}
