//! Tool runner port
//!
//! Defines the interface the execution gateway dispatches through once a
//! call has been validated and approved. Implementations are the only code
//! permitted to touch the filesystem, spawn processes, or perform network
//! I/O.

use async_trait::async_trait;
use toolgate_domain::{ToolCall, ToolOutcome};

/// Port for executing an already-validated, already-approved tool call
///
/// A runner never produces [`ToolOutcome::Cancelled`]; cancellation is the
/// gateway's concern. Every operation-level failure must come back as
/// [`ToolOutcome::Error`] — nothing may propagate out of `run` unstructured.
#[async_trait]
pub trait ToolRunner: Send + Sync {
    async fn run(&self, call: &ToolCall) -> ToolOutcome;
}
