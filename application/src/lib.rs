//! Application layer for toolgate
//!
//! Contains the two decision-making components of the mediation layer and the
//! ports they depend on:
//!
//! - [`ApprovalGate`] — decides, under the session's [`TrustPolicy`]
//!   (`toolgate_domain::TrustPolicy`), whether an action may proceed,
//!   optionally by prompting an interactive operator through the
//!   [`OperatorPrompt`] port.
//! - [`ExecutionGateway`] — orchestrates one tool call end-to-end:
//!   validate against the catalog, describe the action for the operator,
//!   consult the gate, dispatch through the [`ToolRunner`] port.
//!
//! Adapters for the ports live in the infrastructure layer (tool handlers)
//! and presentation layer (terminal prompt).

pub mod gate;
pub mod gateway;
pub mod ports;

pub use gate::ApprovalGate;
pub use gateway::ExecutionGateway;
pub use ports::operator_prompt::{OperatorPrompt, PromptError, StaticPrompt};
pub use ports::tool_runner::ToolRunner;
