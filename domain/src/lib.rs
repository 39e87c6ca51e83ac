//! Domain layer for toolgate
//!
//! This crate contains the core types of the tool mediation layer and has no
//! dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Capability Catalog
//!
//! Every operation the agent may request is described by a [`ToolDefinition`]:
//! a unique name, a human-readable description, an [`ActionClass`] used by the
//! trust policy, and a parameter schema. The [`Catalog`] is the fixed,
//! insertion-ordered registry of all definitions, established at process start.
//!
//! ## Trust Policy
//!
//! A [`TrustPolicy`] is session-scoped configuration deciding which action
//! classes need operator confirmation: `interactive` confirms everything,
//! `auto-edit` waves file edits through, `full-auto` confirms nothing.
//!
//! ## Outcomes
//!
//! Every mediated call produces exactly one [`ToolOutcome`]: a payload on
//! success, `Cancelled` when approval was withheld, or `Error` with the
//! underlying message. Nothing else crosses the gateway boundary.

pub mod approval;
pub mod core;
pub mod tool;

// Re-export commonly used types
pub use approval::{ApprovalDecision, ApprovalRequest, TrustPolicy};
pub use core::string::truncate;
pub use tool::{
    entities::{ActionClass, Catalog, ParamType, ToolCall, ToolDefinition, ToolParameter},
    names,
    outcome::ToolOutcome,
    validation::{validate, ValidationError},
};
