//! Tool domain module
//!
//! Defines the core abstractions of the mediation layer: how a
//! language-model-driven agent requests side-effecting operations in a
//! validated, policy-gated manner.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ Catalog      │───▶│ ToolCall     │───▶│ ToolOutcome  │
//! │ (registry)   │    │ (invocation) │    │ (result)     │
//! └──────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`Catalog`] — insertion-ordered registry of available tools
//! - [`ToolDefinition`] — schema for a single tool (name, params, action class)
//! - [`ToolCall`] — an invocation request with JSON arguments
//! - [`ToolOutcome`] — the discriminated result: success payload, cancelled,
//!   or error
//! - [`validation::validate`] — pure parameter validation against a definition
//!
//! # Architecture
//!
//! The tool domain follows the onion layering of the rest of the workspace:
//!
//! - **Domain** (this module): pure definitions, no I/O
//! - **Application** (`ExecutionGateway`): validate → approve → dispatch
//! - **Infrastructure** (`LocalToolRunner`): concrete file I/O, process
//!   spawning, and HTTP requests

pub mod entities;
pub mod names;
pub mod outcome;
pub mod validation;

pub use entities::{ActionClass, Catalog, ParamType, ToolCall, ToolDefinition, ToolParameter};
pub use outcome::ToolOutcome;
pub use validation::ValidationError;
