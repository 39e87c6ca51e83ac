//! Tool handler implementations
//!
//! One module per operation family. Each module contributes its catalog
//! definitions and a handler function; [`default_catalog`] assembles the full
//! registry in the order it is advertised to the agent, and
//! [`LocalToolRunner`] routes approved calls to the handlers.
//!
//! Handlers return `Result<serde_json::Value, ExecutionError>`; the runner
//! converts every failure into a `ToolOutcome::Error` so nothing escapes the
//! gateway boundary unstructured.

pub mod command;
pub mod dir;
pub mod file;
pub mod http;
pub mod system;

mod runner;

pub use runner::LocalToolRunner;

use serde::Serialize;
use thiserror::Error;
use toolgate_domain::Catalog;

/// Operation-level failure inside a handler
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// Target path or resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// The operating system refused access
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Any other I/O, subprocess, or network failure
    #[error("{0}")]
    Failed(String),
}

impl ExecutionError {
    pub fn failed(message: impl Into<String>) -> Self {
        ExecutionError::Failed(message.into())
    }
}

/// Encode a handler payload as its wire value
pub(crate) fn payload<T: Serialize>(value: T) -> Result<serde_json::Value, ExecutionError> {
    serde_json::to_value(value)
        .map_err(|e| ExecutionError::failed(format!("Failed to encode payload: {}", e)))
}

/// The full capability catalog, in the order advertised to the agent loop
pub fn default_catalog() -> Catalog {
    Catalog::new()
        .register(file::read_file_definition())
        .register(file::write_file_definition())
        .register(file::edit_file_definition())
        .register(dir::list_directory_definition())
        .register(dir::create_directory_definition())
        .register(dir::delete_file_definition())
        .register(command::run_command_definition())
        .register(http::http_request_definition())
        .register(system::environment_info_definition())
}
