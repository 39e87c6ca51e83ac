//! Configuration loading
//!
//! Process-lifetime configuration supplied by the caller: the trust policy,
//! the working directory for command execution, and the HTTP request timeout.

mod file_config;
mod loader;

pub use file_config::{ApprovalConfig, CommandConfig, FileConfig, HttpConfig};
pub use loader::ConfigLoader;
