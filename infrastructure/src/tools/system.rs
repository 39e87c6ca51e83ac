//! Process metadata tool: get_environment_info

use serde::Serialize;
use serde_json::Value;
use std::env;
use toolgate_domain::{names, ActionClass, ToolCall, ToolDefinition};

use super::{payload, ExecutionError};

/// Get the tool definition for get_environment_info
pub fn environment_info_definition() -> ToolDefinition {
    ToolDefinition::new(
        names::GET_ENVIRONMENT_INFO,
        "Get system and environment information",
        ActionClass::Inspect,
    )
}

#[derive(Serialize)]
struct EnvironmentPayload {
    platform: &'static str,
    arch: &'static str,
    version: &'static str,
    cwd: String,
    env: RestrictedEnv,
}

/// The fixed allow-list of environment variables reported to the agent.
/// The full environment is never dumped.
#[derive(Serialize)]
struct RestrictedEnv {
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    home: Option<String>,
}

/// Execute the get_environment_info tool
pub fn environment_info(_call: &ToolCall) -> Result<Value, ExecutionError> {
    let cwd = env::current_dir()
        .map_err(|e| ExecutionError::failed(format!("Failed to read working directory: {}", e)))?
        .display()
        .to_string();

    payload(EnvironmentPayload {
        platform: env::consts::OS,
        arch: env::consts::ARCH,
        version: env!("CARGO_PKG_VERSION"),
        cwd,
        env: RestrictedEnv {
            user: env::var("USER").or_else(|_| env::var("USERNAME")).ok(),
            home: env::var("HOME").or_else(|_| env::var("USERPROFILE")).ok(),
        },
    })
}
