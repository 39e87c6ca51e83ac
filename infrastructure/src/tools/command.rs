//! Command execution tool: run_command

use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use std::process::{Command, Stdio};
use toolgate_domain::{names, ActionClass, ToolCall, ToolDefinition, ToolParameter};

use super::{payload, ExecutionError};

/// Get the tool definition for run_command
pub fn run_command_definition() -> ToolDefinition {
    ToolDefinition::new(
        names::RUN_COMMAND,
        "Execute a shell command",
        ActionClass::Command,
    )
    .with_parameter(ToolParameter::new("command", "Command to execute", true))
    .with_parameter(ToolParameter::new("cwd", "Working directory", false))
}

#[derive(Serialize)]
struct CommandPayload {
    stdout: String,
    stderr: String,
}

/// Execute the run_command tool
///
/// `fallback_dir` is the session-configured working directory, used when the
/// call does not specify `cwd`. The pipeline blocks until the subprocess
/// exits; no timeout is imposed at this layer, and killing an in-flight
/// process is the agent loop's responsibility.
pub fn run_command(call: &ToolCall, fallback_dir: Option<&str>) -> Result<Value, ExecutionError> {
    let command_str = call.require_str("command").map_err(ExecutionError::Failed)?;
    let working_dir = call.get_str("cwd").or(fallback_dir);

    let mut cmd = if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", command_str]);
        c
    } else {
        let mut c = Command::new("sh");
        c.args(["-c", command_str]);
        c
    };

    if let Some(dir) = working_dir {
        let path = Path::new(dir);
        if !path.exists() {
            return Err(ExecutionError::NotFound(format!(
                "Working directory does not exist: {}",
                dir
            )));
        }
        if !path.is_dir() {
            return Err(ExecutionError::failed(format!(
                "'{}' is not a directory",
                dir
            )));
        }
        cmd.current_dir(path);
    }

    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let output = cmd
        .output()
        .map_err(|e| ExecutionError::failed(format!("Failed to spawn command: {}", e)))?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !output.status.success() {
        let exit_code = output.status.code().unwrap_or(-1);
        return Err(ExecutionError::failed(format!(
            "Command exited with code {}\n{}",
            exit_code, stderr
        )));
    }

    payload(CommandPayload { stdout, stderr })
}
