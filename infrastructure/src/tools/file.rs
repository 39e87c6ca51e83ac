//! File content tools: read_file, write_file, edit_file

use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use toolgate_domain::{names, ActionClass, ToolCall, ToolDefinition, ToolParameter};

use super::{payload, ExecutionError};

/// Get the tool definition for read_file
pub fn read_file_definition() -> ToolDefinition {
    ToolDefinition::new(
        names::READ_FILE,
        "Read contents of a file",
        ActionClass::Inspect,
    )
    .with_parameter(ToolParameter::new("path", "Path to the file", true))
}

/// Get the tool definition for write_file
pub fn write_file_definition() -> ToolDefinition {
    ToolDefinition::new(
        names::WRITE_FILE,
        "Write content to a file",
        ActionClass::FileEdit,
    )
    .with_parameter(ToolParameter::new("path", "Path to the file", true))
    .with_parameter(ToolParameter::new("content", "Content to write", true))
}

/// Get the tool definition for edit_file
pub fn edit_file_definition() -> ToolDefinition {
    ToolDefinition::new(
        names::EDIT_FILE,
        "Edit a file by replacing text",
        ActionClass::FileEdit,
    )
    .with_parameter(ToolParameter::new("path", "Path to the file", true))
    .with_parameter(ToolParameter::new("search", "Text to search for", true))
    .with_parameter(ToolParameter::new("replace", "Text to replace with", true))
    .with_parameter(
        ToolParameter::new(
            "regex",
            "Treat the search text as a regular expression",
            false,
        )
        .with_type(toolgate_domain::ParamType::Boolean),
    )
}

#[derive(Serialize)]
struct ReadPayload {
    content: String,
    lines: usize,
}

#[derive(Serialize)]
struct WritePayload {
    success: bool,
    path: String,
}

#[derive(Serialize)]
struct EditPayload {
    success: bool,
    replacements: usize,
}

fn read_to_string(path: &str) -> Result<String, ExecutionError> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ExecutionError::NotFound(path.to_string()),
        ErrorKind::PermissionDenied => ExecutionError::PermissionDenied(path.to_string()),
        _ => ExecutionError::failed(format!("Failed to read file '{}': {}", path, e)),
    })
}

/// Execute the read_file tool
pub fn read_file(call: &ToolCall) -> Result<Value, ExecutionError> {
    let path = call.require_str("path").map_err(ExecutionError::Failed)?;
    let content = read_to_string(path)?;
    let lines = content.split('\n').count();
    payload(ReadPayload { content, lines })
}

/// Execute the write_file tool
///
/// Parent directories are created as needed; an existing file is overwritten
/// unconditionally.
pub fn write_file(call: &ToolCall) -> Result<Value, ExecutionError> {
    let path_str = call.require_str("path").map_err(ExecutionError::Failed)?;
    let content = call.require_str("content").map_err(ExecutionError::Failed)?;

    let path = Path::new(path_str);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                ExecutionError::failed(format!(
                    "Failed to create parent directories for '{}': {}",
                    path_str, e
                ))
            })?;
        }
    }

    fs::write(path, content).map_err(|e| match e.kind() {
        ErrorKind::PermissionDenied => ExecutionError::PermissionDenied(path_str.to_string()),
        _ => ExecutionError::failed(format!("Failed to write file '{}': {}", path_str, e)),
    })?;

    payload(WritePayload {
        success: true,
        path: path_str.to_string(),
    })
}

/// Execute the edit_file tool
///
/// The search text is matched literally; `regex: true` opts into pattern
/// semantics. Zero replacements is a valid outcome meaning no match, and the
/// file content is left byte-identical in that case.
pub fn edit_file(call: &ToolCall) -> Result<Value, ExecutionError> {
    let path = call.require_str("path").map_err(ExecutionError::Failed)?;
    let search = call.require_str("search").map_err(ExecutionError::Failed)?;
    let replace = call.require_str("replace").map_err(ExecutionError::Failed)?;
    let use_regex = call.get_bool("regex").unwrap_or(false);

    let content = read_to_string(path)?;

    let (replacements, edited) = if use_regex {
        let pattern = regex::Regex::new(search)
            .map_err(|e| ExecutionError::failed(format!("Invalid search pattern: {}", e)))?;
        let count = pattern.find_iter(&content).count();
        (count, pattern.replace_all(&content, replace).into_owned())
    } else {
        let count = content.matches(search).count();
        (count, content.replace(search, replace))
    };

    if replacements > 0 {
        fs::write(path, &edited).map_err(|e| {
            ExecutionError::failed(format!("Failed to write file '{}': {}", path, e))
        })?;
    }

    payload(EditPayload {
        success: true,
        replacements,
    })
}
