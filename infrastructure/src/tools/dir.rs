//! Directory tools: list_directory, create_directory, delete_file

use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use toolgate_domain::{names, ActionClass, ParamType, ToolCall, ToolDefinition, ToolParameter};

use super::{payload, ExecutionError};

/// Get the tool definition for list_directory
pub fn list_directory_definition() -> ToolDefinition {
    ToolDefinition::new(
        names::LIST_DIRECTORY,
        "List contents of a directory",
        ActionClass::Inspect,
    )
    .with_parameter(ToolParameter::new("path", "Path to the directory", true))
    .with_parameter(
        ToolParameter::new("recursive", "List recursively", false).with_type(ParamType::Boolean),
    )
}

/// Get the tool definition for create_directory
pub fn create_directory_definition() -> ToolDefinition {
    ToolDefinition::new(
        names::CREATE_DIRECTORY,
        "Create a new directory",
        ActionClass::FileSystem,
    )
    .with_parameter(ToolParameter::new("path", "Path for the new directory", true))
}

/// Get the tool definition for delete_file
pub fn delete_file_definition() -> ToolDefinition {
    ToolDefinition::new(
        names::DELETE_FILE,
        "Delete a file or directory",
        ActionClass::FileSystem,
    )
    .with_parameter(ToolParameter::new("path", "Path to delete", true))
}

#[derive(Serialize)]
struct ListPayload {
    items: Vec<DirEntryInfo>,
}

#[derive(Serialize)]
struct DirEntryInfo {
    name: String,
    #[serde(rename = "type")]
    kind: EntryKind,
    size: u64,
}

#[derive(Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum EntryKind {
    File,
    Directory,
}

#[derive(Serialize)]
struct CreatePayload {
    success: bool,
    path: String,
}

#[derive(Serialize)]
struct DeletePayload {
    success: bool,
    deleted: String,
}

/// Execute the list_directory tool
///
/// Entries carry name, type, and size; with `recursive` the walk reports
/// root-relative paths. Entries are sorted by name for stable output.
pub fn list_directory(call: &ToolCall) -> Result<Value, ExecutionError> {
    let path_str = call.require_str("path").map_err(ExecutionError::Failed)?;
    let recursive = call.get_bool("recursive").unwrap_or(false);

    let path = Path::new(path_str);
    if !path.exists() {
        return Err(ExecutionError::NotFound(path_str.to_string()));
    }
    if !path.is_dir() {
        return Err(ExecutionError::failed(format!(
            "'{}' is not a directory",
            path_str
        )));
    }

    let mut items = Vec::new();
    collect_entries(path, path, recursive, &mut items)?;
    items.sort_by(|a, b| a.name.cmp(&b.name));

    payload(ListPayload { items })
}

fn collect_entries(
    base: &Path,
    dir: &Path,
    recursive: bool,
    items: &mut Vec<DirEntryInfo>,
) -> Result<(), ExecutionError> {
    let entries = fs::read_dir(dir).map_err(|e| match e.kind() {
        ErrorKind::PermissionDenied => ExecutionError::PermissionDenied(dir.display().to_string()),
        _ => ExecutionError::failed(format!("Failed to read directory '{}': {}", dir.display(), e)),
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| {
            ExecutionError::failed(format!(
                "Failed to read directory entry in '{}': {}",
                dir.display(),
                e
            ))
        })?;

        let entry_path = entry.path();
        let metadata = entry.metadata().map_err(|e| {
            ExecutionError::failed(format!(
                "Failed to stat '{}': {}",
                entry_path.display(),
                e
            ))
        })?;

        let name = entry_path
            .strip_prefix(base)
            .unwrap_or(&entry_path)
            .to_string_lossy()
            .into_owned();

        let is_dir = metadata.is_dir();
        items.push(DirEntryInfo {
            name,
            kind: if is_dir {
                EntryKind::Directory
            } else {
                EntryKind::File
            },
            size: metadata.len(),
        });

        if recursive && is_dir {
            collect_entries(base, &entry_path, true, items)?;
        }
    }

    Ok(())
}

/// Execute the create_directory tool
///
/// Succeeds if the directory already exists.
pub fn create_directory(call: &ToolCall) -> Result<Value, ExecutionError> {
    let path = call.require_str("path").map_err(ExecutionError::Failed)?;

    fs::create_dir_all(path).map_err(|e| match e.kind() {
        ErrorKind::PermissionDenied => ExecutionError::PermissionDenied(path.to_string()),
        _ => ExecutionError::failed(format!("Failed to create directory '{}': {}", path, e)),
    })?;

    payload(CreatePayload {
        success: true,
        path: path.to_string(),
    })
}

/// Execute the delete_file tool
///
/// Removes a file or a directory tree. A missing path is treated as already
/// deleted.
pub fn delete_file(call: &ToolCall) -> Result<Value, ExecutionError> {
    let path_str = call.require_str("path").map_err(ExecutionError::Failed)?;
    let path = Path::new(path_str);

    match fs::metadata(path) {
        Ok(metadata) => {
            let result = if metadata.is_dir() {
                fs::remove_dir_all(path)
            } else {
                fs::remove_file(path)
            };
            result.map_err(|e| match e.kind() {
                ErrorKind::PermissionDenied => {
                    ExecutionError::PermissionDenied(path_str.to_string())
                }
                _ => ExecutionError::failed(format!("Failed to delete '{}': {}", path_str, e)),
            })?;
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => {
            return Err(ExecutionError::failed(format!(
                "Failed to stat '{}': {}",
                path_str, e
            )));
        }
    }

    payload(DeletePayload {
        success: true,
        deleted: path_str.to_string(),
    })
}
