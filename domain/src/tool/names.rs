//! Canonical tool names
//!
//! These names are the external contract the agent's function-calling schema
//! binds against. The set is fixed at process start; handlers, catalog
//! definitions, and approval descriptions all key off the same constants.

pub const READ_FILE: &str = "read_file";
pub const WRITE_FILE: &str = "write_file";
pub const EDIT_FILE: &str = "edit_file";
pub const LIST_DIRECTORY: &str = "list_directory";
pub const CREATE_DIRECTORY: &str = "create_directory";
pub const DELETE_FILE: &str = "delete_file";
pub const RUN_COMMAND: &str = "run_command";
pub const HTTP_REQUEST: &str = "http_request";
pub const GET_ENVIRONMENT_INFO: &str = "get_environment_info";
