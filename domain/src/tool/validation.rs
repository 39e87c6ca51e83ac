//! Pure validation of tool calls against their catalog definitions
//!
//! Validation has no side effects and runs to completion before any approval
//! request is issued, so rejected syntax never reaches the operator.

use thiserror::Error;

use super::entities::{Catalog, ParamType, ToolCall, ToolDefinition};

/// Why a tool call was rejected before dispatch
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The requested name is not in the catalog
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    /// A parameter marked required is absent
    #[error("Missing required parameter '{field}' for tool '{tool}'")]
    MissingParameter { tool: String, field: String },

    /// A present parameter's value has the wrong primitive type
    #[error("Parameter '{field}' of tool '{tool}' expects {expected}, got {actual}")]
    TypeMismatch {
        tool: String,
        field: String,
        expected: ParamType,
        actual: &'static str,
    },

    /// A present parameter is not declared in the schema
    #[error("Unexpected parameter '{field}' for tool '{tool}'")]
    UnexpectedParameter { tool: String, field: String },

    /// An enumerated parameter's value is outside the allowed set
    #[error("Parameter '{field}' of tool '{tool}' must be one of [{allowed}], got '{value}'")]
    NotAllowed {
        tool: String,
        field: String,
        value: String,
        allowed: String,
    },
}

/// Name of a JSON value's kind, for diagnostics
fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Validate a tool call against its definition
///
/// Checks, in order: every required parameter is present; every present
/// parameter is declared; every present value matches its declared type and,
/// if enumerated, one of the allowed values.
pub fn validate(call: &ToolCall, definition: &ToolDefinition) -> Result<(), ValidationError> {
    for param in &definition.parameters {
        if param.required && !call.arguments.contains_key(&param.name) {
            return Err(ValidationError::MissingParameter {
                tool: definition.name.clone(),
                field: param.name.clone(),
            });
        }
    }

    for (arg_name, value) in &call.arguments {
        let param = match definition.parameter(arg_name) {
            Some(p) => p,
            None => {
                return Err(ValidationError::UnexpectedParameter {
                    tool: definition.name.clone(),
                    field: arg_name.clone(),
                });
            }
        };

        if !param.param_type.matches(value) {
            return Err(ValidationError::TypeMismatch {
                tool: definition.name.clone(),
                field: arg_name.clone(),
                expected: param.param_type,
                actual: json_kind(value),
            });
        }

        if let Some(allowed) = &param.allowed_values {
            // Enumerated parameters are strings by construction
            let s = value.as_str().unwrap_or_default();
            if !allowed.iter().any(|a| a == s) {
                return Err(ValidationError::NotAllowed {
                    tool: definition.name.clone(),
                    field: arg_name.clone(),
                    value: s.to_string(),
                    allowed: allowed.join(", "),
                });
            }
        }
    }

    Ok(())
}

impl Catalog {
    /// Resolve a call's name and validate its arguments, returning the
    /// matched definition on success
    pub fn validate_call(&self, call: &ToolCall) -> Result<&ToolDefinition, ValidationError> {
        let definition = self.get(&call.name).ok_or_else(|| ValidationError::UnknownTool {
            name: call.name.clone(),
        })?;
        validate(call, definition)?;
        Ok(definition)
    }
}
