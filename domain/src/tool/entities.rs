//! Tool catalog entities

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;

/// Classification of a tool's side effect, used by the trust policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionClass {
    /// Read-only inspection of files, directories, or process state
    Inspect,
    /// File content creation or modification (write, search-and-replace)
    FileEdit,
    /// Directory creation or recursive deletion
    FileSystem,
    /// Subprocess execution
    Command,
    /// Outbound network access
    Network,
}

impl ActionClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionClass::Inspect => "inspect",
            ActionClass::FileEdit => "file_edit",
            ActionClass::FileSystem => "file_system",
            ActionClass::Command => "command",
            ActionClass::Network => "network",
        }
    }

    /// Whether this class belongs to the edit category the `auto-edit`
    /// policy waves through. Directory mutation and command execution do not.
    pub fn is_file_edit(&self) -> bool {
        matches!(self, ActionClass::FileEdit)
    }
}

impl std::fmt::Display for ActionClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Primitive type a parameter value must have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Number,
    Boolean,
    Object,
}

impl ParamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::String => "string",
            ParamType::Number => "number",
            ParamType::Boolean => "boolean",
            ParamType::Object => "object",
        }
    }

    /// Check a JSON value against this type
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            ParamType::String => value.is_string(),
            ParamType::Number => value.is_number(),
            ParamType::Boolean => value.is_boolean(),
            ParamType::Object => value.is_object(),
        }
    }
}

impl std::fmt::Display for ParamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parameter specification for a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolParameter {
    /// Parameter name
    pub name: String,
    /// Parameter description
    pub description: String,
    /// Whether this parameter is required
    pub required: bool,
    /// Declared primitive type
    pub param_type: ParamType,
    /// Enumerated values, if the parameter is restricted to a fixed set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<String>>,
}

impl ToolParameter {
    pub fn new(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required,
            param_type: ParamType::String,
            allowed_values: None,
        }
    }

    pub fn with_type(mut self, param_type: ParamType) -> Self {
        self.param_type = param_type;
        self
    }

    pub fn with_allowed_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_values = Some(values.into_iter().map(Into::into).collect());
        self
    }
}

/// Definition of a tool the agent may request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique name of the tool (e.g., "read_file")
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Side-effect classification, consumed by the trust policy
    pub class: ActionClass,
    /// Parameter specifications
    pub parameters: Vec<ToolParameter>,
}

impl ToolDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        class: ActionClass,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            class,
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, param: ToolParameter) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn parameter(&self, name: &str) -> Option<&ToolParameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Declarative schema exposed to the agent loop, the contract a
    /// function-calling interface binds against:
    /// `{ name, description, parameters: { field: { type, required, enum? } } }`.
    /// Field names and types are stable.
    pub fn schema(&self) -> Value {
        let mut params = serde_json::Map::new();
        for p in &self.parameters {
            let mut field = serde_json::Map::new();
            field.insert("type".into(), json!(p.param_type.as_str()));
            field.insert("required".into(), json!(p.required));
            if let Some(values) = &p.allowed_values {
                field.insert("enum".into(), json!(values));
            }
            params.insert(p.name.clone(), Value::Object(field));
        }
        json!({
            "name": self.name,
            "description": self.description,
            "parameters": params,
        })
    }
}

/// The fixed, insertion-ordered registry of every tool the agent may request
///
/// Established once at process start and never mutated afterwards. Order is
/// part of the external contract: [`all()`](Self::all) and
/// [`schemas()`](Self::schemas) advertise tools in registration order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tools: Vec<ToolDefinition>,
}

impl Catalog {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    pub fn register(mut self, tool: ToolDefinition) -> Self {
        self.tools.push(tool);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.iter().find(|t| t.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All definitions in registration order
    pub fn all(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.iter().map(|t| t.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Function-calling schemas for every tool, in registration order
    pub fn schemas(&self) -> Vec<Value> {
        self.tools.iter().map(|t| t.schema()).collect()
    }
}

/// A request to invoke a tool with arguments
///
/// Constructed by the agent loop per invocation, consumed once by the
/// execution gateway, not retained afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Name of the tool to call
    pub name: String,
    /// Arguments passed to the tool
    pub arguments: HashMap<String, Value>,
}

impl ToolCall {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: HashMap::new(),
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    /// Get a string argument
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(|v| v.as_str())
    }

    /// Get a required string argument or an error message
    pub fn require_str(&self, key: &str) -> Result<&str, String> {
        self.get_str(key)
            .ok_or_else(|| format!("Missing required argument: {}", key))
    }

    /// Get an optional bool argument
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.arguments.get(key).and_then(|v| v.as_bool())
    }

    /// Get an optional object argument
    pub fn get_object(&self, key: &str) -> Option<&serde_json::Map<String, Value>> {
        self.arguments.get(key).and_then(|v| v.as_object())
    }

    /// Get an optional argument as a raw JSON value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.arguments.get(key)
    }
}
