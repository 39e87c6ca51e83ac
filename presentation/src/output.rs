//! Console output formatting

use colored::Colorize;
use toolgate_domain::{Catalog, ToolOutcome};

/// Formats catalog listings and tool outcomes for the terminal
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Human-readable catalog listing, in catalog order
    pub fn format_catalog(catalog: &Catalog) -> String {
        let mut out = String::new();

        for tool in catalog.all() {
            out.push_str(&format!(
                "{}  {}\n",
                tool.name.bold(),
                format!("[{}]", tool.class).dimmed()
            ));
            out.push_str(&format!("    {}\n", tool.description));

            for param in &tool.parameters {
                let required = if param.required { "required" } else { "optional" };
                let mut line = format!(
                    "    - {} ({}, {})",
                    param.name, param.param_type, required
                );
                if let Some(values) = &param.allowed_values {
                    line.push_str(&format!(" one of [{}]", values.join(", ")));
                }
                out.push_str(&line);
                out.push('\n');
            }
            out.push('\n');
        }

        out
    }

    /// The function-calling schemas as pretty JSON
    pub fn format_catalog_json(catalog: &Catalog) -> String {
        serde_json::to_string_pretty(&catalog.schemas()).unwrap_or_else(|_| "[]".to_string())
    }

    /// The wire-shape JSON of one outcome
    pub fn format_outcome(outcome: ToolOutcome) -> String {
        serde_json::to_string_pretty(&outcome.into_value())
            .unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolgate_domain::{ActionClass, ToolDefinition, ToolParameter};

    fn catalog() -> Catalog {
        Catalog::new().register(
            ToolDefinition::new("read_file", "Read contents of a file", ActionClass::Inspect)
                .with_parameter(ToolParameter::new("path", "Path to the file", true)),
        )
    }

    #[test]
    fn test_format_catalog_lists_tools_and_params() {
        let text = ConsoleFormatter::format_catalog(&catalog());
        assert!(text.contains("read_file"));
        assert!(text.contains("path"));
        assert!(text.contains("required"));
    }

    #[test]
    fn test_format_catalog_json_is_valid() {
        let json = ConsoleFormatter::format_catalog_json(&catalog());
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["name"], "read_file");
    }

    #[test]
    fn test_format_outcome_cancelled() {
        let text = ConsoleFormatter::format_outcome(ToolOutcome::Cancelled);
        assert!(text.contains("\"cancelled\": true"));
    }
}
