//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use toolgate_domain::TrustPolicy;

/// CLI arguments for toolgate
#[derive(Parser, Debug)]
#[command(name = "toolgate")]
#[command(version, about = "Mediation layer between an LLM agent and side-effecting tools")]
#[command(long_about = r#"
toolgate validates tool calls against a declarative capability catalog,
asks for operator approval under the session's trust policy, executes the
operation, and returns a uniform JSON result.

Trust policies:
  interactive   every action requires operator confirmation (default)
  auto-edit     file edits are auto-approved; everything else asks
  full-auto     every action is auto-approved

Configuration files are loaded from (in priority order):
  1. --config <path>                    Explicit config file
  2. ./toolgate.toml                    Project-level config
  3. ~/.config/toolgate/config.toml     Global config

Examples:
  toolgate list
  toolgate list --json
  toolgate exec read_file --args '{"path": "README.md"}'
  toolgate --mode full-auto exec run_command --args '{"command": "ls -la"}'
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Trust policy for this session (overrides config file)
    #[arg(long, value_name = "POLICY", global = true)]
    pub mode: Option<TrustPolicy>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the capability catalog advertised to the agent
    List {
        /// Print the function-calling schemas as JSON
        #[arg(long)]
        json: bool,
    },

    /// Execute one tool call through the mediation pipeline
    Exec {
        /// Tool name (must exist in the catalog)
        tool: String,

        /// Arguments as a JSON object
        #[arg(long, value_name = "JSON", default_value = "{}")]
        args: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exec() {
        let cli = Cli::parse_from([
            "toolgate",
            "--mode",
            "full-auto",
            "exec",
            "read_file",
            "--args",
            r#"{"path": "/tmp/x"}"#,
        ]);

        assert_eq!(cli.mode, Some(TrustPolicy::FullAuto));
        match cli.command {
            Command::Exec { ref tool, ref args } => {
                assert_eq!(tool, "read_file");
                assert!(args.contains("/tmp/x"));
            }
            _ => panic!("expected exec"),
        }
    }

    #[test]
    fn test_parse_list_json() {
        let cli = Cli::parse_from(["toolgate", "list", "--json"]);
        assert!(matches!(cli.command, Command::List { json: true }));
        assert_eq!(cli.mode, None);
    }

    #[test]
    fn test_invalid_mode_is_rejected() {
        let result = Cli::try_parse_from(["toolgate", "--mode", "suggest", "list"]);
        assert!(result.is_err());
    }
}
