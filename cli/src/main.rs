//! CLI entrypoint for toolgate
//!
//! Wires the layers together with dependency injection: configuration and
//! logging first, then the runner, gate, and gateway for the requested
//! command.

use anyhow::{Context, Result};
use clap::Parser;
use std::collections::HashMap;
use std::sync::Arc;
use toolgate_application::{ApprovalGate, ExecutionGateway};
use toolgate_domain::ToolCall;
use toolgate_infrastructure::{default_catalog, ConfigLoader, LocalToolRunner};
use toolgate_presentation::{Cli, Command, ConsoleFormatter, InteractiveOperatorPrompt};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!(e))
            .context("Failed to load configuration")?
    };

    // CLI flag wins over file config
    let policy = cli.mode.unwrap_or(config.approval.policy);

    match cli.command {
        Command::List { json } => {
            let catalog = default_catalog();
            if json {
                println!("{}", ConsoleFormatter::format_catalog_json(&catalog));
            } else {
                print!("{}", ConsoleFormatter::format_catalog(&catalog));
            }
        }

        Command::Exec { tool, args } => {
            let arguments: HashMap<String, serde_json::Value> =
                serde_json::from_str(&args).context("--args must be a JSON object")?;

            let mut call = ToolCall::new(tool);
            call.arguments = arguments;

            let mut runner = LocalToolRunner::with_http_timeout(config.http.timeout_secs);
            if let Some(dir) = &config.command.working_dir {
                runner = runner.with_working_dir(dir);
            }

            let gate = ApprovalGate::new(policy, Arc::new(InteractiveOperatorPrompt::new()));
            let gateway = ExecutionGateway::new(default_catalog(), gate, Arc::new(runner));

            info!(tool = %call.name, policy = %policy, "Mediating tool call");
            let outcome = gateway.execute(&call).await;
            let failed = outcome.is_error();

            println!("{}", ConsoleFormatter::format_outcome(outcome));

            if failed {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
