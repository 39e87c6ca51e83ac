//! Local tool runner — the concrete implementation of the `ToolRunner` port
//!
//! Routes an approved call to its handler by canonical name. File and
//! subprocess handlers are synchronous and block the pipeline by design
//! (calls are mediated one at a time); the HTTP handler is the only natively
//! async path and shares one `reqwest::Client` across calls.

use async_trait::async_trait;
use std::time::Duration;
use toolgate_application::ToolRunner;
use toolgate_domain::{names, ToolCall, ToolOutcome};

use super::{command, dir, file, http, system, ExecutionError};

/// Default timeout for outbound HTTP requests (seconds)
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Runner that performs tool operations on the local machine
pub struct LocalToolRunner {
    /// Working directory injected into run_command when the call omits `cwd`
    working_dir: Option<String>,
    /// Shared HTTP client for http_request
    http_client: reqwest::Client,
}

impl LocalToolRunner {
    pub fn new() -> Self {
        Self::with_http_timeout(DEFAULT_HTTP_TIMEOUT_SECS)
    }

    /// Create a runner whose HTTP client uses the given request timeout
    pub fn with_http_timeout(timeout_secs: u64) -> Self {
        Self {
            working_dir: None,
            http_client: reqwest::Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Set the working directory for command execution
    pub fn with_working_dir(mut self, dir: impl Into<String>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    fn outcome(result: Result<serde_json::Value, ExecutionError>) -> ToolOutcome {
        match result {
            Ok(value) => ToolOutcome::Success(value),
            Err(e) => ToolOutcome::error(e.to_string()),
        }
    }
}

impl Default for LocalToolRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolRunner for LocalToolRunner {
    async fn run(&self, call: &ToolCall) -> ToolOutcome {
        tracing::debug!(tool = %call.name, "Running handler");

        match call.name.as_str() {
            names::READ_FILE => Self::outcome(file::read_file(call)),
            names::WRITE_FILE => Self::outcome(file::write_file(call)),
            names::EDIT_FILE => Self::outcome(file::edit_file(call)),
            names::LIST_DIRECTORY => Self::outcome(dir::list_directory(call)),
            names::CREATE_DIRECTORY => Self::outcome(dir::create_directory(call)),
            names::DELETE_FILE => Self::outcome(dir::delete_file(call)),
            names::RUN_COMMAND => {
                Self::outcome(command::run_command(call, self.working_dir.as_deref()))
            }
            names::HTTP_REQUEST => {
                Self::outcome(http::http_request(&self.http_client, call).await)
            }
            names::GET_ENVIRONMENT_INFO => Self::outcome(system::environment_info(call)),
            _ => ToolOutcome::error(format!("Tool '{}' is not implemented", call.name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::default_catalog;
    use std::fs;
    use std::sync::Arc;
    use tempfile::tempdir;
    use toolgate_application::{ApprovalGate, ExecutionGateway, StaticPrompt};
    use toolgate_domain::TrustPolicy;

    fn full_auto_gateway() -> ExecutionGateway {
        ExecutionGateway::new(
            default_catalog(),
            ApprovalGate::new(TrustPolicy::FullAuto, Arc::new(StaticPrompt::deny_all())),
            Arc::new(LocalToolRunner::new()),
        )
    }

    #[tokio::test]
    async fn test_runner_write_then_read_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("note.txt");
        let path_str = path.to_str().unwrap();
        let content = "one\ntwo\nthree";
        let runner = LocalToolRunner::new();

        let write = ToolCall::new(names::WRITE_FILE)
            .with_arg("path", path_str)
            .with_arg("content", content);
        assert!(runner.run(&write).await.is_success());

        let read = ToolCall::new(names::READ_FILE).with_arg("path", path_str);
        let outcome = runner.run(&read).await;
        let value = outcome.payload().unwrap();
        assert_eq!(value["content"], content);
        assert_eq!(value["lines"], 3);
    }

    #[tokio::test]
    async fn test_runner_unimplemented_tool_is_error() {
        let runner = LocalToolRunner::new();
        let outcome = runner.run(&ToolCall::new("teleport")).await;
        assert!(outcome.is_error());
    }

    #[tokio::test]
    async fn test_runner_injects_working_dir_into_commands() {
        let dir = tempdir().unwrap();
        let runner = LocalToolRunner::new().with_working_dir(dir.path().to_str().unwrap());

        let call = ToolCall::new(names::RUN_COMMAND).with_arg("command", "pwd");
        let outcome = runner.run(&call).await;

        let stdout = outcome.payload().unwrap()["stdout"].as_str().unwrap().to_string();
        assert!(stdout.contains(dir.path().file_name().unwrap().to_str().unwrap()));
    }

    // Full-pipeline scenarios through the gateway with the real catalog and
    // real handlers.

    #[tokio::test]
    async fn test_gateway_denied_delete_leaves_target_untouched() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("precious.txt");
        fs::write(&target, "keep me").unwrap();

        let gateway = ExecutionGateway::new(
            default_catalog(),
            ApprovalGate::new(TrustPolicy::Interactive, Arc::new(StaticPrompt::deny_all())),
            Arc::new(LocalToolRunner::new()),
        );

        let call = ToolCall::new(names::DELETE_FILE).with_arg("path", target.to_str().unwrap());
        let outcome = gateway.execute(&call).await;

        assert_eq!(outcome.into_value(), serde_json::json!({"cancelled": true}));
        assert!(target.exists());
        assert_eq!(fs::read_to_string(&target).unwrap(), "keep me");
    }

    #[tokio::test]
    async fn test_gateway_unknown_tool_has_no_side_effects() {
        let dir = tempdir().unwrap();
        let gateway = full_auto_gateway();

        let call = ToolCall::new("unknown_tool").with_arg("path", dir.path().to_str().unwrap());
        let outcome = gateway.execute(&call).await;

        assert!(outcome.is_error());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_gateway_lists_empty_directory() {
        let dir = tempdir().unwrap();
        let gateway = full_auto_gateway();

        let call =
            ToolCall::new(names::LIST_DIRECTORY).with_arg("path", dir.path().to_str().unwrap());
        let outcome = gateway.execute(&call).await;

        assert_eq!(outcome.into_value()["items"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_gateway_environment_info_is_gated_like_everything_else() {
        let gateway = ExecutionGateway::new(
            default_catalog(),
            ApprovalGate::new(TrustPolicy::Interactive, Arc::new(StaticPrompt::deny_all())),
            Arc::new(LocalToolRunner::new()),
        );

        let outcome = gateway
            .execute(&ToolCall::new(names::GET_ENVIRONMENT_INFO))
            .await;
        assert!(outcome.is_cancelled());
    }

    #[tokio::test]
    async fn test_gateway_validation_error_carries_field_detail() {
        let gateway = full_auto_gateway();

        let call = ToolCall::new(names::EDIT_FILE).with_arg("path", "/tmp/x");
        let outcome = gateway.execute(&call).await;

        let message = outcome.error_message().unwrap().to_string();
        assert!(message.contains("search"));
    }
}
