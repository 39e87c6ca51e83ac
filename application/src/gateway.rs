//! Execution gateway
//!
//! Orchestrates one tool call end-to-end: validate against the catalog,
//! describe the action for the operator, consult the approval gate, dispatch
//! to the runner. Calls are processed one at a time; the operator prompt is
//! the single suspension point.
//!
//! Every failure is converted to a [`ToolOutcome`] variant at this boundary —
//! the agent loop always receives a well-formed result.

use std::sync::Arc;

use toolgate_domain::{
    names, truncate, ApprovalDecision, ApprovalRequest, Catalog, ToolCall, ToolDefinition,
    ToolOutcome,
};

use crate::gate::ApprovalGate;
use crate::ports::tool_runner::ToolRunner;

/// Maximum bytes of the edit search text shown in the approval prompt
const EDIT_PREVIEW_LEN: usize = 50;

/// The orchestrating component of the mediation layer
///
/// Owns the catalog and the dispatch path; the approval gate owns the trust
/// policy. Neither owns the filesystem or process table — those are external
/// resources the runner's handlers access transiently per call.
pub struct ExecutionGateway {
    catalog: Catalog,
    gate: ApprovalGate,
    runner: Arc<dyn ToolRunner>,
}

impl ExecutionGateway {
    pub fn new(catalog: Catalog, gate: ApprovalGate, runner: Arc<dyn ToolRunner>) -> Self {
        Self {
            catalog,
            gate,
            runner,
        }
    }

    /// The catalog advertised to the agent loop
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Mediate one tool call
    ///
    /// 1. Validate; a rejected call returns `Error` without reaching the
    ///    operator.
    /// 2. Build the human-readable approval request.
    /// 3. Consult the gate; a withheld approval returns `Cancelled` with zero
    ///    side effects.
    /// 4. Dispatch to the handler.
    pub async fn execute(&self, call: &ToolCall) -> ToolOutcome {
        let definition = match self.catalog.validate_call(call) {
            Ok(definition) => definition,
            Err(e) => {
                tracing::debug!(tool = %call.name, error = %e, "Rejected before dispatch");
                return ToolOutcome::error(e.to_string());
            }
        };

        let request = describe(definition, call);

        match self.gate.request_approval(&request).await {
            Ok(ApprovalDecision::Approved) => {}
            Ok(ApprovalDecision::Denied) => {
                tracing::info!(tool = %call.name, "Cancelled by operator");
                return ToolOutcome::Cancelled;
            }
            Err(e) => {
                tracing::warn!(tool = %call.name, error = %e, "Approval prompt failed");
                return ToolOutcome::error(e.to_string());
            }
        }

        tracing::debug!(tool = %call.name, "Dispatching");
        self.runner.run(call).await
    }
}

/// Map a validated call to the action category and detail strings the
/// operator sees
///
/// Details are operation-specific: delete flags irreversibility, edit shows a
/// truncated preview of the search text, command execution shows the command
/// and working directory.
fn describe(definition: &ToolDefinition, call: &ToolCall) -> ApprovalRequest {
    let (action, details) = match definition.name.as_str() {
        names::READ_FILE => (
            "Read file",
            format!("Path: {}", call.get_str("path").unwrap_or_default()),
        ),
        names::WRITE_FILE => (
            "Write file",
            format!(
                "Path: {}\nSize: {} chars",
                call.get_str("path").unwrap_or_default(),
                call.get_str("content").unwrap_or_default().chars().count()
            ),
        ),
        names::EDIT_FILE => (
            "Edit file",
            format!(
                "Path: {}\nReplace: \"{}\"",
                call.get_str("path").unwrap_or_default(),
                truncate(call.get_str("search").unwrap_or_default(), EDIT_PREVIEW_LEN)
            ),
        ),
        names::LIST_DIRECTORY => (
            "List directory",
            format!("Path: {}", call.get_str("path").unwrap_or_default()),
        ),
        names::CREATE_DIRECTORY => (
            "Create directory",
            format!("Path: {}", call.get_str("path").unwrap_or_default()),
        ),
        names::DELETE_FILE => (
            "Delete file/directory",
            format!(
                "Path: {}\nThis action cannot be undone!",
                call.get_str("path").unwrap_or_default()
            ),
        ),
        names::RUN_COMMAND => (
            "Run shell command",
            format!(
                "Command: {}\nDirectory: {}",
                call.get_str("command").unwrap_or_default(),
                call.get_str("cwd").unwrap_or("(current)")
            ),
        ),
        names::HTTP_REQUEST => (
            "Make HTTP request",
            format!(
                "{} {}",
                call.get_str("method").unwrap_or("GET"),
                call.get_str("url").unwrap_or_default()
            ),
        ),
        names::GET_ENVIRONMENT_INFO => ("Read environment info", String::new()),
        _ => (
            definition.description.as_str(),
            serde_json::to_string(&call.arguments).unwrap_or_default(),
        ),
    };

    ApprovalRequest::new(action, details, definition.class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::operator_prompt::{OperatorPrompt, PromptError, StaticPrompt};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use toolgate_domain::{ActionClass, ToolParameter, TrustPolicy};

    /// Runner that records dispatches and answers with a fixed payload
    struct RecordingRunner {
        dispatched: AtomicUsize,
    }

    impl RecordingRunner {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                dispatched: AtomicUsize::new(0),
            })
        }

        fn count(&self) -> usize {
            self.dispatched.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ToolRunner for RecordingRunner {
        async fn run(&self, call: &ToolCall) -> ToolOutcome {
            self.dispatched.fetch_add(1, Ordering::SeqCst);
            ToolOutcome::success(json!({ "ran": call.name }))
        }
    }

    /// Prompt that fails the test if it is ever consulted
    struct UnreachablePrompt;

    #[async_trait]
    impl OperatorPrompt for UnreachablePrompt {
        async fn confirm(&self, action: &str, _details: &str) -> Result<bool, PromptError> {
            panic!("operator prompted for '{action}' when no prompt was expected");
        }
    }

    fn test_catalog() -> Catalog {
        Catalog::new()
            .register(
                ToolDefinition::new("read_file", "Read contents of a file", ActionClass::Inspect)
                    .with_parameter(ToolParameter::new("path", "Path to the file", true)),
            )
            .register(
                ToolDefinition::new("write_file", "Write content to a file", ActionClass::FileEdit)
                    .with_parameter(ToolParameter::new("path", "Path to the file", true))
                    .with_parameter(ToolParameter::new("content", "Content to write", true)),
            )
            .register(
                ToolDefinition::new(
                    "delete_file",
                    "Delete a file or directory",
                    ActionClass::FileSystem,
                )
                .with_parameter(ToolParameter::new("path", "Path to delete", true)),
            )
    }

    fn gateway(
        policy: TrustPolicy,
        prompt: Arc<dyn OperatorPrompt>,
        runner: Arc<RecordingRunner>,
    ) -> ExecutionGateway {
        ExecutionGateway::new(test_catalog(), ApprovalGate::new(policy, prompt), runner)
    }

    #[tokio::test]
    async fn test_unknown_tool_is_error_without_dispatch_or_prompt() {
        let runner = RecordingRunner::new();
        let gw = gateway(
            TrustPolicy::Interactive,
            Arc::new(UnreachablePrompt),
            runner.clone(),
        );

        let outcome = gw.execute(&ToolCall::new("unknown_tool")).await;
        assert!(outcome.is_error());
        assert!(outcome.error_message().unwrap().contains("Unknown tool"));
        assert_eq!(runner.count(), 0);
    }

    #[tokio::test]
    async fn test_validation_failure_never_reaches_operator() {
        let runner = RecordingRunner::new();
        let gw = gateway(
            TrustPolicy::Interactive,
            Arc::new(UnreachablePrompt),
            runner.clone(),
        );

        // Missing required 'content'
        let call = ToolCall::new("write_file").with_arg("path", "/tmp/x");
        let outcome = gw.execute(&call).await;
        assert!(outcome.is_error());
        assert_eq!(runner.count(), 0);
    }

    #[tokio::test]
    async fn test_denied_approval_is_cancelled_without_dispatch() {
        let runner = RecordingRunner::new();
        let gw = gateway(
            TrustPolicy::Interactive,
            Arc::new(StaticPrompt::deny_all()),
            runner.clone(),
        );

        let call = ToolCall::new("delete_file").with_arg("path", "/tmp/x");
        let outcome = gw.execute(&call).await;
        assert!(outcome.is_cancelled());
        assert_eq!(outcome.into_value(), json!({"cancelled": true}));
        assert_eq!(runner.count(), 0);
    }

    #[tokio::test]
    async fn test_full_auto_dispatches_without_prompting() {
        let runner = RecordingRunner::new();
        let gw = gateway(
            TrustPolicy::FullAuto,
            Arc::new(UnreachablePrompt),
            runner.clone(),
        );

        let call = ToolCall::new("delete_file").with_arg("path", "/tmp/x");
        let outcome = gw.execute(&call).await;
        assert!(outcome.is_success());
        assert_eq!(runner.count(), 1);
    }

    #[tokio::test]
    async fn test_auto_edit_grants_write_but_asks_for_delete() {
        let runner = RecordingRunner::new();
        let gw = gateway(
            TrustPolicy::AutoEdit,
            Arc::new(StaticPrompt::deny_all()),
            runner.clone(),
        );

        let write = ToolCall::new("write_file")
            .with_arg("path", "/tmp/x")
            .with_arg("content", "hi");
        assert!(gw.execute(&write).await.is_success());
        assert_eq!(runner.count(), 1);

        let delete = ToolCall::new("delete_file").with_arg("path", "/tmp/x");
        assert!(gw.execute(&delete).await.is_cancelled());
        assert_eq!(runner.count(), 1);
    }

    #[tokio::test]
    async fn test_approved_call_reaches_runner() {
        let runner = RecordingRunner::new();
        let gw = gateway(
            TrustPolicy::Interactive,
            Arc::new(StaticPrompt::approve_all()),
            runner.clone(),
        );

        let call = ToolCall::new("read_file").with_arg("path", "/tmp/x");
        let outcome = gw.execute(&call).await;
        assert!(outcome.is_success());
        assert_eq!(outcome.payload().unwrap()["ran"], "read_file");
        assert_eq!(runner.count(), 1);
    }

    #[tokio::test]
    async fn test_prompt_failure_is_error_without_dispatch() {
        struct BrokenPrompt;

        #[async_trait]
        impl OperatorPrompt for BrokenPrompt {
            async fn confirm(&self, _: &str, _: &str) -> Result<bool, PromptError> {
                Err(PromptError::Io("terminal gone".into()))
            }
        }

        let runner = RecordingRunner::new();
        let gw = gateway(TrustPolicy::Interactive, Arc::new(BrokenPrompt), runner.clone());

        let call = ToolCall::new("read_file").with_arg("path", "/tmp/x");
        let outcome = gw.execute(&call).await;
        assert!(outcome.is_error());
        assert_eq!(runner.count(), 0);
    }

    #[test]
    fn test_describe_delete_flags_irreversibility() {
        let catalog = test_catalog();
        let def = catalog.get("delete_file").unwrap();
        let call = ToolCall::new("delete_file").with_arg("path", "/tmp/x");

        let request = describe(def, &call);
        assert_eq!(request.action, "Delete file/directory");
        assert!(request.details.contains("cannot be undone"));
        assert_eq!(request.class, ActionClass::FileSystem);
    }

    #[test]
    fn test_describe_edit_truncates_search_preview() {
        let def = ToolDefinition::new("edit_file", "Edit a file", ActionClass::FileEdit);
        let long_search = "x".repeat(200);
        let call = ToolCall::new("edit_file")
            .with_arg("path", "/tmp/x")
            .with_arg("search", long_search.as_str());

        let request = describe(&def, &call);
        assert!(request.details.len() < 120);
        assert!(request.details.contains("..."));
    }

    #[test]
    fn test_describe_command_shows_cwd() {
        let def = ToolDefinition::new("run_command", "Execute a shell command", ActionClass::Command);
        let call = ToolCall::new("run_command").with_arg("command", "ls -la");

        let request = describe(&def, &call);
        assert!(request.details.contains("ls -la"));
        assert!(request.details.contains("(current)"));

        let call = call.with_arg("cwd", "/srv");
        let request = describe(&def, &call);
        assert!(request.details.contains("/srv"));
    }
}
