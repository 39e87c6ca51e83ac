//! Approval gate
//!
//! Given an action's class and the session's trust policy, decides whether
//! the action may proceed — unconditionally, or by asking the operator.
//! Stateless across calls except for the configured policy, which is a
//! construction-time value: a different policy means a new gate.

use std::sync::Arc;

use toolgate_domain::{ApprovalDecision, ApprovalRequest, TrustPolicy};

use crate::ports::operator_prompt::{OperatorPrompt, PromptError};

/// The decision point that grants or denies a requested action under the
/// current trust policy
pub struct ApprovalGate {
    policy: TrustPolicy,
    prompt: Arc<dyn OperatorPrompt>,
}

impl ApprovalGate {
    pub fn new(policy: TrustPolicy, prompt: Arc<dyn OperatorPrompt>) -> Self {
        Self { policy, prompt }
    }

    pub fn policy(&self) -> TrustPolicy {
        self.policy
    }

    /// Decide one approval request
    ///
    /// Auto-grants are recorded at info level for audit visibility and never
    /// block. The interactive branch suspends on the operator prompt; a
    /// single request produces at most one prompt.
    pub async fn request_approval(
        &self,
        request: &ApprovalRequest,
    ) -> Result<ApprovalDecision, PromptError> {
        if self.policy.auto_grants(request.class) {
            tracing::info!(
                action = %request.action,
                policy = %self.policy,
                "Auto-approved"
            );
            return Ok(ApprovalDecision::Approved);
        }

        let approved = self.prompt.confirm(&request.action, &request.details).await?;
        Ok(ApprovalDecision::from(approved))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use toolgate_domain::ActionClass;

    /// Records how often it was consulted; answers with a fixed decision
    struct CountingPrompt {
        answer: bool,
        calls: AtomicUsize,
    }

    impl CountingPrompt {
        fn new(answer: bool) -> Self {
            Self {
                answer,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl OperatorPrompt for CountingPrompt {
        async fn confirm(&self, _action: &str, _details: &str) -> Result<bool, PromptError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.answer)
        }
    }

    fn edit_request() -> ApprovalRequest {
        ApprovalRequest::new("Edit file", "Path: /tmp/x", ActionClass::FileEdit)
    }

    fn delete_request() -> ApprovalRequest {
        ApprovalRequest::new(
            "Delete file/directory",
            "Path: /tmp/x\nThis action cannot be undone!",
            ActionClass::FileSystem,
        )
    }

    #[tokio::test]
    async fn test_full_auto_never_prompts() {
        let prompt = Arc::new(CountingPrompt::new(false));
        let gate = ApprovalGate::new(TrustPolicy::FullAuto, prompt.clone());

        let decision = gate.request_approval(&delete_request()).await.unwrap();
        assert!(decision.is_approved());
        assert_eq!(prompt.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_auto_edit_skips_prompt_for_edits_only() {
        let prompt = Arc::new(CountingPrompt::new(false));
        let gate = ApprovalGate::new(TrustPolicy::AutoEdit, prompt.clone());

        let decision = gate.request_approval(&edit_request()).await.unwrap();
        assert!(decision.is_approved());
        assert_eq!(prompt.calls.load(Ordering::SeqCst), 0);

        let decision = gate.request_approval(&delete_request()).await.unwrap();
        assert!(!decision.is_approved());
        assert_eq!(prompt.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_interactive_prompts_for_everything() {
        let prompt = Arc::new(CountingPrompt::new(true));
        let gate = ApprovalGate::new(TrustPolicy::Interactive, prompt.clone());

        let read = ApprovalRequest::new("Read file", "Path: /tmp/x", ActionClass::Inspect);
        assert!(gate.request_approval(&read).await.unwrap().is_approved());
        assert!(gate.request_approval(&edit_request()).await.unwrap().is_approved());
        assert_eq!(prompt.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_operator_denial_is_denied() {
        let prompt = Arc::new(CountingPrompt::new(false));
        let gate = ApprovalGate::new(TrustPolicy::Interactive, prompt);

        let decision = gate.request_approval(&edit_request()).await.unwrap();
        assert!(!decision.is_approved());
    }
}
