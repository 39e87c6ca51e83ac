//! Operator prompt port
//!
//! The approval gate's interactive branch suspends the pipeline on this port
//! until the operator answers. This is the only suspension point in the
//! mediation layer; there is no timeout — absence of a decision is absence of
//! progress, not an implicit grant or denial.

use async_trait::async_trait;
use thiserror::Error;

/// Failure while obtaining an operator decision
///
/// These represent failures of the prompting mechanism itself, not decisions
/// made by the operator.
#[derive(Debug, Clone, Error)]
pub enum PromptError {
    /// The operator interrupted the prompt (e.g., Ctrl+C)
    #[error("Prompt interrupted")]
    Interrupted,

    /// Terminal read/write failure
    #[error("Prompt I/O error: {0}")]
    Io(String),
}

/// Port for asking a human operator to confirm one action
///
/// Implementations display the action and details, then block until a yes/no
/// answer is obtained. The suggested default answer is affirmative, but the
/// operator may override.
#[async_trait]
pub trait OperatorPrompt: Send + Sync {
    /// Present `action` and `details` and return the operator's answer
    async fn confirm(&self, action: &str, details: &str) -> Result<bool, PromptError>;
}

/// Fixed-answer prompt for headless runs and tests
///
/// Under `interactive` or `auto-edit` policies a headless session has no
/// operator to ask; wiring in [`StaticPrompt::deny_all`] makes withheld
/// approval the failure mode rather than a hang.
#[derive(Debug, Clone, Copy)]
pub struct StaticPrompt {
    answer: bool,
}

impl StaticPrompt {
    /// A prompt that answers yes to everything
    pub fn approve_all() -> Self {
        Self { answer: true }
    }

    /// A prompt that answers no to everything
    pub fn deny_all() -> Self {
        Self { answer: false }
    }
}

#[async_trait]
impl OperatorPrompt for StaticPrompt {
    async fn confirm(&self, _action: &str, _details: &str) -> Result<bool, PromptError> {
        Ok(self.answer)
    }
}
