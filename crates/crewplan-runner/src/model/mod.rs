pub mod mock;

use crewplan_prompts::{assemble_prompt, AgentAction, AgentProfile};
use thiserror::Error;

/// Everything a model service needs to answer one agent turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRequest {
    pub action: AgentAction,
    pub role: String,
    pub goal: String,
    pub backstory: String,
    /// Fully assembled prompt text
    pub prompt: String,
    pub expected_output: String,
    pub verbose: bool,
}

impl ModelRequest {
    pub fn build(profile: &AgentProfile, action: AgentAction, input: &str) -> Self {
        Self {
            action,
            role: profile.role.clone(),
            goal: profile.goal.clone(),
            backstory: profile.backstory.clone(),
            prompt: assemble_prompt(profile, action, input),
            expected_output: action.expected_output().to_string(),
            verbose: profile.verbose,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Rate limit, timeout, dropped connection; worth retrying.
    #[error("transient model failure: {0}")]
    Transient(String),

    #[error("model failure: {0}")]
    Fatal(String),
}

impl ModelError {
    pub fn is_transient(&self) -> bool {
        matches!(self, ModelError::Transient(_))
    }
}

/// A language model that turns a request into free-form text.
///
/// Implementations own transport, authentication and provider quirks; the
/// agents only rely on "returns text or fails".
pub trait ModelService: Send + Sync {
    /// Human-readable service name for logging.
    fn name(&self) -> &str;

    /// Optional model hint for logging/display purposes.
    fn model_hint(&self) -> Option<&str> {
        None
    }

    fn complete(&self, request: &ModelRequest) -> Result<String, ModelError>;
}
