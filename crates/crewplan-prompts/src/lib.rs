pub mod analyst;
pub mod employee;
pub mod profile;
pub mod task;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use profile::AgentProfile;

/// What an agent is being asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentAction {
    /// Turn a CEO requirement into a project plan.
    Analyze,
    /// Decide whether an employee can take a task.
    Evaluate,
    /// Estimate hours and break a task into sub-tasks.
    Estimate,
}

impl AgentAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentAction::Analyze => "analyze",
            AgentAction::Evaluate => "evaluate",
            AgentAction::Estimate => "estimate",
        }
    }

    /// Short description of the reply shape the model should produce.
    pub fn expected_output(&self) -> &'static str {
        match self {
            AgentAction::Analyze => analyst::EXPECTED_OUTPUT,
            AgentAction::Evaluate => employee::EXPECTED_OUTPUT,
            AgentAction::Estimate => task::EXPECTED_OUTPUT,
        }
    }
}

impl fmt::Display for AgentAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Assemble the full prompt for an action over the given input text.
pub fn assemble_prompt(profile: &AgentProfile, action: AgentAction, input: &str) -> String {
    let mut prompt = String::new();
    profile.append_preamble(&mut prompt);

    match action {
        AgentAction::Analyze => analyst::append_instructions(&mut prompt, input),
        AgentAction::Evaluate => employee::append_instructions(&mut prompt, input),
        AgentAction::Estimate => task::append_instructions(&mut prompt, input),
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_starts_with_profile() {
        let profile = AgentProfile::task_processor();
        let prompt = assemble_prompt(&profile, AgentAction::Estimate, "Build login UI");
        assert!(prompt.starts_with("# Role: Task Processor\n\n"));
        assert!(prompt.contains("'Build login UI'"));
        assert!(prompt.contains("'duration'"));
    }

    #[test]
    fn expected_output_per_action() {
        assert_eq!(AgentAction::Analyze.expected_output(), "A valid JSON string");
        assert_eq!(
            AgentAction::Evaluate.expected_output(),
            "YES/NO with reasoning"
        );
        assert_eq!(
            AgentAction::Estimate.expected_output(),
            "JSON with duration and sub-tasks"
        );
    }
}
