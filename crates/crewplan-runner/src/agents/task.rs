use crewplan_core::TaskEstimate;
use crewplan_prompts::{AgentAction, AgentProfile};

use super::Crew;
use crate::estimator::{empty_task_estimate, estimate_from_reply, fallback_estimate};

impl Crew {
    /// Estimate hours and sub-tasks for `task`. Never fails.
    pub fn process_task(&self, task: &str) -> TaskEstimate {
        if task.trim().is_empty() {
            self.logger().warn("empty task provided");
            return empty_task_estimate();
        }

        let profile = AgentProfile::task_processor();
        match self.ask(&profile, AgentAction::Estimate, task) {
            Ok(reply) => estimate_from_reply(task, &reply, self.logger()),
            Err(e) => {
                self.logger()
                    .error(&format!("failed to process task '{task}': {e}"));
                fallback_estimate(task)
            }
        }
    }
}
