use crewplan_core::ProjectPlan;
use crewplan_prompts::{AgentAction, AgentProfile};

use super::Crew;
use crate::estimator::truncate;
use crate::json_extract::extract_json_object;

impl Crew {
    /// Turn a CEO requirement into a project plan.
    ///
    /// An unusable reply yields [`ProjectPlan::fallback`]; `None` means the
    /// requirement was empty or the model could not be reached.
    pub fn analyze_requirement(&self, requirement: &str) -> Option<ProjectPlan> {
        let requirement = requirement.trim();
        if requirement.is_empty() {
            self.logger().error("empty CEO input provided");
            return None;
        }
        self.logger()
            .info(&format!("processing CEO requirement: '{requirement}'"));

        let profile = AgentProfile::business_analyst();
        let reply = match self.ask(&profile, AgentAction::Analyze, requirement) {
            Ok(reply) => reply,
            Err(e) => {
                self.logger().error(&format!(
                    "failed to process CEO input '{requirement}': {e}"
                ));
                return None;
            }
        };

        let parsed = extract_json_object(&reply).and_then(|map| {
            if ProjectPlan::REQUIRED_KEYS
                .iter()
                .all(|key| map.contains_key(*key))
            {
                serde_json::from_value(serde_json::Value::Object(map)).ok()
            } else {
                None
            }
        });

        match parsed {
            Some(plan) => Some(plan),
            None => {
                self.logger().warn(&format!(
                    "invalid or incomplete plan from model: {}",
                    truncate(&reply, 200)
                ));
                self.logger().info("applied fallback plan");
                Some(ProjectPlan::fallback(requirement))
            }
        }
    }
}
