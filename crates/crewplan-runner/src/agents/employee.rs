use crewplan_core::{CrewplanError, Employee, Suitability};
use crewplan_prompts::{AgentAction, AgentProfile};

use super::Crew;
use crate::suitability::interpret_suitability;

pub const NO_DESCRIPTION_REASON: &str = "No task description provided.";
pub const EVALUATION_FAILED_REASON: &str = "Evaluation failed due to error.";

impl Crew {
    /// Ask the employee's agent whether they can take `task`.
    ///
    /// Fails only when the employee record cannot form a valid agent
    /// profile; model trouble becomes a NO verdict.
    pub fn evaluate_task(
        &self,
        employee: &Employee,
        task: &str,
    ) -> Result<Suitability, CrewplanError> {
        let profile = AgentProfile::for_employee(employee)?;

        if task.trim().is_empty() {
            self.logger()
                .warn(&format!("empty task description for {}", employee.name));
            return Ok(Suitability::no(NO_DESCRIPTION_REASON));
        }

        match self.ask(&profile, AgentAction::Evaluate, task) {
            Ok(reply) => Ok(interpret_suitability(&reply, self.logger())),
            Err(e) => {
                self.logger().error(&format!(
                    "error evaluating task '{task}' for {}: {e}",
                    employee.name
                ));
                Ok(Suitability::no(EVALUATION_FAILED_REASON))
            }
        }
    }
}
