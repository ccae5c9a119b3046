use std::time::Duration;

use crewplan_core::{Employee, SubtaskRecord};

use crate::agents::Crew;
use crate::matcher::ScoredEmployee;

/// Who took a task, plus one human-readable line per employee asked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignmentOutcome {
    pub assigned: Vec<Employee>,
    pub responses: Vec<String>,
}

/// Ask up to `required` employees, best scored first, whether they can take
/// `task`, pausing `pause` before each question. Scores are matched to
/// `employees` by [`ScoredEmployee::index`]; employees without one count as 0.
pub fn check_employees_for_task(
    crew: &Crew,
    task: &str,
    employees: &[Employee],
    scores: &[ScoredEmployee],
    required: usize,
    pause: Duration,
) -> AssignmentOutcome {
    let logger = crew.logger();
    if task.trim().is_empty() || employees.is_empty() || required == 0 {
        logger.warn(&format!(
            "invalid inputs: task='{task}', employees={}, required={required}",
            employees.len()
        ));
        return AssignmentOutcome {
            assigned: Vec::new(),
            responses: vec!["No assignment possible due to invalid inputs.".to_string()],
        };
    }

    let mut score_of = vec![0.0; employees.len()];
    for scored in scores {
        if let Some(slot) = score_of.get_mut(scored.index) {
            *slot = scored.score;
        }
    }

    let mut ranked: Vec<usize> = (0..employees.len()).collect();
    ranked.sort_by(|&a, &b| {
        score_of[b]
            .partial_cmp(&score_of[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut outcome = AssignmentOutcome::default();
    for index in ranked.into_iter().take(required) {
        let employee = &employees[index];
        let score = score_of[index];
        crew.sleeper().sleep(pause);
        match crew.evaluate_task(employee, task) {
            Ok(verdict) => {
                let (mark, word) = if verdict.accepted() {
                    ("✅", "accepted")
                } else {
                    ("❌", "declined")
                };
                outcome.responses.push(format!(
                    "{mark} {} {word} — {} (Score: {score:.2})",
                    employee.name, verdict.reason
                ));
                logger.debug(&format!(
                    "evaluated {} for '{task}': {verdict}",
                    employee.name
                ));
                if verdict.accepted() {
                    outcome.assigned.push(employee.clone());
                }
            }
            Err(e) => {
                outcome
                    .responses
                    .push(format!("❌ {} — Error: {e}", employee.name));
                logger.error(&format!(
                    "error evaluating {} for '{task}': {e}",
                    employee.name
                ));
            }
        }
    }

    if outcome.assigned.is_empty() {
        logger.warn(&format!("no employees assigned to '{task}'"));
        outcome
            .responses
            .push("⚠️ No suitable employees found.".to_string());
    }
    outcome
}

/// Hand sub-tasks to employees round-robin. With nobody assigned the
/// sub-tasks come back untouched.
pub fn assign_subtasks(sub_tasks: &[SubtaskRecord], assigned: &[Employee]) -> Vec<SubtaskRecord> {
    if assigned.is_empty() {
        return sub_tasks.to_vec();
    }
    sub_tasks
        .iter()
        .enumerate()
        .map(|(i, record)| SubtaskRecord {
            assigned: Some(assigned[i % assigned.len()].name.clone()),
            ..record.clone()
        })
        .collect()
}
