//! End-to-end planning: requirement → plan → per-task estimate and team.

use chrono::{Days, NaiveDate};
use crewplan_core::{days_needed, Employee, ProjectPlan, SubtaskRecord};
use serde::Serialize;

use crate::agents::Crew;
use crate::assignment::{assign_subtasks, check_employees_for_task};
use crate::config::CrewplanConfig;
use crate::matcher::similarity_scores;

/// Estimates below this many hours are rounded up to it.
pub const MIN_TASK_HOURS: f64 = 2.0;
/// Model estimates tend to run long; this scales them down.
pub const ESTIMATE_ADJUSTMENT: f64 = 0.75;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskAssignment {
    pub task: String,
    pub duration: f64,
    pub days_needed: u32,
    pub deadline: NaiveDate,
    pub employees: Vec<String>,
    pub responses: Vec<String>,
    pub sub_tasks: Vec<SubtaskRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectReport {
    pub project: String,
    pub plan: ProjectPlan,
    pub tasks: Vec<TaskAssignment>,
}

/// Hours after adjustment, never below [`MIN_TASK_HOURS`].
pub fn adjusted_hours(estimate: f64) -> f64 {
    (estimate * ESTIMATE_ADJUSTMENT).max(MIN_TASK_HOURS)
}

/// `start` plus `days`; `None` when that runs past the calendar.
pub fn deadline_after(start: NaiveDate, days: u32) -> Option<NaiveDate> {
    start.checked_add_days(Days::new(u64::from(days)))
}

/// Run the whole flow for one requirement, scheduling deadlines from
/// `start`. `None` when the analyst could not produce any plan.
pub fn plan_project(
    crew: &Crew,
    requirement: &str,
    employees: &[Employee],
    config: &CrewplanConfig,
    start: NaiveDate,
) -> Option<ProjectReport> {
    let plan = crew.analyze_requirement(requirement)?;
    let mut tasks = Vec::with_capacity(plan.tasks.len());

    for task in &plan.tasks {
        let estimate = crew.process_task(task);
        let duration = adjusted_hours(estimate.duration);

        let scores = similarity_scores(task, employees).unwrap_or_else(|e| {
            crew.logger()
                .warn(&format!("no similarity scores for '{task}': {e}"));
            Vec::new()
        });
        let outcome = check_employees_for_task(
            crew,
            task,
            employees,
            &scores,
            config.max_employees_per_task,
            config.base_delay(),
        );

        let days = days_needed(duration, config.hours_per_day);
        let deadline = deadline_after(start, days).unwrap_or_else(|| {
            crew.logger().warn(&format!(
                "deadline for '{task}' ({days} days from {start}) is out of range"
            ));
            NaiveDate::MAX
        });
        tasks.push(TaskAssignment {
            task: task.clone(),
            duration,
            days_needed: days,
            deadline,
            employees: outcome.assigned.iter().map(|e| e.name.clone()).collect(),
            sub_tasks: assign_subtasks(&estimate.sub_tasks, &outcome.assigned),
            responses: outcome.responses,
        });
    }

    Some(ProjectReport {
        project: requirement.trim().to_string(),
        plan,
        tasks,
    })
}

impl ProjectReport {
    /// Plain-text report for humans.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Project: {}\n", self.project));
        out.push_str(&format!(
            "Technical Specification: {}\n",
            self.plan.technical_spec
        ));

        out.push_str("\nResources:\n");
        let resources = &self.plan.resources;
        for (area, items) in [
            ("Tech", &resources.tech),
            ("Legal", &resources.legal),
            ("Finance", &resources.finance),
            ("Marketing", &resources.marketing),
        ] {
            let listed = if items.is_empty() {
                "None".to_string()
            } else {
                items.join(", ")
            };
            out.push_str(&format!("  {area}: {listed}\n"));
        }

        out.push_str("\nTasks and Assignments:\n");
        for task in &self.tasks {
            let employees = if task.employees.is_empty() {
                "Unassigned".to_string()
            } else {
                task.employees.join(", ")
            };
            out.push_str(&format!("- Task: {}\n", task.task));
            out.push_str(&format!("  Employees: {employees}\n"));
            out.push_str(&format!("  Deadline: {}\n", task.deadline));
            out.push_str(&format!(
                "  Duration: {:.1} hours (~{} day{})\n",
                task.duration,
                task.days_needed,
                if task.days_needed > 1 { "s" } else { "" }
            ));
            out.push_str("  Sub-tasks:\n");
            for sub in &task.sub_tasks {
                let who = sub.assigned.as_deref().unwrap_or("Unassigned");
                out.push_str(&format!("    - {} (Assigned: {who})\n", sub.sub_task));
            }
        }
        out
    }
}
