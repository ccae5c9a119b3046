//! End-to-end tests: a scripted model drives the agents, retry executor and
//! interpreters through the public API.

use std::sync::Arc;

use chrono::NaiveDate;

use crewplan_core::{Employee, SubtaskRecord};
use crewplan_prompts::AgentAction;
use crewplan_runner::config::CrewplanConfig;
use crewplan_runner::logger::RecordingLogger;
use tracing::Level;
use crewplan_runner::model::mock::ScriptedModel;
use crewplan_runner::model::ModelError;
use crewplan_runner::report::plan_project;
use crewplan_runner::retry::{RecordingSleeper, RetryPolicy};
use crewplan_runner::Crew;

fn team() -> Vec<Employee> {
    serde_json::from_str(
        r#"[
            {"name": "Ada", "role": "Backend Engineer", "skills": ["rest", "api", "orders"]},
            {"name": "Lin", "role": "Designer", "skills": ["ui", "figma"]}
        ]"#,
    )
    .unwrap()
}

fn crew(model: Arc<ScriptedModel>, sleeper: Arc<RecordingSleeper>) -> Crew {
    Crew::new(model)
        .with_policy(RetryPolicy::immediate(3).unwrap())
        .with_sleeper(sleeper)
        .with_logger(Arc::new(RecordingLogger::new()))
}

#[test]
fn rest_api_task_suitability_and_fallback_estimate() {
    let task = "Build a REST API for orders";
    let model = Arc::new(
        ScriptedModel::new()
            .reply(AgentAction::Evaluate, "YES: matches backend skills")
            .reply(AgentAction::Estimate, "Sure! duration 25"),
    );
    let crew = crew(model, Arc::new(RecordingSleeper::new()));

    let verdict = crew.evaluate_task(&team()[0], task).unwrap();
    assert_eq!(verdict.to_string(), "YES: matches backend skills");

    let estimate = crew.process_task(task);
    assert_eq!(estimate.duration, 30.0);
    assert_eq!(
        estimate.sub_tasks,
        vec![SubtaskRecord::new(
            "Sub-task 1 for Build a REST API for orders",
            "Basic step"
        )]
    );
}

#[test]
fn transient_failures_then_success_sleep_once_per_failure() {
    let sleeper = Arc::new(RecordingSleeper::new());
    let model = Arc::new(
        ScriptedModel::new()
            .fail(AgentAction::Estimate, ModelError::Transient("rate limited".into()))
            .fail(AgentAction::Estimate, ModelError::Transient("timeout".into()))
            .reply(
                AgentAction::Estimate,
                r#"{"duration": 18, "sub_tasks": [{"sub_task": "Mockups", "help": "Figma"}]}"#,
            ),
    );
    let crew = crew(model.clone(), sleeper.clone());

    let estimate = crew.process_task("Design checkout UI");
    assert_eq!(estimate.duration, 18.0);
    assert_eq!(estimate.sub_tasks, vec![SubtaskRecord::new("Mockups", "Figma")]);
    assert_eq!(model.calls(AgentAction::Estimate), 3);
    assert_eq!(sleeper.slept().len(), 2);
}

#[test]
fn full_plan_assigns_matching_employee() {
    let model = Arc::new(
        ScriptedModel::new()
            .reply(
                AgentAction::Analyze,
                r#"{"technical_spec": "Order service",
                    "tasks": ["Build a REST API for orders"],
                    "dependencies": [], "skills": ["rust"],
                    "resources": {"tech": ["Postgres"], "legal": [], "finance": [], "marketing": []}}"#,
            )
            .reply(
                AgentAction::Estimate,
                r#"{"duration": "40-60h", "sub_tasks": [
                    {"sub_task": "Schema", "help": "orders table"},
                    {"sub_task": "Endpoints", "help": "CRUD"}]}"#,
            )
            .reply(AgentAction::Evaluate, "YES: I build APIs daily")
            .reply(AgentAction::Evaluate, "NO: I design screens"),
    );
    let sleeper = Arc::new(RecordingSleeper::new());
    let crew = crew(model.clone(), sleeper.clone());
    let config = CrewplanConfig::default();

    let start = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

    let report =
        plan_project(&crew, "Order management backend", &team(), &config, start).unwrap();

    assert_eq!(report.tasks.len(), 1);
    let assignment = &report.tasks[0];
    assert_eq!(assignment.duration, 30.0);
    assert_eq!(assignment.days_needed, 4);
    assert_eq!(assignment.deadline, NaiveDate::from_ymd_opt(2026, 10, 23).unwrap());
    assert_eq!(assignment.employees, vec!["Ada".to_string()]);
    assert!(assignment.responses[0].starts_with("✅ Ada accepted — I build APIs daily"));
    assert!(assignment.responses[1].starts_with("❌ Lin declined — I design screens"));
    assert!(assignment
        .sub_tasks
        .iter()
        .all(|s| s.assigned.as_deref() == Some("Ada")));

    // one pause before each employee evaluation
    assert_eq!(sleeper.slept(), vec![config.base_delay(); 2]);

    let text = report.render();
    assert!(text.contains("  Tech: Postgres\n"));
    assert!(text.contains("    - Endpoints (Assigned: Ada)\n"));
}

#[test]
fn unreachable_analyst_produces_no_report() {
    let model = Arc::new(
        ScriptedModel::new().fail(AgentAction::Analyze, ModelError::Fatal("bad key".into())),
    );
    let crew = crew(model, Arc::new(RecordingSleeper::new()));
    let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    assert!(plan_project(&crew, "Anything", &team(), &CrewplanConfig::default(), start).is_none());
}

#[test]
fn huge_estimate_pins_deadline_instead_of_panicking() {
    let model = Arc::new(
        ScriptedModel::new()
            .reply(
                AgentAction::Analyze,
                r#"{"technical_spec": "Order service", "tasks": ["Build a REST API for orders"],
                    "dependencies": [], "skills": [], "resources": {}}"#,
            )
            .reply(
                AgentAction::Estimate,
                r#"{"duration": 2000000000, "sub_tasks": [{"sub_task": "Everything", "help": "all of it"}]}"#,
            )
            .reply(AgentAction::Evaluate, "YES: sure")
            .reply(AgentAction::Evaluate, "NO: no"),
    );
    let logger = Arc::new(RecordingLogger::new());
    let crew = Crew::new(model)
        .with_policy(RetryPolicy::immediate(1).unwrap())
        .with_sleeper(Arc::new(RecordingSleeper::new()))
        .with_logger(logger.clone());
    let start = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

    let report =
        plan_project(&crew, "Order backend", &team(), &CrewplanConfig::default(), start).unwrap();

    let assignment = &report.tasks[0];
    assert_eq!(assignment.duration, 1.5e9);
    assert_eq!(assignment.days_needed, 187_500_000);
    assert_eq!(assignment.deadline, NaiveDate::MAX);
    assert!(logger
        .at(Level::WARN)
        .iter()
        .any(|line| line.contains("out of range")));
}
