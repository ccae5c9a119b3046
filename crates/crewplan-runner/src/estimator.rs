use crewplan_core::{SubtaskRecord, TaskEstimate};
use serde_json::Value;

use crate::duration::parse_duration_value;
use crate::json_extract::extract_json_object;
use crate::logger::Logger;

/// Keyword → hours, checked in order against the task description.
pub const KEYWORD_HOURS: &[(&str, f64)] = &[("api", 30.0), ("ui", 15.0), ("database", 12.0)];
pub const DEFAULT_HOURS: f64 = 10.0;

/// Hours guessed from the task description alone.
pub fn fallback_duration(task: &str) -> f64 {
    let lower = task.to_lowercase();
    KEYWORD_HOURS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, hours)| *hours)
        .unwrap_or(DEFAULT_HOURS)
}

/// Keyword-table duration plus a single placeholder sub-task.
pub fn fallback_estimate(task: &str) -> TaskEstimate {
    TaskEstimate::new(
        fallback_duration(task),
        vec![SubtaskRecord::placeholder(task)],
    )
}

/// Estimate used when there is no task description at all.
pub fn empty_task_estimate() -> TaskEstimate {
    TaskEstimate::new(
        DEFAULT_HOURS,
        vec![SubtaskRecord::new("Default task", "No description provided.")],
    )
}

/// Turn a task agent's reply into an estimate. Never fails: anything
/// unusable degrades to [`fallback_estimate`] or a placeholder sub-task list.
pub fn estimate_from_reply(task: &str, reply: &str, logger: &dyn Logger) -> TaskEstimate {
    if task.trim().is_empty() {
        logger.warn("empty task provided");
        return empty_task_estimate();
    }

    let Some(data) = extract_json_object(reply) else {
        logger.warn(&format!(
            "no JSON object in reply for '{task}': {}",
            truncate(reply, 200)
        ));
        return fallback(task, logger);
    };

    let Some(duration) = data.get("duration").and_then(parse_duration_value) else {
        logger.warn(&format!(
            "missing or unparseable duration for '{task}': {}",
            data.get("duration").map(Value::to_string).unwrap_or_default()
        ));
        return fallback(task, logger);
    };

    let sub_tasks = match data.get("sub_tasks") {
        Some(Value::Array(items)) => {
            let records: Vec<SubtaskRecord> = items
                .iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect();
            if records.len() < items.len() {
                logger.warn(&format!(
                    "dropped {} malformed sub-task(s) for '{task}'",
                    items.len() - records.len()
                ));
            }
            records
        }
        Some(other) => {
            logger.warn(&format!("sub-tasks not a list for '{task}': {other}"));
            Vec::new()
        }
        None => {
            logger.warn(&format!("no sub-tasks for '{task}'"));
            return fallback(task, logger);
        }
    };

    let sub_tasks = if sub_tasks.is_empty() {
        vec![SubtaskRecord::placeholder(task)]
    } else {
        sub_tasks
    };

    logger.info(&format!(
        "estimated '{task}': {duration}h, {} sub-task(s)",
        sub_tasks.len()
    ));
    TaskEstimate::new(duration, sub_tasks)
}

fn fallback(task: &str, logger: &dyn Logger) -> TaskEstimate {
    let estimate = fallback_estimate(task);
    logger.info(&format!(
        "fallback for '{task}': {}h, 1 sub-task",
        estimate.duration
    ));
    estimate
}

/// Cut `s` to at most `max` characters for log lines.
pub(crate) fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::RecordingLogger;
    use tracing::Level;

    fn estimate(task: &str, reply: &str) -> TaskEstimate {
        estimate_from_reply(task, reply, &RecordingLogger::new())
    }

    #[test]
    fn well_formed_reply_is_returned_unchanged() {
        let reply = r#"```json
{"duration": 24, "sub_tasks": [
  {"sub_task": "Design schema", "help": "Orders and items"},
  {"sub_task": "Write endpoints", "help": "CRUD"},
  {"sub_task": "Design schema", "help": "Orders and items"}
]}
```"#;
        let est = estimate("Build a REST API for orders", reply);
        assert_eq!(est.duration, 24.0);
        assert_eq!(
            est.sub_tasks,
            vec![
                SubtaskRecord::new("Design schema", "Orders and items"),
                SubtaskRecord::new("Write endpoints", "CRUD"),
                SubtaskRecord::new("Design schema", "Orders and items"),
            ]
        );
    }

    #[test]
    fn malformed_reply_uses_keyword_fallback() {
        let log = RecordingLogger::new();
        let est = estimate_from_reply("Build a REST API for orders", "Sure! duration 25", &log);
        assert_eq!(est.duration, 30.0);
        assert_eq!(
            est.sub_tasks,
            vec![SubtaskRecord::new(
                "Sub-task 1 for Build a REST API for orders",
                "Basic step"
            )]
        );
        assert_eq!(log.at(Level::WARN).len(), 1);
    }

    #[test]
    fn keyword_precedence() {
        assert_eq!(fallback_duration("Expose API and UI"), 30.0);
        assert_eq!(fallback_duration("Polish the UI"), 15.0);
        assert_eq!(fallback_duration("Migrate DATABASE"), 12.0);
        assert_eq!(fallback_duration("Write a press release"), 10.0);
    }

    #[test]
    fn range_string_duration() {
        let est = estimate(
            "Design landing page",
            r#"{"duration": "20-40 hours", "sub_tasks": [{"sub_task": "Wireframe", "help": "Figma"}]}"#,
        );
        assert_eq!(est.duration, 20.0);
        assert_eq!(est.sub_tasks.len(), 1);
    }

    #[test]
    fn unparseable_duration_falls_back_entirely() {
        let est = estimate(
            "Set up database",
            r#"{"duration": "a while", "sub_tasks": [{"sub_task": "x", "help": "y"}]}"#,
        );
        assert_eq!(est, fallback_estimate("Set up database"));
        assert_eq!(est.duration, 12.0);
    }

    #[test]
    fn missing_duration_falls_back() {
        let est = estimate(
            "Write docs",
            r#"{"sub_tasks": [{"sub_task": "Outline", "help": "ToC"}]}"#,
        );
        assert_eq!(est, fallback_estimate("Write docs"));
    }

    #[test]
    fn missing_sub_tasks_falls_back_entirely() {
        let est = estimate("Build a REST API for orders", r#"{"duration": 5}"#);
        assert_eq!(est.duration, 30.0);
        assert_eq!(est, fallback_estimate("Build a REST API for orders"));
    }

    #[test]
    fn non_positive_duration_uses_keyword_table() {
        for reply in [
            r#"{"duration": 0, "sub_tasks": [{"sub_task": "x", "help": "y"}]}"#,
            r#"{"duration": -3, "sub_tasks": [{"sub_task": "x", "help": "y"}]}"#,
            r#"{"duration": "-8 hours", "sub_tasks": [{"sub_task": "x", "help": "y"}]}"#,
        ] {
            assert_eq!(estimate("Polish the UI", reply), fallback_estimate("Polish the UI"));
        }
    }

    #[test]
    fn overflowing_duration_uses_keyword_table() {
        let reply = format!(
            r#"{{"duration": "{}0 hours", "sub_tasks": [{{"sub_task": "x", "help": "y"}}]}}"#,
            "9".repeat(400)
        );
        let est = estimate("Migrate database", &reply);
        assert_eq!(est.duration, 12.0);
        assert!(est.duration.is_finite());
    }

    #[test]
    fn sub_tasks_not_a_list_gets_placeholder() {
        let est = estimate("Write docs", r#"{"duration": 6, "sub_tasks": "write them"}"#);
        assert_eq!(est.duration, 6.0);
        assert_eq!(est.sub_tasks, vec![SubtaskRecord::placeholder("Write docs")]);
    }

    #[test]
    fn empty_sub_task_list_gets_placeholder() {
        let est = estimate("Write docs", r#"{"duration": 6, "sub_tasks": []}"#);
        assert_eq!(est.sub_tasks, vec![SubtaskRecord::placeholder("Write docs")]);
    }

    #[test]
    fn malformed_records_are_dropped() {
        let log = RecordingLogger::new();
        let est = estimate_from_reply(
            "Write docs",
            r#"{"duration": 6, "sub_tasks": [{"sub_task": "Outline", "help": "ToC"}, "loose string", {"title": "x"}]}"#,
            &log,
        );
        assert_eq!(est.sub_tasks, vec![SubtaskRecord::new("Outline", "ToC")]);
        assert_eq!(log.at(Level::WARN).len(), 1);
    }

    #[test]
    fn empty_task_gets_default() {
        let est = estimate("   ", r#"{"duration": 99, "sub_tasks": []}"#);
        assert_eq!(est.duration, 10.0);
        assert_eq!(
            est.sub_tasks,
            vec![SubtaskRecord::new("Default task", "No description provided.")]
        );
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("héllo", 2), "hé");
        assert_eq!(truncate("hi", 10), "hi");
    }
}
