use serde::{Deserialize, Serialize};

/// One step of a task breakdown, as the task agent is asked to produce it.
/// The `sub_task` and `help` key names are part of the reply contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtaskRecord {
    /// Short title for the step
    pub sub_task: String,
    /// Short description of how to approach it
    pub help: String,
    /// Employee the step was handed to, once assigned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned: Option<String>,
}

impl SubtaskRecord {
    pub fn new(sub_task: impl Into<String>, help: impl Into<String>) -> Self {
        Self {
            sub_task: sub_task.into(),
            help: help.into(),
            assigned: None,
        }
    }

    /// Placeholder step used when no usable breakdown came back.
    pub fn placeholder(task: &str) -> Self {
        Self::new(format!("Sub-task 1 for {task}"), "Basic step")
    }
}
