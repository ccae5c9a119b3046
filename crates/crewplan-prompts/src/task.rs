pub const EXPECTED_OUTPUT: &str = "JSON with duration and sub-tasks";

/// Append estimation instructions for a task.
pub fn append_instructions(prompt: &mut String, task: &str) {
    prompt.push_str("## Instructions\n\n");
    prompt.push_str(&format!("For '{task}':\n"));
    prompt.push_str(
        "1. Estimate realistic duration in hours (e.g., API dev: 20-40h, UI design: 10-20h).\n\
         2. List sub-tasks as JSON: {'sub_task': str, 'help': str}.\n\
         Return a JSON object with 'duration' and 'sub_tasks'.\n",
    );
}
