pub const EXPECTED_OUTPUT: &str = "YES/NO with reasoning";

/// Append the suitability question for a task.
pub fn append_instructions(prompt: &mut String, task: &str) {
    prompt.push_str("## Instructions\n\n");
    prompt.push_str(&format!(
        "Can you handle this task: '{task}'? \
         Reply with 'YES' or 'NO' followed by a short reason.\n"
    ));
}
