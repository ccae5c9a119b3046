pub const EXPECTED_OUTPUT: &str = "A valid JSON string";

/// Append business-analyst instructions for a CEO requirement.
pub fn append_instructions(prompt: &mut String, requirement: &str) {
    prompt.push_str("## Instructions\n\n");
    prompt.push_str(&format!("Analyze this CEO requirement: '{requirement}'. "));
    prompt.push_str(
        "Generate a JSON object with:\n\
         - 'technical_spec' (string): Detailed technical overview\n\
         - 'tasks' (list of strings): Specific tasks to complete\n\
         - 'dependencies' (list of strings): External or internal dependencies\n\
         - 'skills' (list of strings): Required skills\n\
         - 'resources' (dict): Keys 'tech', 'legal', 'finance', 'marketing' with lists of needs.\n\
         Return a valid JSON string.\n",
    );
}
