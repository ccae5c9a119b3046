use serde::{Deserialize, Serialize};

/// Needs per business area.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub legal: Vec<String>,
    #[serde(default)]
    pub finance: Vec<String>,
    #[serde(default)]
    pub marketing: Vec<String>,
}

/// Structured plan the business analyst derives from a CEO requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPlan {
    pub technical_spec: String,
    pub tasks: Vec<String>,
    pub dependencies: Vec<String>,
    pub skills: Vec<String>,
    pub resources: Resources,
}

impl ProjectPlan {
    pub const REQUIRED_KEYS: &'static [&'static str] = &[
        "technical_spec",
        "tasks",
        "dependencies",
        "skills",
        "resources",
    ];

    /// Minimal plan used when the analyst's reply is unusable.
    pub fn fallback(requirement: &str) -> Self {
        Self {
            technical_spec: format!("Basic implementation for {requirement}"),
            tasks: vec![format!("Implement {requirement}")],
            dependencies: Vec::new(),
            skills: Vec::new(),
            resources: Resources::default(),
        }
    }
}
