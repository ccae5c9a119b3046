use crewplan_core::{CrewplanError, Employee};

/// Who the model is asked to act as.
///
/// Role and goal must be non-empty; this is checked when the profile is
/// built so a bad profile never reaches a model call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentProfile {
    pub role: String,
    pub goal: String,
    pub backstory: String,
    pub verbose: bool,
}

impl AgentProfile {
    pub fn new(
        role: impl Into<String>,
        goal: impl Into<String>,
        backstory: impl Into<String>,
    ) -> Result<Self, CrewplanError> {
        let role = role.into();
        let goal = goal.into();
        if role.trim().is_empty() || goal.trim().is_empty() {
            return Err(CrewplanError::InvalidInput(
                "role and goal must be non-empty".into(),
            ));
        }
        Ok(Self {
            role,
            goal,
            backstory: backstory.into(),
            verbose: false,
        })
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn business_analyst() -> Self {
        Self {
            role: "Business Analyst".into(),
            goal: "Analyze CEO requirements and produce a structured technical plan with resource allocation.".into(),
            backstory: "An expert in translating high-level startup goals into actionable technical plans across tech, legal, finance, and marketing domains.".into(),
            verbose: true,
        }
    }

    pub fn task_processor() -> Self {
        Self {
            role: "Task Processor".into(),
            goal: "Estimate task durations and generate detailed sub-tasks.".into(),
            backstory: "An expert in project estimation and task breakdown.".into(),
            verbose: true,
        }
    }

    /// Profile speaking as the given employee.
    pub fn for_employee(employee: &Employee) -> Result<Self, CrewplanError> {
        let backstory = format!(
            "{} with role {}, specializing in: {}",
            employee.name, employee.role, employee.my_work
        );
        Ok(Self::new(
            employee.role.clone(),
            "Evaluate if a task aligns with my skills and expertise.",
            backstory,
        )?
        .with_verbose(true))
    }

    /// Render the role header that opens every prompt.
    pub fn append_preamble(&self, prompt: &mut String) {
        prompt.push_str(&format!("# Role: {}\n\n", self.role));
        prompt.push_str(&format!("## Goal\n\n{}\n\n", self.goal));
        if !self.backstory.is_empty() {
            prompt.push_str(&format!("## Background\n\n{}\n\n", self.backstory));
        }
    }
}
