use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use crewplan_core::CrewplanError;

use crate::retry::{Backoff, RetryPolicy, DEFAULT_BACKOFF_BASE};

/// Tunables shared by every command, overridable from the environment.
#[derive(Debug, Clone, Args)]
pub struct CrewplanConfig {
    /// Maximum attempts per model call
    #[arg(long, global = true, env = "CREWPLAN_MAX_RETRIES", default_value = "10")]
    pub max_retries: u32,

    /// Shortest wait between retries (milliseconds)
    #[arg(long, global = true, env = "CREWPLAN_MIN_WAIT_MS", default_value = "83")]
    pub min_wait_ms: u64,

    /// Longest wait between retries (milliseconds)
    #[arg(long, global = true, env = "CREWPLAN_MAX_WAIT_MS", default_value = "60000")]
    pub max_wait_ms: u64,

    /// Pause before each employee evaluation (milliseconds)
    #[arg(long, global = true, env = "CREWPLAN_BASE_DELAY_MS", default_value = "10")]
    pub base_delay_ms: u64,

    /// Most employees asked per task
    #[arg(long, global = true, env = "CREWPLAN_MAX_EMPLOYEES_PER_TASK", default_value = "4")]
    pub max_employees_per_task: usize,

    /// Working hours in a day
    #[arg(long, global = true, env = "CREWPLAN_HOURS_PER_DAY", default_value = "8")]
    pub hours_per_day: u32,

    /// JSON file with the employee list
    #[arg(
        long,
        global = true,
        env = "CREWPLAN_EMPLOYEES_FILE",
        default_value = "data/employees.json"
    )]
    pub employees_file: PathBuf,
}

impl Default for CrewplanConfig {
    fn default() -> Self {
        Self {
            max_retries: 10,
            min_wait_ms: 83,
            max_wait_ms: 60_000,
            base_delay_ms: 10,
            max_employees_per_task: 4,
            hours_per_day: 8,
            employees_file: PathBuf::from("data/employees.json"),
        }
    }
}

impl CrewplanConfig {
    /// Reject settings that would make the tool misbehave.
    pub fn validate(&self) -> Result<(), CrewplanError> {
        let invalid = |msg: &str| Err(CrewplanError::InvalidInput(msg.to_string()));
        if self.max_retries == 0 {
            return invalid("max retries must be positive");
        }
        if self.min_wait_ms == 0 {
            return invalid("min wait must be positive");
        }
        if self.max_wait_ms < self.min_wait_ms {
            return invalid("max wait must be >= min wait");
        }
        if self.max_employees_per_task == 0 {
            return invalid("max employees per task must be positive");
        }
        if self.hours_per_day == 0 {
            return invalid("hours per day must be positive");
        }
        Ok(())
    }

    /// Exponential backoff between the configured wait bounds.
    pub fn retry_policy(&self) -> Result<RetryPolicy, CrewplanError> {
        RetryPolicy::new(
            self.max_retries,
            Backoff::Exponential {
                base: DEFAULT_BACKOFF_BASE,
                min: Duration::from_millis(self.min_wait_ms),
                max: Duration::from_millis(self.max_wait_ms),
            },
        )
    }

    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }
}
