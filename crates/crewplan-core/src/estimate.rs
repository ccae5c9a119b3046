use serde::{Deserialize, Serialize};

use crate::subtask::SubtaskRecord;

/// Hours plus breakdown for one task. `sub_tasks` is never empty once
/// handed to a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskEstimate {
    pub duration: f64,
    pub sub_tasks: Vec<SubtaskRecord>,
}

impl TaskEstimate {
    pub fn new(duration: f64, sub_tasks: Vec<SubtaskRecord>) -> Self {
        Self {
            duration,
            sub_tasks,
        }
    }

    /// Whole working days needed at `hours_per_day`. See [`days_needed`].
    pub fn days(&self, hours_per_day: u32) -> u32 {
        days_needed(self.duration, hours_per_day)
    }
}

/// Whole days for `hours`, rounded up and at least one. A zero-hour day
/// counts as one day of work; huge estimates saturate at `u32::MAX`.
pub fn days_needed(hours: f64, hours_per_day: u32) -> u32 {
    if hours_per_day == 0 {
        return 1;
    }
    ((hours / f64::from(hours_per_day)).ceil() as u32).max(1)
}
