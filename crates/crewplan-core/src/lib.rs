pub mod employee;
pub mod error;
pub mod estimate;
pub mod plan;
pub mod subtask;
pub mod suitability;

pub use employee::Employee;
pub use error::CrewplanError;
pub use estimate::{days_needed, TaskEstimate};
pub use plan::{ProjectPlan, Resources};
pub use subtask::SubtaskRecord;
pub use suitability::{Suitability, Verdict};
