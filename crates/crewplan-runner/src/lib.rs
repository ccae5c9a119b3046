pub mod agents;
pub mod assignment;
pub mod config;
pub mod duration;
pub mod employees;
pub mod estimator;
pub mod json_extract;
pub mod logger;
pub mod matcher;
pub mod model;
pub mod report;
pub mod retry;
pub mod suitability;

pub use agents::Crew;
pub use logger::{Logger, TracingLogger};
pub use retry::{Backoff, RetryError, RetryPolicy};
