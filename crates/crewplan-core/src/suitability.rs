use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether an employee takes on a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Yes,
    No,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Yes => "YES",
            Verdict::No => "NO",
        }
    }

    /// Reason used when the answer carries no explanation of its own.
    pub fn default_reason(&self) -> &'static str {
        match self {
            Verdict::Yes => "Task aligns with skills.",
            Verdict::No => "Task outside expertise.",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized YES/NO answer plus its reason.
///
/// Renders as `"<VERDICT>: <reason>"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suitability {
    pub verdict: Verdict,
    pub reason: String,
}

impl Suitability {
    pub fn no(reason: impl Into<String>) -> Self {
        Self {
            verdict: Verdict::No,
            reason: reason.into(),
        }
    }

    pub fn accepted(&self) -> bool {
        self.verdict == Verdict::Yes
    }
}

impl fmt::Display for Suitability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.verdict, self.reason)
    }
}
