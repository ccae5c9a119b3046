use serde::{Deserialize, Serialize};

/// An employee record as found in the employees file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Free-text summary of what the employee usually works on
    #[serde(default)]
    pub my_work: String,
}

impl Employee {
    /// Text describing the employee's expertise: the skills when listed,
    /// otherwise `my_work`.
    pub fn expertise(&self) -> String {
        if self.skills.is_empty() {
            self.my_work.clone()
        } else {
            self.skills.join(" ")
        }
    }
}
