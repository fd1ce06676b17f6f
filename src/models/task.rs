use serde::{Deserialize, Serialize};

/// Task priority level
///
/// Three fixed levels. Ordering for the priority sort is by rank
/// (high=3, medium=2, low=1), descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Parse a priority name, case-insensitively
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }

    /// Numeric rank used by the priority sort (higher = more urgent)
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task model
///
/// `due_date` is kept as the literal string the user typed (no validation);
/// it is only parsed on demand when the date sort needs an ordering key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub text: String,
    pub completed: bool,
    pub priority: Priority,
    pub due_date: Option<String>,
}

impl Task {
    /// Create a new open task
    pub fn new(id: i64, text: String, priority: Priority, due_date: Option<String>) -> Self {
        Self {
            id,
            text,
            completed: false,
            priority,
            due_date,
        }
    }
}
