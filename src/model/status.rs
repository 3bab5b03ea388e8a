// src/model/status.rs

//! Task status values and their human-readable descriptions.
//!
//! The status is owned by whatever stores tasks; the ordering core never
//! looks at it. It lives here so snapshots, filters and docs share one
//! closed set of values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Blocked,
}

impl TaskStatus {
    /// Every status, in declaration order.
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
        TaskStatus::Blocked,
    ];

    /// Wire value as it appears in snapshot files.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "PENDING",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::Completed => "COMPLETED",
            TaskStatus::Blocked => "BLOCKED",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In progress",
            TaskStatus::Completed => "Completed",
            TaskStatus::Blocked => "Blocked",
        }
    }

    /// Render the set of statuses as a small Markdown document.
    pub fn markdown_doc() -> String {
        let mut doc = String::from("# Task status\n\n## Values\n\n");
        for status in Self::ALL {
            doc.push_str(&format!("- `{}`: {}\n", status.as_str(), status.description()));
        }
        doc
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['-', ' '], "_");
        TaskStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| {
                let valid: Vec<&str> = TaskStatus::ALL.iter().map(|s| s.as_str()).collect();
                format!("invalid task status: {s} (expected one of {})", valid.join(", "))
            })
    }
}
