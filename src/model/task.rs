// src/model/task.rs

//! Task records as handed to the ordering core.

use std::borrow::Borrow;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::status::TaskStatus;

/// Caller-assigned, stable task identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for TaskId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TaskId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A reference to a task that must complete before the owning task.
///
/// Snapshot files may spell a dependency either as a bare id (`"a"`) or as a
/// table (`{ task_id = "a" }`). It is always written back as the table form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "DependencyRepr")]
pub struct TaskDependency {
    pub task_id: TaskId,
}

impl TaskDependency {
    pub fn new(task_id: impl Into<TaskId>) -> Self {
        Self {
            task_id: task_id.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DependencyRepr {
    Bare(TaskId),
    Table {
        #[serde(alias = "taskId")]
        task_id: TaskId,
    },
}

impl From<DependencyRepr> for TaskDependency {
    fn from(repr: DependencyRepr) -> Self {
        match repr {
            DependencyRepr::Bare(task_id) | DependencyRepr::Table { task_id } => {
                TaskDependency { task_id }
            }
        }
    }
}

/// A unit of work in a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub status: TaskStatus,

    /// Ordered list of tasks this one waits for.
    #[serde(default)]
    pub dependencies: Vec<TaskDependency>,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// New pending task with no dependencies, timestamped now.
    pub fn new(id: impl Into<TaskId>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            status: TaskStatus::Pending,
            dependencies: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Builder-style helper appending one dependency reference.
    pub fn depends_on(mut self, id: impl Into<TaskId>) -> Self {
        self.dependencies.push(TaskDependency::new(id));
        self
    }

    /// Ids this task references, in declaration order, dangling ones included.
    pub fn dependency_ids(&self) -> impl Iterator<Item = &TaskId> {
        self.dependencies.iter().map(|d| &d.task_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        deps: Vec<TaskDependency>,
    }

    #[test]
    fn dependency_accepts_bare_and_table_forms() {
        let parsed: Wrapper =
            toml::from_str(r#"deps = ["a", { task_id = "b" }, { taskId = "c" }]"#).unwrap();
        let ids: Vec<&str> = parsed.deps.iter().map(|d| d.task_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn dependency_serializes_as_table() {
        let json = serde_json::to_string(&TaskDependency::new("a")).unwrap();
        assert_eq!(json, r#"{"task_id":"a"}"#);
    }

    #[test]
    fn depends_on_keeps_declaration_order() {
        let task = Task::new("x", "X").depends_on("b").depends_on("a");
        let ids: Vec<&str> = task.dependency_ids().map(TaskId::as_str).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(task.status, TaskStatus::Pending);
    }
}
