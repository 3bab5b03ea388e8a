#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use taskdag::types::CyclePolicy;
use taskdag::{Task, TaskDependency, TaskStatus};

/// Fixed timestamp so built tasks compare equal across runs.
pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// Builder for `Task` to simplify test setup.
pub struct TaskBuilder {
    task: Task,
}

impl TaskBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            task: Task {
                id: id.into(),
                name: format!("Task {id}"),
                description: format!("test task {id}"),
                status: TaskStatus::Pending,
                dependencies: vec![],
                created_at: epoch(),
                updated_at: epoch(),
            },
        }
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.task.dependencies.push(TaskDependency::new(dep));
        self
    }

    pub fn after_all(mut self, deps: &[&str]) -> Self {
        for dep in deps {
            self = self.after(dep);
        }
        self
    }

    pub fn status(mut self, status: TaskStatus) -> Self {
        self.task.status = status;
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.task.name = name.to_string();
        self
    }

    pub fn build(self) -> Task {
        self.task
    }
}

/// Shorthand: `task("b", &["a"])` is a task `b` depending on `a`.
pub fn task(id: &str, deps: &[&str]) -> Task {
    TaskBuilder::new(id).after_all(deps).build()
}

/// Builder for snapshot files in their TOML form.
pub struct SnapshotBuilder {
    on_cycle: Option<CyclePolicy>,
    tasks: Vec<Task>,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self {
            on_cycle: None,
            tasks: Vec::new(),
        }
    }

    pub fn on_cycle(mut self, policy: CyclePolicy) -> Self {
        self.on_cycle = Some(policy);
        self
    }

    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// Render as a snapshot file body.
    pub fn to_toml(&self) -> String {
        let mut out = String::new();
        if let Some(policy) = self.on_cycle {
            let value = match policy {
                CyclePolicy::Append => "append",
                CyclePolicy::Reject => "reject",
            };
            out.push_str(&format!("[settings]\non_cycle = \"{value}\"\n\n"));
        }
        for task in &self.tasks {
            out.push_str("[[task]]\n");
            out.push_str(&format!("id = {:?}\n", task.id.as_str()));
            out.push_str(&format!("name = {:?}\n", task.name));
            out.push_str(&format!("status = \"{}\"\n", task.status));
            let deps: Vec<String> = task
                .dependency_ids()
                .map(|id| format!("{:?}", id.as_str()))
                .collect();
            out.push_str(&format!("dependencies = [{}]\n\n", deps.join(", ")));
        }
        out
    }
}

impl Default for SnapshotBuilder {
    fn default() -> Self {
        Self::new()
    }
}
