// src/snapshot/validate.rs

use std::collections::HashSet;

use crate::dag::{find_cycle, format_cycle};
use crate::errors::{Result, TaskdagError};
use crate::snapshot::model::{RawSnapshotFile, SnapshotFile};
use crate::types::CyclePolicy;

impl TryFrom<RawSnapshotFile> for SnapshotFile {
    type Error = TaskdagError;

    fn try_from(raw: RawSnapshotFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_snapshot(&raw)?;
        Ok(SnapshotFile::new_unchecked(raw.settings, raw.tasks))
    }
}

fn validate_raw_snapshot(raw: &RawSnapshotFile) -> Result<()> {
    validate_task_ids(raw)?;
    if raw.settings.on_cycle == CyclePolicy::Reject {
        validate_acyclic(raw)?;
    }
    Ok(())
}

fn validate_task_ids(raw: &RawSnapshotFile) -> Result<()> {
    let mut seen = HashSet::with_capacity(raw.tasks.len());
    for (position, task) in raw.tasks.iter().enumerate() {
        if task.id.as_str().trim().is_empty() {
            return Err(TaskdagError::ConfigError(format!(
                "task #{} has an empty `id`",
                position + 1
            )));
        }
        if !seen.insert(task.id.as_str()) {
            return Err(TaskdagError::DuplicateTaskId(task.id.to_string()));
        }
    }
    Ok(())
}

fn validate_acyclic(raw: &RawSnapshotFile) -> Result<()> {
    match find_cycle(&raw.tasks) {
        None => Ok(()),
        Some(path) => Err(TaskdagError::DependencyCycle(format_cycle(&path))),
    }
}
