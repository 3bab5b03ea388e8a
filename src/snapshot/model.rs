// src/snapshot/model.rs

use serde::Deserialize;

use crate::model::Task;
use crate::types::CyclePolicy;

/// Snapshot file exactly as deserialized, before validation.
///
/// ```toml
/// [settings]
/// on_cycle = "reject"
///
/// [[task]]
/// id = "build"
/// name = "Build"
/// status = "PENDING"
/// dependencies = ["fetch"]
///
/// [[task]]
/// id = "fetch"
/// name = "Fetch sources"
/// ```
///
/// `[[task]]` is an array, so the file order is the input order used for
/// tie-breaking.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSnapshotFile {
    #[serde(default)]
    pub settings: SettingsSection,

    #[serde(default, rename = "task")]
    pub tasks: Vec<Task>,
}

/// `[settings]` section.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct SettingsSection {
    /// `"append"` (default) or `"reject"`.
    #[serde(default)]
    pub on_cycle: CyclePolicy,
}

/// A snapshot that passed validation.
///
/// Only constructed through `TryFrom<RawSnapshotFile>` (see
/// `snapshot::validate`).
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    settings: SettingsSection,
    tasks: Vec<Task>,
}

impl SnapshotFile {
    pub(crate) fn new_unchecked(settings: SettingsSection, tasks: Vec<Task>) -> Self {
        Self { settings, tasks }
    }

    pub fn settings(&self) -> &SettingsSection {
        &self.settings
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }
}
