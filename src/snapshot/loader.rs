// src/snapshot/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::Result;
use crate::snapshot::model::{RawSnapshotFile, SnapshotFile};
use crate::types::CyclePolicy;

/// Load a snapshot file and return it unvalidated.
///
/// This only performs TOML deserialization. Use [`load_and_validate`] to
/// also check ids and the cycle policy.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawSnapshotFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let raw: RawSnapshotFile = toml::from_str(&contents)?;
    debug!(path = %path.display(), tasks = raw.tasks.len(), "loaded task snapshot");

    Ok(raw)
}

/// Load a snapshot file and validate it.
///
/// `on_cycle`, when given, overrides `[settings].on_cycle` from the file
/// (the CLI's `--strict` flag passes `Some(CyclePolicy::Reject)`).
pub fn load_and_validate(
    path: impl AsRef<Path>,
    on_cycle: Option<CyclePolicy>,
) -> Result<SnapshotFile> {
    let mut raw = load_from_path(&path)?;
    if let Some(policy) = on_cycle {
        raw.settings.on_cycle = policy;
    }
    SnapshotFile::try_from(raw)
}

/// Default snapshot location: `tasks.toml` in the working directory.
pub fn default_snapshot_path() -> PathBuf {
    PathBuf::from("tasks.toml")
}
