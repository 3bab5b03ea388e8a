// src/snapshot/mod.rs

//! Task snapshots read from disk.
//!
//! Responsibilities:
//! - Define the TOML-backed snapshot file (`model.rs`).
//! - Load a snapshot file from disk (`loader.rs`).
//! - Validate ids and, when asked to, the absence of cycles (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_snapshot_path, load_and_validate, load_from_path};
pub use model::{RawSnapshotFile, SettingsSection, SnapshotFile};
