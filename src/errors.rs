// src/errors.rs

//! Crate-wide error type for the snapshot loader and CLI driver.
//!
//! The ordering core itself never fails; these errors only come from reading
//! and validating snapshots.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskdagError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Duplicate task id: {0}")]
    DuplicateTaskId(String),

    #[error("Dependency cycle detected: {0}")]
    DependencyCycle(String),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, TaskdagError>;
