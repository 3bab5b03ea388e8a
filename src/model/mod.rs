// src/model/mod.rs

//! Task data model shared by the loader, the core and the CLI.

pub mod status;
pub mod task;

pub use status::TaskStatus;
pub use task::{Task, TaskDependency, TaskId};
