// src/dag/mod.rs

//! Dependency graph, stable ordering and cycle detection.
//!
//! - [`graph`] builds index-addressed adjacency and in-degrees from a task
//!   snapshot.
//! - [`sorter`] produces a deterministic, total order from that graph.
//! - [`cycle`] answers whether the snapshot contains a dependency cycle,
//!   independently of the other two.

pub mod cycle;
pub mod graph;
pub mod sorter;

pub use cycle::{find_cycle, format_cycle, has_cycle};
pub use graph::TaskGraph;
pub use sorter::{SortOutcome, order, sort};
