// src/lib.rs

//! Deterministic dependency ordering for task snapshots.
//!
//! The core is two pure functions over a borrowed slice of [`Task`]s:
//!
//! - [`order`] returns every task exactly once, dependencies first, with
//!   independent tasks kept in input order. It never fails; tasks caught in
//!   a cycle are appended in input order.
//! - [`has_cycle`] tells whether the dependencies contain a cycle, for
//!   callers that must reject such input.
//!
//! The rest of the crate (snapshot loading, CLI, logging) is a thin driver
//! around those two.

pub mod cli;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod model;
pub mod snapshot;
pub mod types;

use std::io::Write;

use serde::Serialize;
use tracing::{debug, info};

use crate::cli::{CliArgs, Command, OrderArgs, OutputFormat};
use crate::dag::{TaskGraph, find_cycle, format_cycle, sort};
use crate::errors::{Result, TaskdagError};
use crate::snapshot::{SnapshotFile, load_and_validate};
use crate::types::CyclePolicy;

pub use crate::dag::{has_cycle, order};
pub use crate::model::{Task, TaskDependency, TaskId, TaskStatus};

/// High-level entry point used by `main.rs`. Writes to stdout.
pub fn run(args: CliArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_writer(args, &mut out)
}

/// Run a parsed command, writing its output to `out`.
pub fn run_with_writer(args: CliArgs, out: &mut impl Write) -> Result<()> {
    match args.command {
        Command::Order(ref order_args) => run_order(&args.tasks, order_args, out),
        Command::Check => run_check(&args.tasks, out),
        Command::Statuses => {
            write!(out, "{}", TaskStatus::markdown_doc())?;
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct OrderReport<'a> {
    complete: bool,
    dangling_references: usize,
    unresolved: Vec<&'a TaskId>,
    tasks: Vec<&'a Task>,
}

fn run_order(path: &str, args: &OrderArgs, out: &mut impl Write) -> Result<()> {
    let policy = args.strict.then_some(CyclePolicy::Reject);
    let snapshot = load_and_validate(path, policy)?;
    info!(tasks = snapshot.tasks().len(), path, "ordering task snapshot");

    let graph = TaskGraph::build(snapshot.tasks());
    let outcome = sort(&graph);

    let rows: Vec<(usize, &Task)> = outcome
        .order
        .iter()
        .enumerate()
        .map(|(rank, &i)| (rank + 1, graph.task(i)))
        .filter(|(_, task)| args.status.is_none_or(|status| task.status == status))
        .collect();
    let unresolved: Vec<&TaskId> = outcome
        .unresolved
        .iter()
        .map(|&i| &graph.task(i).id)
        .collect();

    match args.format {
        OutputFormat::Json => {
            let report = OrderReport {
                complete: outcome.is_complete(),
                dangling_references: graph.dangling_references(),
                unresolved,
                tasks: rows.iter().map(|&(_, task)| task).collect(),
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            writeln!(out, "order ({} of {} tasks):", rows.len(), graph.len())?;
            for (rank, task) in &rows {
                writeln!(out, "  {rank}. {} [{}] {}", task.id, task.status, task.name)?;
            }
            if !unresolved.is_empty() {
                let ids: Vec<&str> = unresolved.iter().map(|id| id.as_str()).collect();
                writeln!(out, "unresolved (dependency cycle): {}", ids.join(", "))?;
            }
        }
    }

    debug!(
        resolved = outcome.resolved,
        dangling = graph.dangling_references(),
        duplicates = graph.duplicate_references(),
        "order command complete"
    );
    Ok(())
}

fn run_check(path: &str, out: &mut impl Write) -> Result<()> {
    let snapshot: SnapshotFile = load_and_validate(path, Some(CyclePolicy::Append))?;

    match find_cycle(snapshot.tasks()) {
        None => {
            writeln!(out, "ok: no dependency cycles ({} tasks)", snapshot.tasks().len())?;
            Ok(())
        }
        Some(path) => {
            let rendered = format_cycle(&path);
            writeln!(out, "cycle: {rendered}")?;
            Err(TaskdagError::DependencyCycle(rendered))
        }
    }
}
