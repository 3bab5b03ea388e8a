// src/dag/sorter.rs

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::dag::graph::TaskGraph;
use crate::model::Task;

/// Result of a stable topological sort, expressed as input positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOutcome {
    /// Every input position exactly once.
    pub order: Vec<usize>,
    /// How many leading entries of `order` were placed by dependency order.
    pub resolved: usize,
    /// Positions that could not be placed because they sit on or behind a
    /// cycle. They form the tail of `order`, in input order.
    pub unresolved: Vec<usize>,
    /// In-degree decrements that would have gone below zero.
    pub clamped_decrements: usize,
}

impl SortOutcome {
    /// True when `order` is a valid topological order of the whole snapshot.
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Stable Kahn sort over `graph`.
///
/// Ready tasks are consumed first-in first-out. The initial ready set and
/// each batch released by one task are sorted by input position before they
/// are queued, so tasks that become ready together keep their input order.
///
/// Never fails: anything left over once the queue drains (a cycle, or tasks
/// waiting on one) is appended in input order.
pub fn sort(graph: &TaskGraph<'_>) -> SortOutcome {
    let total = graph.len();
    let mut remaining = graph.in_degrees().to_vec();
    let mut placed = vec![false; total];
    let mut order = Vec::with_capacity(total);
    let mut clamped_decrements = 0;

    // Positions are visited ascending, so the seed is already sorted.
    let mut ready: VecDeque<usize> = (0..total).filter(|&i| remaining[i] == 0).collect();

    while let Some(current) = ready.pop_front() {
        order.push(current);
        placed[current] = true;

        let mut newly_ready = Vec::new();
        for &dependent in graph.dependents_of(current) {
            if remaining[dependent] == 0 {
                warn!(
                    task = %graph.task(dependent).id,
                    "sorter: in-degree would go negative, clamping at zero"
                );
                clamped_decrements += 1;
                continue;
            }
            remaining[dependent] -= 1;
            if remaining[dependent] == 0 {
                newly_ready.push(dependent);
            }
        }

        newly_ready.sort_unstable();
        ready.extend(newly_ready);
    }

    let resolved = order.len();
    let unresolved: Vec<usize> = (0..total).filter(|&i| !placed[i]).collect();

    if !unresolved.is_empty() {
        warn!(
            resolved,
            unresolved = unresolved.len(),
            "sorter: dependency cycle detected, appending remaining tasks in input order"
        );
        order.extend_from_slice(&unresolved);
    }

    debug!(total, resolved, "sorter: ordering complete");

    SortOutcome {
        order,
        resolved,
        unresolved,
        clamped_decrements,
    }
}

/// Order `tasks` so that every task comes after the tasks it depends on.
///
/// The result always has the same length as the input. Independent tasks
/// keep their relative input order. Unknown dependency ids are ignored. On
/// cyclic input the acyclic part is ordered first and the rest follows in
/// input order; use [`has_cycle`](crate::dag::has_cycle) to reject such
/// input instead.
pub fn order(tasks: &[Task]) -> Vec<&Task> {
    if tasks.is_empty() {
        return Vec::new();
    }

    let graph = TaskGraph::build(tasks);
    sort(&graph)
        .order
        .into_iter()
        .map(|i| graph.task(i))
        .collect()
}
