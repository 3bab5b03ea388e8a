// src/dag/cycle.rs

//! Cycle detection over a task snapshot.
//!
//! This works straight from the task list and does not reuse
//! [`TaskGraph`](crate::dag::TaskGraph), so callers can ask for a verdict
//! without building (or trusting) the sorter's structures.

use std::collections::HashMap;

use tracing::debug;

use crate::model::{Task, TaskId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    /// On the current DFS path.
    OnPath,
    /// Whole subtree explored, no cycle reachable.
    Done,
}

/// Returns `true` if the dependencies among present tasks form a cycle.
///
/// Dangling references are ignored. A task depending on itself is a cycle.
pub fn has_cycle(tasks: &[Task]) -> bool {
    find_cycle(tasks).is_some()
}

/// Find one dependency cycle, if any.
///
/// The returned path starts and ends with the same id and follows
/// dependency edges, e.g. `[a, c, b, a]` for "a needs c, c needs b, b needs
/// a". Stops at the first cycle found; roots are tried in input order.
pub fn find_cycle(tasks: &[Task]) -> Option<Vec<TaskId>> {
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(tasks.len());
    for (i, task) in tasks.iter().enumerate() {
        index.entry(task.id.as_str()).or_insert(i);
    }

    let adjacency: Vec<Vec<usize>> = tasks
        .iter()
        .map(|task| {
            task.dependency_ids()
                .filter_map(|dep| index.get(dep.as_str()).copied())
                .collect()
        })
        .collect();

    let mut marks = vec![Mark::Unvisited; tasks.len()];
    // (node, next edge to follow). Doubles as the current path.
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..tasks.len() {
        if marks[root] != Mark::Unvisited {
            continue;
        }

        marks[root] = Mark::OnPath;
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let (node, edge) = *frame;

            let Some(&next) = adjacency[node].get(edge) else {
                marks[node] = Mark::Done;
                stack.pop();
                continue;
            };
            frame.1 += 1;

            match marks[next] {
                Mark::Done => {}
                Mark::OnPath => {
                    let start = stack
                        .iter()
                        .position(|&(n, _)| n == next)
                        .unwrap_or(0);
                    let mut path: Vec<TaskId> = stack[start..]
                        .iter()
                        .map(|&(n, _)| tasks[n].id.clone())
                        .collect();
                    path.push(tasks[next].id.clone());
                    debug!(cycle = %format_cycle(&path), "cycle: found dependency cycle");
                    return Some(path);
                }
                Mark::Unvisited => {
                    marks[next] = Mark::OnPath;
                    stack.push((next, 0));
                }
            }
        }
    }

    None
}

/// Render a cycle path as `a -> b -> a`.
pub fn format_cycle(path: &[TaskId]) -> String {
    path.iter()
        .map(TaskId::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}
