// src/dag/graph.rs

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::debug;

use crate::model::Task;

/// Index-addressed dependency graph over a borrowed task snapshot.
///
/// Every task gets a dense index equal to its position in the input slice.
/// Adjacency and in-degree are plain vectors keyed by that index, so the
/// input position is the only thing that can influence ordering later on.
///
/// References to ids that are not in the snapshot are dropped and counted.
/// Repeated references to the same present id from one task collapse into a
/// single edge and are counted too.
#[derive(Debug, Clone)]
pub struct TaskGraph<'a> {
    tasks: &'a [Task],
    /// id -> position of its first occurrence in `tasks`.
    positions: HashMap<&'a str, usize>,
    /// Direct dependencies: tasks that must come before this one.
    deps: Vec<Vec<usize>>,
    /// Direct dependents: tasks that list this one as a dependency.
    dependents: Vec<Vec<usize>>,
    in_degree: Vec<usize>,
    dangling_references: usize,
    duplicate_references: usize,
}

impl<'a> TaskGraph<'a> {
    /// Build the graph in O(V + E).
    pub fn build(tasks: &'a [Task]) -> Self {
        let mut positions: HashMap<&'a str, usize> = HashMap::with_capacity(tasks.len());
        for (index, task) in tasks.iter().enumerate() {
            match positions.entry(task.id.as_str()) {
                Entry::Vacant(slot) => {
                    slot.insert(index);
                }
                Entry::Occupied(first) => {
                    debug!(
                        task = %task.id,
                        first = *first.get(),
                        duplicate = index,
                        "graph: duplicate task id, references resolve to first occurrence"
                    );
                }
            }
        }

        let mut deps: Vec<Vec<usize>> = vec![Vec::new(); tasks.len()];
        let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); tasks.len()];
        let mut dangling_references = 0;
        let mut duplicate_references = 0;

        // last_owner[d] == Some(i) means task i already has an edge to d.
        let mut last_owner: Vec<Option<usize>> = vec![None; tasks.len()];

        for (index, task) in tasks.iter().enumerate() {
            for dep_id in task.dependency_ids() {
                let Some(&dep) = positions.get(dep_id.as_str()) else {
                    debug!(task = %task.id, reference = %dep_id, "graph: ignoring dangling dependency");
                    dangling_references += 1;
                    continue;
                };

                if last_owner[dep] == Some(index) {
                    duplicate_references += 1;
                    continue;
                }
                last_owner[dep] = Some(index);

                deps[index].push(dep);
                dependents[dep].push(index);
            }
        }

        let in_degree = deps.iter().map(Vec::len).collect();

        Self {
            tasks,
            positions,
            deps,
            dependents,
            in_degree,
            dangling_references,
            duplicate_references,
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The snapshot this graph was built from.
    pub fn tasks(&self) -> &'a [Task] {
        self.tasks
    }

    pub fn task(&self, index: usize) -> &'a Task {
        &self.tasks[index]
    }

    /// Input position of the first task carrying `id`.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// Present direct dependencies of the task at `index`, in declaration order.
    pub fn dependencies_of(&self, index: usize) -> &[usize] {
        self.deps.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Tasks that directly depend on the task at `index`, ascending by position.
    pub fn dependents_of(&self, index: usize) -> &[usize] {
        self.dependents.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct present dependencies of the task at `index`.
    pub fn in_degree(&self, index: usize) -> usize {
        self.in_degree.get(index).copied().unwrap_or(0)
    }

    pub(crate) fn in_degrees(&self) -> &[usize] {
        &self.in_degree
    }

    pub fn edge_count(&self) -> usize {
        self.in_degree.iter().sum()
    }

    /// How many references pointed at ids absent from the snapshot.
    pub fn dangling_references(&self) -> usize {
        self.dangling_references
    }

    /// How many repeated references were collapsed into an existing edge.
    pub fn duplicate_references(&self) -> usize {
        self.duplicate_references
    }
}
