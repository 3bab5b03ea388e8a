// tests/cycles.rs

use petgraph::algo::is_cyclic_directed;
use petgraph::graphmap::DiGraphMap;
use taskdag::dag::{find_cycle, format_cycle};
use taskdag::{Task, has_cycle};
use taskdag_test_utils::builders::task;

/// Reference verdict from petgraph. Edge direction: dep -> task.
fn petgraph_says_cyclic(tasks: &[Task]) -> bool {
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();
    for t in tasks {
        graph.add_node(t.id.as_str());
    }
    for t in tasks {
        for dep in t.dependency_ids() {
            if graph.contains_node(dep.as_str()) {
                graph.add_edge(dep.as_str(), t.id.as_str(), ());
            }
        }
    }
    is_cyclic_directed(&graph)
}

#[test]
fn acyclic_shapes() {
    let shapes: Vec<Vec<Task>> = vec![
        vec![],
        vec![task("a", &[])],
        vec![task("a", &[]), task("b", &["a"]), task("c", &["b"])],
        vec![
            task("d", &["b", "c"]),
            task("b", &["a"]),
            task("c", &["a"]),
            task("a", &[]),
        ],
        vec![task("a", &["a_missing"]), task("b", &["a", "a"])],
    ];

    for tasks in shapes {
        assert!(!has_cycle(&tasks));
        assert!(!petgraph_says_cyclic(&tasks));
    }
}

#[test]
fn cyclic_shapes() {
    let shapes: Vec<Vec<Task>> = vec![
        vec![task("a", &["a"])],
        vec![task("a", &["b"]), task("b", &["a"])],
        vec![task("a", &["c"]), task("b", &["a"]), task("c", &["b"])],
        vec![
            task("root", &[]),
            task("a", &["root", "d"]),
            task("b", &["a"]),
            task("c", &["b"]),
            task("d", &["c"]),
        ],
    ];

    for tasks in shapes {
        assert!(has_cycle(&tasks));
        assert!(petgraph_says_cyclic(&tasks));
    }
}

#[test]
fn reported_path_is_a_real_cycle() {
    let tasks = vec![
        task("root", &[]),
        task("a", &["root", "d"]),
        task("b", &["a"]),
        task("c", &["b"]),
        task("d", &["c"]),
    ];

    let path = find_cycle(&tasks).expect("cycle expected");
    assert_eq!(path.first(), path.last());

    // Each step follows a dependency edge.
    for pair in path.windows(2) {
        let from = tasks.iter().find(|t| t.id == pair[0]).unwrap();
        assert!(from.dependency_ids().any(|dep| *dep == pair[1]));
    }
    assert_eq!(format_cycle(&path), "a -> d -> c -> b -> a");
}

#[test]
fn dangling_reference_cannot_close_a_cycle() {
    // "b" is absent, so a -> b -> a does not exist.
    let tasks = vec![task("a", &["b"]), task("c", &["a"])];
    assert!(!has_cycle(&tasks));
}
