// tests/snapshot_loading.rs

use std::io::Write;

use tempfile::NamedTempFile;
use taskdag::errors::TaskdagError;
use taskdag::snapshot::{load_and_validate, load_from_path};
use taskdag::types::CyclePolicy;
use taskdag::{TaskStatus, order};
use taskdag_test_utils::builders::{SnapshotBuilder, TaskBuilder, task};
use taskdag_test_utils::ids;

fn write_snapshot(body: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{body}").unwrap();
    file
}

#[test]
fn loads_tasks_in_file_order() {
    let file = write_snapshot(
        r#"
[[task]]
id = "deploy"
name = "Deploy"
status = "IN_PROGRESS"
dependencies = ["build", { task_id = "test" }]

[[task]]
id = "build"
name = "Build"
created_at = "2024-05-01T10:00:00Z"
updated_at = "2024-05-02T10:00:00Z"

[[task]]
id = "test"
name = "Test"
dependencies = [{ taskId = "build" }]
"#,
    );

    let snapshot = load_and_validate(file.path(), None).unwrap();
    let tasks = snapshot.tasks();

    assert_eq!(ids(tasks), vec!["deploy", "build", "test"]);
    assert_eq!(tasks[0].status, TaskStatus::InProgress);
    assert_eq!(tasks[1].status, TaskStatus::Pending);
    assert_eq!(snapshot.settings().on_cycle, CyclePolicy::Append);
    assert_eq!(ids(order(tasks)), vec!["build", "test", "deploy"]);
}

#[test]
fn cycle_rejected_when_settings_say_so() {
    let body = SnapshotBuilder::new()
        .on_cycle(CyclePolicy::Reject)
        .with_task(task("a", &["b"]))
        .with_task(task("b", &["a"]))
        .to_toml();
    let file = write_snapshot(&body);

    match load_and_validate(file.path(), None) {
        Err(TaskdagError::DependencyCycle(msg)) => assert_eq!(msg, "a -> b -> a"),
        other => panic!("expected DependencyCycle error, got: {other:?}"),
    }
}

#[test]
fn override_policy_beats_file_settings() {
    let body = SnapshotBuilder::new()
        .on_cycle(CyclePolicy::Reject)
        .with_task(task("a", &["a"]))
        .to_toml();
    let file = write_snapshot(&body);

    let snapshot = load_and_validate(file.path(), Some(CyclePolicy::Append)).unwrap();
    assert_eq!(snapshot.tasks().len(), 1);

    let strict = SnapshotBuilder::new().with_task(task("a", &["a"])).to_toml();
    let file = write_snapshot(&strict);
    assert!(matches!(
        load_and_validate(file.path(), Some(CyclePolicy::Reject)),
        Err(TaskdagError::DependencyCycle(_))
    ));
}

#[test]
fn duplicate_ids_return_structured_error() {
    let body = SnapshotBuilder::new()
        .with_task(task("a", &[]))
        .with_task(TaskBuilder::new("a").name("Again").build())
        .to_toml();
    let file = write_snapshot(&body);

    match load_and_validate(file.path(), None) {
        Err(TaskdagError::DuplicateTaskId(id)) => assert_eq!(id, "a"),
        other => panic!("expected DuplicateTaskId, got: {other:?}"),
    }
}

#[test]
fn unknown_status_is_a_toml_error() {
    let file = write_snapshot(
        r#"
[[task]]
id = "a"
status = "DONE"
"#,
    );
    assert!(matches!(load_from_path(file.path()), Err(TaskdagError::TomlError(_))));
}

#[test]
fn unknown_cycle_policy_is_a_toml_error() {
    let file = write_snapshot("[settings]\non_cycle = \"ignore\"\n");
    assert!(matches!(load_from_path(file.path()), Err(TaskdagError::TomlError(_))));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_from_path(dir.path().join("nope.toml"));
    assert!(matches!(result, Err(TaskdagError::IoError(_))));
}

#[test]
fn empty_file_is_an_empty_snapshot() {
    let file = write_snapshot("");
    let snapshot = load_and_validate(file.path(), Some(CyclePolicy::Reject)).unwrap();
    assert!(snapshot.into_tasks().is_empty());
}
