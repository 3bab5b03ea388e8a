pub mod builders;

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt};

use taskdag::Task;

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.:
/// `RUST_LOG=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // print only for failing tests unless --nocapture
            .with_target(true)
            .init();
    });
}

/// Ids of `tasks`, in order.
pub fn ids<T>(tasks: impl IntoIterator<Item = T>) -> Vec<String>
where
    T: std::borrow::Borrow<Task>,
{
    tasks
        .into_iter()
        .map(|t| t.borrow().id.to_string())
        .collect()
}

/// Position of the task with `id` in `tasks`.
///
/// Panics if the id is missing, which in a test is the failure we want.
pub fn position(tasks: &[&Task], id: &str) -> usize {
    tasks
        .iter()
        .position(|t| t.id.as_str() == id)
        .unwrap_or_else(|| panic!("task {id} missing from output"))
}
