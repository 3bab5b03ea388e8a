use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What to do when a snapshot's dependencies contain a cycle.
///
/// - `Append`: order the acyclic part and append the rest in input order
///   (default).
/// - `Reject`: refuse the snapshot with a
///   [`DependencyCycle`](crate::errors::TaskdagError::DependencyCycle) error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CyclePolicy {
    #[default]
    Append,
    Reject,
}

impl FromStr for CyclePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "append" => Ok(CyclePolicy::Append),
            "reject" => Ok(CyclePolicy::Reject),
            other => Err(format!(
                "invalid on_cycle: {other} (expected \"append\" or \"reject\")"
            )),
        }
    }
}
