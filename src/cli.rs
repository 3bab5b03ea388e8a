// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::model::TaskStatus;

/// Command-line arguments for `taskdag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskdag",
    version,
    about = "Order tasks by their dependencies and detect dependency cycles.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the task snapshot (TOML).
    #[arg(long, value_name = "PATH", default_value = "tasks.toml", global = true)]
    pub tasks: String,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the tasks in dependency order.
    Order(OrderArgs),

    /// Report whether the dependencies contain a cycle (exit code 1 if so).
    Check,

    /// Describe the available task statuses.
    Statuses,
}

#[derive(Debug, Clone, Args)]
pub struct OrderArgs {
    /// Fail instead of appending tasks caught in a dependency cycle.
    #[arg(long)]
    pub strict: bool,

    /// Only print tasks with this status (the whole snapshot is still ordered).
    #[arg(long, value_name = "STATUS")]
    pub status: Option<TaskStatus>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
