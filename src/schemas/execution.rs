// Results reported by the command executor.

use std::fmt;
use std::time::Duration;

use crate::schemas::plan::PlannedCommand;

/// What happened to a single command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The process ran to completion with this exit status.
    Exited(i32),
    /// The process was terminated by a signal (Unix), no exit status.
    Terminated,
    /// The process could not be started at all (missing program, bad cwd, ...).
    LaunchFailed(String),
    /// The per-command timeout elapsed and the process was killed.
    TimedOut(Duration),
}

impl CommandOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CommandOutcome::Exited(0))
    }
}

impl fmt::Display for CommandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CommandOutcome::Exited(code) => write!(f, "exit status {code}"),
            CommandOutcome::Terminated => write!(f, "terminated by signal"),
            CommandOutcome::LaunchFailed(reason) => write!(f, "could not be launched: {reason}"),
            CommandOutcome::TimedOut(limit) => write!(f, "timed out after {}s", limit.as_secs()),
        }
    }
}

/// The command that stopped a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedCommand {
    /// Zero-based position of the command within its plan.
    pub index: usize,
    pub command: PlannedCommand,
    pub outcome: CommandOutcome,
}

/// Per-dependency result of running a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub dependency: String,
    /// Number of commands that were started (including the failing one).
    pub executed: usize,
    /// Number of commands in the plan.
    pub total: usize,
    pub failure: Option<FailedCommand>,
}

impl ExecutionResult {
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}
