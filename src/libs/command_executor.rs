// Runs install plans.
//
// Commands run strictly in order, one at a time, on the calling thread. The
// first command that does not exit with status 0 (including one that cannot be
// spawned, or that hits the optional timeout) stops the plan; the commands
// after it are never started. Output is inherited from this process and passed
// straight through to the console.

use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::time::Duration;

use colored::Colorize;
use wait_timeout::ChildExt;

use crate::schemas::execution::{CommandOutcome, ExecutionResult, FailedCommand};
use crate::schemas::plan::{InstallPlan, PlannedCommand};
use crate::{log_debug, log_error, log_info};

/// Runs a single command and reports how it ended. Never panics and never
/// returns an error: launch problems are an outcome like any other.
pub trait CommandRunner {
    fn run(&self, command: &PlannedCommand, working_dir: &Path) -> CommandOutcome;
}

/// Spawns real processes with inherited stdio.
#[derive(Debug, Default, Clone)]
pub struct SystemRunner {
    timeout: Option<Duration>,
}

impl SystemRunner {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, command: &PlannedCommand, working_dir: &Path) -> CommandOutcome {
        let cwd = resolve_cwd(command, working_dir);

        let mut child = match Command::new(&command.program)
            .args(&command.args)
            .current_dir(&cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
        {
            Ok(child) => child,
            Err(e) => return CommandOutcome::LaunchFailed(e.to_string()),
        };

        let status = match self.timeout {
            Some(limit) => match child.wait_timeout(limit) {
                Ok(Some(status)) => status,
                Ok(None) => {
                    stop(&mut child);
                    return CommandOutcome::TimedOut(limit);
                }
                Err(e) => {
                    stop(&mut child);
                    return CommandOutcome::LaunchFailed(e.to_string());
                }
            },
            None => match child.wait() {
                Ok(status) => status,
                Err(e) => return CommandOutcome::LaunchFailed(e.to_string()),
            },
        };

        match status.code() {
            Some(code) => CommandOutcome::Exited(code),
            None => CommandOutcome::Terminated,
        }
    }
}

/// Kills and reaps a child we stopped waiting for, so no process or zombie is left behind.
fn stop(child: &mut Child) {
    if let Err(e) = child.kill() {
        log_debug!("[Executor] Could not kill pid {}: {}", child.id(), e);
    }
    let _ = child.wait();
}

/// Absolute directory a command runs in.
pub fn resolve_cwd(command: &PlannedCommand, working_dir: &Path) -> PathBuf {
    match &command.cwd {
        Some(dir) => working_dir.join(dir),
        None => working_dir.to_path_buf(),
    }
}

/// Executes plans inside the dependencies working directory.
pub struct CommandExecutor<'a> {
    runner: &'a dyn CommandRunner,
    working_dir: &'a Path,
}

impl<'a> CommandExecutor<'a> {
    pub fn new(runner: &'a dyn CommandRunner, working_dir: &'a Path) -> Self {
        Self { runner, working_dir }
    }

    /// Consumes `plan`, running its commands until the first failure.
    pub fn execute(&self, plan: InstallPlan) -> ExecutionResult {
        let total = plan.commands.len();
        let mut executed = 0;

        for (index, command) in plan.commands.into_iter().enumerate() {
            log_info!(
                "[Executor] ({}/{}) {}",
                index + 1,
                total,
                command.to_string().cyan()
            );
            executed += 1;

            let outcome = self.runner.run(&command, self.working_dir);
            log_debug!("[Executor] '{}' finished: {}", command.program, outcome);

            if !outcome.is_success() {
                log_error!(
                    "[Executor] Command for '{}' failed ({}): {}",
                    plan.dependency.bold(),
                    outcome.to_string().red(),
                    command.render().red()
                );
                if index + 1 < total {
                    log_debug!(
                        "[Executor] Skipping {} remaining command(s) for '{}'",
                        total - index - 1,
                        plan.dependency
                    );
                }
                return ExecutionResult {
                    dependency: plan.dependency,
                    executed,
                    total,
                    failure: Some(FailedCommand {
                        index,
                        command,
                        outcome,
                    }),
                };
            }
        }

        ExecutionResult {
            dependency: plan.dependency,
            executed,
            total,
            failure: None,
        }
    }
}
