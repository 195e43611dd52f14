// This module drives a whole install run over the catalog.
//
// The configuration (platform, toolchain, build mode) arrives already resolved.
// From there the run is:
//
//   prepare working dir -> for each dependency: plan -> (preflight) -> execute -> summary
//
// Key responsibilities:
// - Creating the dependencies working directory before anything is planned.
// - Checking that the build driver (`cmake`) and `git` exist before the first
//   source build runs.
// - Applying the failure policy: abort on the first failed dependency, or keep
//   going and fail the run at the end.
// - Reporting progress and the failing command verbatim, so it can be re-run by hand.

use colored::Colorize;

use crate::libs::catalog::DependencyCatalog;
use crate::libs::command_executor::{CommandExecutor, CommandRunner};
use crate::libs::configuration::ResolvedConfig;
use crate::libs::errors::{InstallerError, Result};
use crate::libs::install_planner;
use crate::libs::paths::prepare_working_dir;
use crate::libs::utilities::executables::ToolProbe;
use crate::schemas::execution::ExecutionResult;
use crate::schemas::plan::InstallStrategy;
use crate::schemas::settings::FailurePolicy;
use crate::{log_debug, log_error, log_info, log_warn};

/// Tools every source build needs. `cmake` comes first: it is the build driver.
const SOURCE_BUILD_TOOLS: [&str; 2] = ["cmake", "git"];

const SEPARATOR: &str =
    "-----------------------------------------------------------------------------";

/// What a finished run did.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub installed: Vec<String>,
    pub failed: Vec<ExecutionResult>,
    /// Plans printed by a dry run.
    pub planned: usize,
}

pub struct InstallOrchestrator<'a> {
    catalog: &'a DependencyCatalog,
    config: &'a ResolvedConfig,
    probe: &'a dyn ToolProbe,
    runner: &'a dyn CommandRunner,
}

impl<'a> InstallOrchestrator<'a> {
    pub fn new(
        catalog: &'a DependencyCatalog,
        config: &'a ResolvedConfig,
        probe: &'a dyn ToolProbe,
        runner: &'a dyn CommandRunner,
    ) -> Self {
        Self {
            catalog,
            config,
            probe,
            runner,
        }
    }

    /// Installs every catalog entry in order.
    ///
    /// # Returns
    /// * `Ok(RunSummary)` when every dependency installed (or on a dry run).
    /// * `Err(WorkingDirectory)` if the working directory cannot be prepared.
    /// * `Err(ToolNotFound)` if a source build is needed but `cmake`/`git` is missing.
    /// * `Err(CommandFailed)` for the first failure under the abort policy.
    /// * `Err(DependenciesFailed)` after a keep-going run with failures.
    pub fn run(&self) -> Result<RunSummary> {
        let ctx = &self.config.plan_context;
        let names = self.catalog.names();

        log_info!("Current platform is {}", ctx.platform().to_string().bold());
        if let Some(toolchain) = ctx.toolchain() {
            log_info!("Toolchain: {}", toolchain.to_string().bold());
        }
        if self.catalog.is_empty() {
            log_warn!("[Orchestrator] The catalog is empty, nothing to install");
            return Ok(RunSummary::default());
        }
        log_info!(
            "Install dependencies ({}): {}",
            self.catalog.len(),
            names.join(", ").cyan()
        );

        if self.config.dry_run {
            return Ok(self.print_plans(&names));
        }

        let working_dir = prepare_working_dir(&self.config.working_dir)?;
        let executor = CommandExecutor::new(self.runner, &working_dir);
        let mut summary = RunSummary::default();
        let mut preflight_done = false;

        for (position, name) in names.iter().enumerate() {
            let dependency = self.catalog.get(name);
            eprintln!("{}", SEPARATOR.bright_blue());
            log_info!(
                "{}. Processing {} library",
                position + 1,
                dependency.name.bold()
            );

            let plan = install_planner::plan(dependency, ctx, self.probe);
            log_info!("[Orchestrator] Strategy: {}", plan.strategy.to_string().yellow());
            log_debug!("[Orchestrator] Plan for '{}': {:?}", name, plan.rendered());

            if plan.strategy == InstallStrategy::SourceBuild && !preflight_done {
                self.preflight()?;
                preflight_done = true;
            }

            let result = executor.execute(plan);
            if result.is_success() {
                log_info!("Successfully installed {} library", name.bold().bright_green());
                summary.installed.push(name.to_string());
            } else {
                self.handle_failure(&result)?;
                summary.failed.push(result);
            }
            eprintln!("{}", SEPARATOR.bright_blue());
        }

        if summary.failed.is_empty() {
            log_info!("All libs installed");
            Ok(summary)
        } else {
            let failed: Vec<String> = summary
                .failed
                .iter()
                .map(|r| r.dependency.clone())
                .collect();
            log_error!(
                "Installed {} of {} libraries; failed: {}",
                summary.installed.len(),
                names.len(),
                failed.join(", ").red()
            );
            Err(InstallerError::DependenciesFailed(failed))
        }
    }

    /// Reports a failed dependency. Under the abort policy the failure ends the run.
    fn handle_failure(&self, result: &ExecutionResult) -> Result<()> {
        let Some(failure) = &result.failure else {
            return Ok(());
        };
        log_error!(
            "Failed to install {} at {}. Re-run manually: {}",
            result.dependency.bold().red(),
            failed_step(result),
            failure.command.to_string().red()
        );
        match self.config.failure_policy {
            FailurePolicy::Abort => {
                eprintln!("{}", SEPARATOR.bright_blue());
                Err(InstallerError::CommandFailed {
                    dependency: result.dependency.clone(),
                    command: failure.command.render(),
                    outcome: failure.outcome.clone(),
                })
            }
            FailurePolicy::Continue => Ok(()),
        }
    }

    /// Verifies the source-build tools are on PATH.
    fn preflight(&self) -> Result<()> {
        for tool in SOURCE_BUILD_TOOLS {
            if !self.probe.is_available(tool) {
                log_error!(
                    "[Orchestrator] '{}' is required to build dependencies from source but was not found",
                    tool.red()
                );
                return Err(InstallerError::ToolNotFound(tool.to_string()));
            }
        }
        log_debug!("[Orchestrator] Source-build tools present");
        Ok(())
    }

    fn print_plans(&self, names: &[&str]) -> RunSummary {
        let ctx = &self.config.plan_context;
        log_info!(
            "[Orchestrator] Dry run, commands would run in {}",
            self.config.working_dir.display().to_string().cyan()
        );
        for name in names {
            let plan = install_planner::plan(self.catalog.get(name), ctx, self.probe);
            log_info!("{} via {}:", name.bold(), plan.strategy);
            for command in &plan.commands {
                eprintln!("    {command}");
            }
        }
        RunSummary {
            planned: names.len(),
            ..RunSummary::default()
        }
    }
}

/// `step N of M`, 1-based, for a failed result.
fn failed_step(result: &ExecutionResult) -> String {
    let step = result.failure.as_ref().map_or(result.executed, |f| f.index + 1);
    format!("step {} of {}", step, result.total)
}
