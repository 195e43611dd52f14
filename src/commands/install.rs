// This file contains the top-level sequence of an `install-deps` run:
//
//   resolve platform -> load settings -> resolve toolchain and build mode
//   -> hand over to the orchestrator
//
// Real console, PATH and process implementations are wired in here; the
// components below only see traits.

use crate::cli::Cli;
use crate::libs::{
    catalog::DependencyCatalog,
    command_executor::SystemRunner,
    config_loading::load_settings,
    configuration::resolve_config,
    errors::Result,
    install_orchestrator::{InstallOrchestrator, RunSummary},
    prompter::ConsolePrompter,
    utilities::{executables::PathProbe, platform::detect_platform},
};
use crate::{log_debug, logger};

/// Main entry point of the installer.
///
/// # Arguments
/// * `cli`: Parsed command-line flags.
///
/// # Returns
/// The run summary, or the first fatal `InstallerError`. The caller turns the
/// error into the process exit code.
pub fn run(cli: Cli) -> Result<RunSummary> {
    log_debug!("Entered install::run() function.");

    let platform = detect_platform()?;

    let settings = load_settings(cli.settings.as_deref())?;
    if settings.debug && !cli.debug {
        logger::init(true);
    }

    let config = resolve_config(&cli, &settings, platform, &ConsolePrompter)?;
    log_debug!("Resolved configuration: {:#?}", config);

    let catalog = DependencyCatalog::builtin();
    let runner = SystemRunner::new(config.command_timeout);
    let summary = InstallOrchestrator::new(&catalog, &config, &PathProbe, &runner).run()?;

    log_debug!("Exited install::run() function.");
    Ok(summary)
}
