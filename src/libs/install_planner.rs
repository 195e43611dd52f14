// This module turns one catalog entry into an `InstallPlan`.
//
// Strategy selection:
// 1. Off Windows, with both package names populated, and with the host's
//    package manager on PATH: a single package-manager command.
// 2. Otherwise: the four-step source build (clone, configure, build, install).
//
// If the package-manager strategy is eligible but its executable is missing,
// the dependency is downgraded to a source build with a warning. This is
// decided up front through the `ToolProbe`, never by letting a command fail.
//
// Planning has no side effects besides logging: the same inputs and the same
// probe answers always produce the same plan.

use colored::Colorize;

use crate::installers::{apt, brew, source_build};
use crate::libs::errors::{InstallerError, Result};
use crate::libs::utilities::executables::ToolProbe;
use crate::schemas::dependency::LibraryDependency;
use crate::schemas::plan::{InstallPlan, InstallStrategy};
use crate::schemas::platform::{PackageManager, Platform};
use crate::schemas::toolchain::{BuildMode, Toolchain};
use crate::{log_debug, log_warn};

/// Everything about the run that shapes a plan, resolved once up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanContext {
    platform: Platform,
    toolchain: Option<Toolchain>,
    build_mode: BuildMode,
    use_sudo: bool,
}

impl PlanContext {
    /// Builds the context, enforcing that Windows always has a toolchain.
    /// A toolchain passed for a non-Windows platform is dropped.
    pub fn new(
        platform: Platform,
        toolchain: Option<Toolchain>,
        build_mode: BuildMode,
        use_sudo: bool,
    ) -> Result<Self> {
        let toolchain = match (platform, toolchain) {
            (Platform::Windows, None) => {
                return Err(InstallerError::InvalidSelection {
                    what: "compiler",
                    value: "none (a Windows toolchain is required)".to_string(),
                });
            }
            (Platform::Windows, Some(toolchain)) => Some(toolchain),
            (_, _) => None,
        };
        Ok(Self {
            platform,
            toolchain,
            build_mode,
            use_sudo,
        })
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn toolchain(&self) -> Option<Toolchain> {
        self.toolchain
    }

    pub fn build_mode(&self) -> BuildMode {
        self.build_mode
    }

    pub fn use_sudo(&self) -> bool {
        self.use_sudo
    }

    /// CMake generator for source builds: the toolchain's on Windows,
    /// `Unix Makefiles` elsewhere.
    pub fn generator(&self) -> &'static str {
        self.toolchain
            .map(Toolchain::generator)
            .unwrap_or("Unix Makefiles")
    }

    pub fn is_multi_config(&self) -> bool {
        self.toolchain.is_some_and(Toolchain::is_multi_config)
    }

    /// `make` prefix used when the catalog entry does not override it.
    pub fn default_make_prefix(&self) -> &'static str {
        match self.toolchain {
            Some(Toolchain::MinGw) => "mingw32-",
            _ => "",
        }
    }
}

/// Picks the strategy for `dependency` on the context's platform.
pub fn select_strategy(
    dependency: &LibraryDependency,
    ctx: &PlanContext,
    probe: &dyn ToolProbe,
) -> InstallStrategy {
    if !dependency.package_manager_eligible(ctx.platform) {
        log_debug!(
            "[Planner] '{}' has no package-manager path on {}; building from source",
            dependency.name,
            ctx.platform
        );
        return InstallStrategy::SourceBuild;
    }

    // Eligibility already excludes Windows, so a package manager exists here.
    let Some(manager) = ctx.platform.package_manager() else {
        return InstallStrategy::SourceBuild;
    };

    if probe.is_available(manager.executable()) {
        InstallStrategy::PackageManager(manager)
    } else {
        log_warn!(
            "[Planner] '{}' is not available; falling back to a source build for {}",
            manager.executable().yellow(),
            dependency.name.bold()
        );
        InstallStrategy::SourceBuild
    }
}

/// Produces the install plan for one dependency.
///
/// # Arguments
/// * `dependency`: The catalog entry to install.
/// * `ctx`: Platform, toolchain, build mode and elevation for this run.
/// * `probe`: Answers whether the package manager is on PATH.
pub fn plan(dependency: &LibraryDependency, ctx: &PlanContext, probe: &dyn ToolProbe) -> InstallPlan {
    let strategy = select_strategy(dependency, ctx, probe);

    let commands = match strategy {
        InstallStrategy::PackageManager(manager) => {
            // Eligibility guarantees a non-empty package name for this platform.
            let package = dependency.package_for(ctx.platform).unwrap_or_default();
            vec![match manager {
                PackageManager::Brew => brew::install_command(package),
                PackageManager::Apt => apt::install_command(package, ctx.use_sudo),
            }]
        }
        InstallStrategy::SourceBuild => source_build::commands(dependency, ctx),
    };

    log_debug!(
        "[Planner] Planned {} command(s) for '{}' via {}",
        commands.len(),
        dependency.name,
        strategy
    );

    InstallPlan {
        dependency: dependency.name.clone(),
        strategy,
        commands,
    }
}
