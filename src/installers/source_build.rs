//! # Source Build Installer Module
//!
//! The four steps of the source-build strategy, each as a structured command
//! relative to the dependencies working directory:
//!
//! 1. **Clone**: `git clone <url> <name>`
//! 2. **Configure**: `cmake -S . -B build -G <generator> ...` inside `<name>`
//! 3. **Build**: `<prefix>make` inside `<name>/build` for Makefile generators,
//!    `cmake --build build --config <mode>` for Visual Studio
//! 4. **Install**: `sudo make install` on Unix, `mingw32-make install` with MinGW,
//!    `cmake --install build --config <mode>` for Visual Studio
//!
//! Visual Studio generators are multi-config, so the build mode travels as
//! `CMAKE_CONFIGURATION_TYPES` at configure time and `--config` afterwards.
//! Single-config (Makefile) generators get `CMAKE_BUILD_TYPE` instead.

use std::path::PathBuf;

use crate::libs::install_planner::PlanContext;
use crate::schemas::dependency::LibraryDependency;
use crate::schemas::plan::PlannedCommand;

/// CMake binary directory, relative to the clone.
pub const BUILD_DIR: &str = "build";

/// Target architecture passed to Visual Studio generators.
const VS_ARCHITECTURE: &str = "x64";

/// All four steps, in order.
pub fn commands(dependency: &LibraryDependency, ctx: &PlanContext) -> Vec<PlannedCommand> {
    vec![
        clone(dependency),
        configure(dependency, ctx),
        build(dependency, ctx),
        install(dependency, ctx),
    ]
}

/// Clones the repository into a directory named after the dependency.
pub fn clone(dependency: &LibraryDependency) -> PlannedCommand {
    PlannedCommand::new("git")
        .arg("clone")
        .arg(dependency.git_url.as_str())
        .arg(dependency.name.as_str())
}

pub fn configure(dependency: &LibraryDependency, ctx: &PlanContext) -> PlannedCommand {
    let mode = ctx.build_mode().as_cmake();
    let command = PlannedCommand::new("cmake")
        .args(["-S", ".", "-B", BUILD_DIR, "-G", ctx.generator()]);

    let command = if ctx.is_multi_config() {
        command
            .args(["-A", VS_ARCHITECTURE])
            .arg(format!("-DCMAKE_CONFIGURATION_TYPES:STRING={mode}"))
    } else {
        command.arg(format!("-DCMAKE_BUILD_TYPE={mode}"))
    };

    command
        .args(dependency.cmake.extra_flags.iter().cloned())
        .in_dir(source_dir(dependency))
}

pub fn build(dependency: &LibraryDependency, ctx: &PlanContext) -> PlannedCommand {
    if ctx.is_multi_config() {
        PlannedCommand::new("cmake")
            .args(["--build", BUILD_DIR, "--config", ctx.build_mode().as_cmake()])
            .in_dir(source_dir(dependency))
    } else {
        PlannedCommand::new(&make_tool(dependency, ctx)).in_dir(binary_dir(dependency))
    }
}

/// Installs the built library. Elevated on Unix-like hosts unless disabled.
pub fn install(dependency: &LibraryDependency, ctx: &PlanContext) -> PlannedCommand {
    if ctx.is_multi_config() {
        return PlannedCommand::new("cmake")
            .args(["--install", BUILD_DIR, "--config", ctx.build_mode().as_cmake()])
            .in_dir(source_dir(dependency));
    }

    let make = make_tool(dependency, ctx);
    let command = if ctx.platform().is_unix_like() && ctx.use_sudo() {
        PlannedCommand::new("sudo").arg(make)
    } else {
        PlannedCommand::new(&make)
    };
    command.arg("install").in_dir(binary_dir(dependency))
}

/// `<prefix>make`, where the catalog entry may override the toolchain's prefix.
fn make_tool(dependency: &LibraryDependency, ctx: &PlanContext) -> String {
    let prefix = dependency
        .cmake
        .make_prefix
        .as_deref()
        .unwrap_or_else(|| ctx.default_make_prefix());
    format!("{prefix}make")
}

fn source_dir(dependency: &LibraryDependency) -> PathBuf {
    PathBuf::from(&dependency.name)
}

fn binary_dir(dependency: &LibraryDependency) -> PathBuf {
    source_dir(dependency).join(BUILD_DIR)
}
