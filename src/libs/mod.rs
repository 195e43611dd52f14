// Core of the installer, leaves first.

// Error taxonomy and exit codes.
pub mod errors;
// Path expansion and the dependencies working directory.
pub mod paths;
// Optional YAML settings file.
pub mod config_loading;
// Platform resolution and executable probes.
pub mod utilities;
// Static table of supported libraries.
pub mod catalog;
// Interactive numbered prompts.
pub mod prompter;
// Windows toolchain and build mode selection.
pub mod toolchain_selector;
// Flags + settings + prompts -> `ResolvedConfig`.
pub mod configuration;
// One dependency -> one install plan.
pub mod install_planner;
// Sequential plan execution.
pub mod command_executor;
// Whole-run driver.
pub mod install_orchestrator;
