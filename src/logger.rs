// This file implements the installer's console logging sink.
// It provides macros for the fixed set of severity tags (INFO, WARN, ERROR, DEBUG)
// and gates debug output behind a process-wide flag, with colored terminal output.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

/// Logging macros, exported at the crate root so every module can
/// `use crate::{log_info, ...}`.
///
/// All of them write to stderr, leaving stdout to the external commands
/// (git, cmake, brew, apt-get) whose output is passed straight through.

// `log_info!` for run progress: platform, dependency list, plan steps.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => (eprintln!("{} {}", colored::Colorize::bright_green("[INFO]"), format!($($arg)*)));
}

// `log_warn!` for recoverable conditions, such as a package-manager fallback.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => (eprintln!("{} {}", colored::Colorize::bright_yellow("[WARN]"), format!($($arg)*)));
}

// `log_error!` for failures that end a dependency or the whole run.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => (eprintln!("{} {}", colored::Colorize::bright_red("[ERROR]"), format!($($arg)*)));
}

// `log_debug!` for internal tracing. Only printed once `init(true)` ran.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if $crate::logger::is_debug_enabled() {
            eprintln!("{} {}", colored::Colorize::dimmed("[DEBUG]"), format!($($arg)*));
        }
    };
}

// Global debug switch, created on first use.
static DEBUG_ENABLED: OnceLock<AtomicBool> = OnceLock::new();

/// Sets the global debug mode.
///
/// May be called more than once: `main` calls it for the `--debug` flag and
/// again after the settings file has been read, so the last call wins.
///
/// # Arguments
/// * `debug`: If `true`, `log_debug!` messages are printed.
pub fn init(debug: bool) {
    DEBUG_ENABLED
        .get_or_init(|| AtomicBool::new(debug))
        .store(debug, Ordering::Relaxed);

    log_debug!("Logger initialized in DEBUG mode");
}

/// Checks if debug logging is currently enabled.
/// Used by the `log_debug!` macro.
pub fn is_debug_enabled() -> bool {
    DEBUG_ENABLED
        .get()
        .map(|f| f.load(Ordering::Relaxed))
        .unwrap_or(false)
}
