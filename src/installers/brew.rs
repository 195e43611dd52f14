//! # Homebrew Installer Module
//!
//! Builds the single command of the package-manager strategy on macOS:
//!
//! ```text
//! brew install <formula...>
//! ```
//!
//! Homebrew refuses to run as root, so this command is never elevated,
//! regardless of the `use_sudo` setting.

use colored::Colorize;

use crate::log_debug;
use crate::schemas::plan::PlannedCommand;
use crate::schemas::platform::PackageManager;

/// Prepares `brew install` for the catalog's macOS package name.
///
/// # Arguments
/// * `formulae`: The catalog package field. Several formulae may be listed,
///   separated by whitespace; each becomes its own argument.
pub fn install_command(formulae: &str) -> PlannedCommand {
    let command = PlannedCommand::new(PackageManager::Brew.executable())
        .arg("install")
        .args(formulae.split_whitespace());

    log_debug!("[Brew Installer] Prepared: {}", command.render().cyan());
    command
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_formula() {
        assert_eq!(install_command("glfw").render(), "brew install glfw");
    }

    #[test]
    fn never_elevated() {
        let cmd = install_command("freetype");
        assert_eq!(cmd.program, PackageManager::Brew.executable());
        assert_eq!(cmd.args, vec!["install", "freetype"]);
    }
}
