//! # APT Installer Module
//!
//! Builds the single command of the package-manager strategy on Linux:
//!
//! ```text
//! sudo apt-get install -y <package...>
//! ```

use colored::Colorize;

use crate::log_debug;
use crate::schemas::plan::PlannedCommand;
use crate::schemas::platform::PackageManager;

/// Prepares a non-interactive `apt-get install` for the catalog's Linux package list.
///
/// # Arguments
/// * `packages`: Whitespace separated package names (e.g. `libglfw3 libglfw3-dev`).
/// * `use_sudo`: Prefix the command with `sudo`. Disabled for root containers.
pub fn install_command(packages: &str, use_sudo: bool) -> PlannedCommand {
    let executable = PackageManager::Apt.executable();
    let command = if use_sudo {
        PlannedCommand::new("sudo").arg(executable)
    } else {
        PlannedCommand::new(executable)
    }
    .args(["install", "-y"])
    .args(packages.split_whitespace());

    log_debug!("[APT Installer] Prepared: {}", command.render().cyan());
    command
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elevated_install_splits_package_list() {
        let cmd = install_command("libglfw3 libglfw3-dev", true);
        assert_eq!(cmd.program, "sudo");
        assert_eq!(cmd.args, vec!["apt-get", "install", "-y", "libglfw3", "libglfw3-dev"]);
    }

    #[test]
    fn runs_the_executable_the_availability_check_looks_for() {
        let probed = PackageManager::Apt.executable();
        assert_eq!(install_command("libglfw3", true).args[0], probed);
        assert_eq!(install_command("libglfw3", false).program, probed);
    }

    #[test]
    fn unelevated_install() {
        assert_eq!(
            install_command("libfreetype6-dev", false).render(),
            "apt-get install -y libfreetype6-dev"
        );
    }
}
