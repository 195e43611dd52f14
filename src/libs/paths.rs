// Path resolution: user-supplied path expansion, the default settings file
// location and the dependencies working directory.

use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::libs::errors::{InstallerError, Result};
use crate::{log_debug, log_info};

/// Working directory used when neither the CLI nor the settings name one.
pub const DEFAULT_WORKING_DIR: &str = "deps";

/// `~/.install-deps/settings.yaml`, or `None` if the home directory is unknown.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".install-deps").join("settings.yaml"))
}

/// Expands `~` and environment variables (`$HOME`, `${DEPS_ROOT}`) in `path`.
///
/// # Returns
/// * `Err(InstallerError::Settings)` if a referenced variable is not set.
pub fn expand_path(path: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(path)
        .map_err(|e| InstallerError::Settings(format!("cannot expand path '{path}': {e}")))?;
    log_debug!("[Paths] '{}' expanded to '{}'", path, expanded);
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Creates the dependencies working directory (and its parents) and returns
/// its absolute path. The directory must end up readable: every planned
/// command runs inside it.
///
/// # Returns
/// * `Err(InstallerError::WorkingDirectory)` if it cannot be created or entered.
pub fn prepare_working_dir(path: &Path) -> Result<PathBuf> {
    let fail = |source: std::io::Error| InstallerError::WorkingDirectory {
        path: path.display().to_string(),
        source,
    };

    fs::create_dir_all(path).map_err(fail)?;
    let absolute = std::path::absolute(path).map_err(fail)?;
    // Listing it proves we can enter it.
    fs::read_dir(&absolute).map_err(fail)?;

    log_info!(
        "[Paths] Dependencies working directory: {}",
        absolute.display().to_string().cyan()
    );
    Ok(absolute)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_nested_working_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("a").join("deps");
        let resolved = prepare_working_dir(&target).unwrap();
        assert!(resolved.is_absolute());
        assert!(target.is_dir());
    }

    #[test]
    fn working_dir_under_a_file_fails_with_exit_code_1() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("not-a-dir");
        fs::write(&file, "x").unwrap();

        let err = prepare_working_dir(&file.join("deps")).unwrap_err();
        assert!(matches!(err, InstallerError::WorkingDirectory { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn expands_environment_variables() {
        // PATH is always set for the test harness.
        let expanded = expand_path("$PATH").unwrap();
        assert_eq!(expanded, PathBuf::from(std::env::var("PATH").unwrap()));
    }

    #[test]
    fn unknown_variable_is_a_settings_error() {
        let err = expand_path("$INSTALL_DEPS_SURELY_UNSET_VARIABLE/deps").unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn plain_relative_path_is_untouched() {
        assert_eq!(expand_path("deps").unwrap(), PathBuf::from("deps"));
    }
}
