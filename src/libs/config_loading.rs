use anyhow::Context;
use colored::Colorize;
use std::fs;
use std::path::Path;

use crate::libs::errors::{InstallerError, Result};
use crate::libs::paths::{default_settings_path, expand_path};
use crate::schemas::settings::Settings;
use crate::{log_debug, log_info};

/// Loads the optional settings file.
///
/// An explicitly named file (`--settings` / `INSTALL_DEPS_SETTINGS`) must exist
/// and parse. The default file (`~/.install-deps/settings.yaml`) is only read
/// if present; without it every setting takes its built-in default.
///
/// # Returns
/// * `Err(InstallerError::Settings)` for an unreadable or malformed file.
pub fn load_settings(explicit: Option<&str>) -> Result<Settings> {
    let path = match explicit {
        Some(raw) => expand_path(raw)?,
        None => match default_settings_path() {
            Some(path) if path.is_file() => path,
            _ => {
                log_debug!("[Settings] No settings file found, using defaults");
                return Ok(Settings::default());
            }
        },
    };

    let settings = read_settings_file(&path)
        .map_err(|e| InstallerError::Settings(format!("{e:#}")))?;
    log_info!(
        "[Settings] Loaded settings from {}",
        path.display().to_string().cyan()
    );
    log_debug!("[Settings] {:#?}", settings);
    Ok(settings)
}

fn read_settings_file(path: &Path) -> anyhow::Result<Settings> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file {}", path.display()))?;
    serde_yaml::from_str(&contents)
        .with_context(|| format!("failed to parse settings file {}", path.display()))
}
