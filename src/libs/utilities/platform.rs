// Our custom logging macros for colored output.
use crate::{log_debug, log_error};
// The 'colored' crate highlights the platform names in logs.
use colored::Colorize;

use crate::libs::errors::{InstallerError, Result};
use crate::schemas::platform::Platform;

/// Maps a raw host platform identifier onto the canonical `Platform`.
///
/// Accepts the values of `std::env::consts::OS` (`windows`, `linux`, `macos`)
/// as well as the common aliases build scripts tend to pass around
/// (`win32`, `win64`, `linux1`, `linux2`, `darwin`, ...). Matching is case-insensitive.
///
/// # Arguments
/// * `raw`: The host platform identifier.
///
/// # Returns
/// * `Ok(Platform)` for a known identifier.
/// * `Err(InstallerError::UnsupportedPlatform)` otherwise. Strategy selection is
///   keyed on the platform, so an unknown host is never mapped to a guess.
pub fn resolve_platform(raw: &str) -> Result<Platform> {
    let platform = match raw.trim().to_lowercase().as_str() {
        "windows" | "win32" | "win64" | "cygwin" | "msys" => Platform::Windows,
        "linux" | "linux1" | "linux2" => Platform::Linux,
        "macos" | "darwin" | "apple-darwin" | "mac" | "osx" => Platform::MacOS,
        _ => {
            log_error!("[Platform] Unknown platform identifier '{}'", raw.purple());
            return Err(InstallerError::UnsupportedPlatform(raw.to_string()));
        }
    };
    log_debug!("[Platform] '{}' resolved to {}", raw, platform.to_string().cyan());
    Ok(platform)
}

/// Resolves the platform this binary was compiled for.
pub fn detect_platform() -> Result<Platform> {
    resolve_platform(std::env::consts::OS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_std_identifiers() {
        assert_eq!(resolve_platform("windows").unwrap(), Platform::Windows);
        assert_eq!(resolve_platform("linux").unwrap(), Platform::Linux);
        assert_eq!(resolve_platform("macos").unwrap(), Platform::MacOS);
    }

    #[test]
    fn resolves_aliases_case_insensitively() {
        assert_eq!(resolve_platform("Win32").unwrap(), Platform::Windows);
        assert_eq!(resolve_platform("linux2").unwrap(), Platform::Linux);
        assert_eq!(resolve_platform("Darwin").unwrap(), Platform::MacOS);
    }

    #[test]
    fn unknown_identifier_is_unsupported() {
        match resolve_platform("freebsd") {
            Err(InstallerError::UnsupportedPlatform(raw)) => assert_eq!(raw, "freebsd"),
            other => panic!("expected UnsupportedPlatform, got {other:?}"),
        }
    }
}
