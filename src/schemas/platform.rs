// Host platform and package-manager tags.
//
// A `Platform` is resolved once at process start (see `libs::utilities::platform`)
// and is read-only afterwards. Strategy selection in the planner is keyed on it.

use std::fmt;

/// The closed set of host platforms the installer can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    Linux,
    MacOS,
}

impl Platform {
    /// Linux and macOS share the Unix build flow (Makefiles, `sudo` elevation).
    pub fn is_unix_like(self) -> bool {
        matches!(self, Platform::Linux | Platform::MacOS)
    }

    /// The host package manager able to install prebuilt libraries, if any.
    /// Windows has none: every dependency is built from source there.
    pub fn package_manager(self) -> Option<PackageManager> {
        match self {
            Platform::MacOS => Some(PackageManager::Brew),
            Platform::Linux => Some(PackageManager::Apt),
            Platform::Windows => None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Platform::Windows => write!(f, "Windows"),
            Platform::Linux => write!(f, "Linux"),
            Platform::MacOS => write!(f, "MacOS"),
        }
    }
}

/// Host-native package managers used by the package-manager strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Brew,
    Apt,
}

impl PackageManager {
    /// The executable whose presence on `PATH` makes this strategy usable.
    pub fn executable(self) -> &'static str {
        match self {
            PackageManager::Brew => "brew",
            PackageManager::Apt => "apt-get",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.executable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_has_no_package_manager() {
        assert_eq!(Platform::Windows.package_manager(), None);
        assert!(!Platform::Windows.is_unix_like());
    }

    #[test]
    fn unix_platforms_map_to_their_package_manager() {
        assert_eq!(Platform::MacOS.package_manager(), Some(PackageManager::Brew));
        assert_eq!(Platform::Linux.package_manager(), Some(PackageManager::Apt));
        assert_eq!(PackageManager::Apt.executable(), "apt-get");
    }
}
