// Defines the catalog record for one third-party library.
// Records are built once by `libs::catalog` and never mutated afterwards.

use crate::schemas::platform::Platform;

/// CMake-related options of a catalog entry.
///
/// The generator itself is not stored here: it is a placeholder filled in at
/// plan time from the resolved platform/toolchain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CmakeOptions {
    /// Extra arguments appended to the configure command (e.g. `-DGLFW_BUILD_DOCS=OFF`).
    pub extra_flags: Vec<String>,

    /// Prefix prepended to `make` for Makefile generators.
    /// `None` means "use the toolchain default" (`mingw32-` for MinGW, nothing otherwise).
    pub make_prefix: Option<String>,
}

/// One library the installer knows how to provide.
///
/// Package names use the empty string for "no package-manager path on this
/// platform". Names and URLs are opaque: nothing beyond non-emptiness is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryDependency {
    /// Unique catalog key; also the clone directory for source builds.
    pub name: String,
    /// Source-control URL cloned by the source-build strategy.
    pub git_url: String,
    /// Homebrew formula, empty if none.
    pub macos_package: String,
    /// apt package list (space separated), empty if none.
    pub linux_package: String,
    pub cmake: CmakeOptions,
}

impl LibraryDependency {
    pub fn new(name: &str, git_url: &str) -> Self {
        Self {
            name: name.to_string(),
            git_url: git_url.to_string(),
            macos_package: String::new(),
            linux_package: String::new(),
            cmake: CmakeOptions::default(),
        }
    }

    /// Sets the macOS and Linux package names.
    pub fn with_packages(mut self, macos: &str, linux: &str) -> Self {
        self.macos_package = macos.to_string();
        self.linux_package = linux.to_string();
        self
    }

    pub fn with_cmake_flags(mut self, flags: &[&str]) -> Self {
        self.cmake.extra_flags = flags.iter().map(|f| f.to_string()).collect();
        self
    }

    #[cfg(test)]
    pub fn with_make_prefix(mut self, prefix: &str) -> Self {
        self.cmake.make_prefix = Some(prefix.to_string());
        self
    }

    /// The package name for `platform`, or `None` when the catalog leaves it empty
    /// (and always `None` on Windows).
    pub fn package_for(&self, platform: Platform) -> Option<&str> {
        let name = match platform {
            Platform::MacOS => self.macos_package.as_str(),
            Platform::Linux => self.linux_package.as_str(),
            Platform::Windows => return None,
        };
        let name = name.trim();
        (!name.is_empty()).then_some(name)
    }

    /// The package-manager strategy is only eligible off Windows, and only when
    /// *both* Unix package names are populated.
    pub fn package_manager_eligible(&self, platform: Platform) -> bool {
        platform != Platform::Windows
            && !self.macos_package.trim().is_empty()
            && !self.linux_package.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eligibility_requires_both_package_names() {
        let both = LibraryDependency::new("glfw", "https://example.invalid/glfw.git")
            .with_packages("glfw", "libglfw3 libglfw3-dev");
        let mac_only = LibraryDependency::new("x", "u").with_packages("x", "");

        assert!(both.package_manager_eligible(Platform::Linux));
        assert!(both.package_manager_eligible(Platform::MacOS));
        assert!(!both.package_manager_eligible(Platform::Windows));
        assert!(!mac_only.package_manager_eligible(Platform::MacOS));
        assert!(!mac_only.package_manager_eligible(Platform::Linux));
    }

    #[test]
    fn package_for_ignores_windows_and_blank_names() {
        let dep = LibraryDependency::new("freetype", "u").with_packages("freetype", "  ");
        assert_eq!(dep.package_for(Platform::MacOS), Some("freetype"));
        assert_eq!(dep.package_for(Platform::Linux), None);
        assert_eq!(dep.package_for(Platform::Windows), None);
    }
}
