// The closed catalog of libraries the installer provides.
//
// The catalog is built once in `commands::install` and passed by reference to
// the orchestrator. It is never mutated after construction. To add a library,
// register one more `LibraryDependency` in `DependencyCatalog::builtin()` with
// its repository URL, its brew/apt package names (empty string = no
// package-manager path) and its CMake flags.

use crate::schemas::dependency::LibraryDependency;

#[derive(Debug, Clone, Default)]
pub struct DependencyCatalog {
    // Registration order is install order.
    entries: Vec<LibraryDependency>,
}

impl DependencyCatalog {
    /// The libraries the engine build needs, in install order.
    pub fn builtin() -> Self {
        DependencyCatalog::default()
            .register(
                LibraryDependency::new("glfw", "https://github.com/glfw/glfw.git")
                    .with_packages("glfw", "libglfw3 libglfw3-dev")
                    .with_cmake_flags(&[
                        "-DGLFW_BUILD_EXAMPLES=OFF",
                        "-DGLFW_BUILD_TESTS=OFF",
                        "-DGLFW_BUILD_DOCS=OFF",
                    ]),
            )
            .register(LibraryDependency::new(
                "robot2D_ext",
                "https://github.com/Enziferum/robot2D_ext.git",
            ))
            .register(
                LibraryDependency::new("spdlog", "https://github.com/gabime/spdlog.git")
                    .with_cmake_flags(&["-DSPDLOG_BUILD_EXAMPLE=OFF"]),
            )
            .register(
                LibraryDependency::new("freetype", "https://github.com/freetype/freetype.git")
                    .with_packages("freetype", "libfreetype6 libfreetype6-dev"),
            )
    }

    /// Adds an entry. Names are unique keys and every entry needs a URL;
    /// violating either is a bug in the catalog definition, hence the panics.
    pub fn register(mut self, dependency: LibraryDependency) -> Self {
        assert!(
            !dependency.name.trim().is_empty() && !dependency.git_url.trim().is_empty(),
            "catalog entry needs a name and a repository URL: {dependency:?}"
        );
        assert!(
            self.entries.iter().all(|d| d.name != dependency.name),
            "dependency '{}' registered twice",
            dependency.name
        );
        self.entries.push(dependency);
        self
    }

    /// Looks up a registered library.
    ///
    /// # Panics
    /// If `name` is not registered. Callers only ask for names taken from
    /// `names()`; anything else is a programming error.
    pub fn get(&self, name: &str) -> &LibraryDependency {
        self.entries
            .iter()
            .find(|d| d.name == name)
            .unwrap_or_else(|| panic!("dependency '{name}' is not in the catalog"))
    }

    /// Registered names in install order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|d| d.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::platform::Platform;

    #[test]
    fn builtin_catalog_lists_engine_libraries_in_order() {
        let catalog = DependencyCatalog::builtin();
        assert_eq!(catalog.names(), vec!["glfw", "robot2D_ext", "spdlog", "freetype"]);
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn glfw_has_packages_and_spdlog_does_not() {
        let catalog = DependencyCatalog::builtin();
        let glfw = catalog.get("glfw");
        assert_eq!(glfw.linux_package, "libglfw3 libglfw3-dev");
        assert!(glfw.package_manager_eligible(Platform::Linux));

        let spdlog = catalog.get("spdlog");
        assert!(spdlog.macos_package.is_empty() && spdlog.linux_package.is_empty());
        assert!(!spdlog.package_manager_eligible(Platform::MacOS));
    }

    #[test]
    #[should_panic(expected = "not in the catalog")]
    fn unknown_name_is_a_programming_error() {
        DependencyCatalog::builtin().get("boost");
    }

    #[test]
    #[should_panic(expected = "registered twice")]
    fn duplicate_registration_panics() {
        DependencyCatalog::default()
            .register(LibraryDependency::new("a", "u"))
            .register(LibraryDependency::new("a", "v"));
    }
}
