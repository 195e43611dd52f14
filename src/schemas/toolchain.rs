// Build configuration enums: build mode, Visual Studio generations and the
// Windows toolchain pair.
//
// Every value here renders to an exact vendor token (CMake generator names,
// configuration names). A wrong token is not caught at runtime; CMake simply
// fails later, so the mappings are covered by tests below.

use std::fmt;

/// Build configuration applied uniformly to every dependency in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    Debug,
    Release,
}

impl BuildMode {
    /// Labels shown by the interactive prompt, in CLI index order (1-based).
    pub const CHOICES: [&'static str; 2] = ["Debug", "Release"];

    /// Maps the numeric CLI/settings value: 1 = Debug, 2 = Release.
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            1 => Some(BuildMode::Debug),
            2 => Some(BuildMode::Release),
            _ => None,
        }
    }

    /// The CMake configuration name (`CMAKE_BUILD_TYPE`, `--config`).
    pub fn as_cmake(self) -> &'static str {
        match self {
            BuildMode::Debug => "Debug",
            BuildMode::Release => "Release",
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_cmake())
    }
}

/// Supported Visual Studio generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VsVersion {
    Vs2017,
    Vs2019,
    Vs2022,
}

impl VsVersion {
    /// Versions in prompt order (1-based).
    pub const ALL: [VsVersion; 3] = [VsVersion::Vs2017, VsVersion::Vs2019, VsVersion::Vs2022];

    /// The literal CMake generator name for this generation.
    pub fn generator(self) -> &'static str {
        match self {
            VsVersion::Vs2017 => "Visual Studio 15 2017",
            VsVersion::Vs2019 => "Visual Studio 16 2019",
            VsVersion::Vs2022 => "Visual Studio 17 2022",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VsVersion::Vs2017 => "Visual Studio 2017",
            VsVersion::Vs2019 => "Visual Studio 2019",
            VsVersion::Vs2022 => "Visual Studio 2022",
        }
    }
}

/// Compiler family offered by the first interactive prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompilerFamily {
    MinGw,
    VisualStudio,
}

impl CompilerFamily {
    pub const CHOICES: [&'static str; 2] = ["MinGW", "Visual Studio"];

    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            1 => Some(CompilerFamily::MinGw),
            2 => Some(CompilerFamily::VisualStudio),
            _ => None,
        }
    }
}

/// A resolved Windows toolchain.
///
/// The Visual Studio variant carries its version, so a Visual Studio
/// toolchain without a concrete version cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toolchain {
    MinGw,
    VisualStudio(VsVersion),
}

impl Toolchain {
    /// Maps the flat `--compiler` index:
    /// 1 = MinGW, 2 = VS2017, 3 = VS2019, 4 = VS2022.
    /// 0 means "unset" and is handled by the caller before this is reached.
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            1 => Some(Toolchain::MinGw),
            2 => Some(Toolchain::VisualStudio(VsVersion::Vs2017)),
            3 => Some(Toolchain::VisualStudio(VsVersion::Vs2019)),
            4 => Some(Toolchain::VisualStudio(VsVersion::Vs2022)),
            _ => None,
        }
    }

    /// CMake generator used for source builds with this toolchain.
    pub fn generator(self) -> &'static str {
        match self {
            Toolchain::MinGw => "MinGW Makefiles",
            Toolchain::VisualStudio(version) => version.generator(),
        }
    }

    /// Visual Studio generators are multi-config: the build mode is passed
    /// at configure time via `CMAKE_CONFIGURATION_TYPES` and at build time via `--config`.
    pub fn is_multi_config(self) -> bool {
        matches!(self, Toolchain::VisualStudio(_))
    }
}

impl fmt::Display for Toolchain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Toolchain::MinGw => write!(f, "MinGW"),
            Toolchain::VisualStudio(version) => write!(f, "{}", version.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visual_studio_generators_render_exact_tokens() {
        assert_eq!(VsVersion::Vs2017.generator(), "Visual Studio 15 2017");
        assert_eq!(VsVersion::Vs2019.generator(), "Visual Studio 16 2019");
        assert_eq!(VsVersion::Vs2022.generator(), "Visual Studio 17 2022");
    }

    #[test]
    fn compiler_index_table() {
        assert_eq!(Toolchain::from_index(0), None);
        assert_eq!(Toolchain::from_index(1), Some(Toolchain::MinGw));
        assert_eq!(
            Toolchain::from_index(4),
            Some(Toolchain::VisualStudio(VsVersion::Vs2022))
        );
        assert_eq!(Toolchain::from_index(5), None);
        assert_eq!(Toolchain::from_index(3).map(Toolchain::generator), Some("Visual Studio 16 2019"));
    }

    #[test]
    fn build_mode_index_table() {
        assert_eq!(BuildMode::from_index(1), Some(BuildMode::Debug));
        assert_eq!(BuildMode::from_index(2), Some(BuildMode::Release));
        assert_eq!(BuildMode::from_index(3), None);
        assert_eq!(BuildMode::Release.as_cmake(), "Release");
    }

    #[test]
    fn only_visual_studio_is_multi_config() {
        assert!(!Toolchain::MinGw.is_multi_config());
        assert!(Toolchain::VisualStudio(VsVersion::Vs2017).is_multi_config());
        assert_eq!(CompilerFamily::from_index(2), Some(CompilerFamily::VisualStudio));
    }
}
