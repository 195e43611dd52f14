// Resolves the Windows toolchain and the build mode.
//
// A non-zero numeric value (from a flag or the settings file) is used as-is;
// otherwise the user is prompted. Numbers outside the table fail with
// `InvalidSelection` in both cases.

use colored::Colorize;

use crate::libs::errors::{InstallerError, Result};
use crate::libs::prompter::Prompter;
use crate::log_debug;
use crate::schemas::toolchain::{BuildMode, CompilerFamily, Toolchain, VsVersion};

/// Picks the compiler family and, for Visual Studio, its version.
///
/// # Arguments
/// * `preset`: The flat `--compiler` index (1 = MinGW, 2..4 = VS2017/2019/2022).
///   `None` prompts for the family first and then for the Visual Studio version.
pub fn select_toolchain(preset: Option<u32>, prompter: &dyn Prompter) -> Result<Toolchain> {
    if let Some(index) = preset {
        log_debug!("[Toolchain] Using compiler index {} from configuration", index);
        return Toolchain::from_index(index).ok_or_else(|| invalid("compiler", index));
    }

    let family_index = prompter.choose("Select a compiler:", &CompilerFamily::CHOICES)?;
    let family = CompilerFamily::from_index(family_index)
        .ok_or_else(|| invalid("compiler", family_index))?;

    let toolchain = match family {
        CompilerFamily::MinGw => Toolchain::MinGw,
        CompilerFamily::VisualStudio => {
            let labels: Vec<&str> = VsVersion::ALL.iter().map(|v| v.label()).collect();
            let version_index = prompter.choose("Select a Visual Studio version:", &labels)?;
            let version = version_index
                .checked_sub(1)
                .and_then(|i| VsVersion::ALL.get(i as usize))
                .copied()
                .ok_or_else(|| invalid("Visual Studio version", version_index))?;
            Toolchain::VisualStudio(version)
        }
    };
    log_debug!("[Toolchain] Selected {}", toolchain.to_string().cyan());
    Ok(toolchain)
}

/// Picks Debug or Release. `None` prompts.
pub fn select_build_mode(preset: Option<u32>, prompter: &dyn Prompter) -> Result<BuildMode> {
    let index = match preset {
        Some(index) => index,
        None => prompter.choose("Select a build configuration:", &BuildMode::CHOICES)?,
    };
    BuildMode::from_index(index).ok_or_else(|| invalid("configuration", index))
}

fn invalid(what: &'static str, value: u32) -> InstallerError {
    InstallerError::InvalidSelection {
        what,
        value: value.to_string(),
    }
}
