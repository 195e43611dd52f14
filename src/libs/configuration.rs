// Turns CLI flags, the settings file and (if needed) interactive answers into
// the read-only configuration of a run.
//
// Precedence for every value: CLI flag > settings file > default/prompt.
// A numeric value of 0 means "unset" at every level.

use std::path::PathBuf;
use std::time::Duration;

use colored::Colorize;

use crate::cli::Cli;
use crate::libs::errors::Result;
use crate::libs::install_planner::PlanContext;
use crate::libs::paths::{DEFAULT_WORKING_DIR, expand_path};
use crate::libs::prompter::Prompter;
use crate::libs::toolchain_selector::{select_build_mode, select_toolchain};
use crate::schemas::platform::Platform;
use crate::schemas::settings::{FailurePolicy, Settings};
use crate::{log_debug, log_info};

/// Everything the orchestrator needs, resolved once at start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub plan_context: PlanContext,
    /// Not yet created; the orchestrator does that before planning.
    pub working_dir: PathBuf,
    pub failure_policy: FailurePolicy,
    pub command_timeout: Option<Duration>,
    pub dry_run: bool,
}

/// Resolves the toolchain (Windows only) and then the build mode, prompting
/// through `prompter` for whichever is still unset.
pub fn resolve_config(
    cli: &Cli,
    settings: &Settings,
    platform: Platform,
    prompter: &dyn Prompter,
) -> Result<ResolvedConfig> {
    let toolchain = if platform == Platform::Windows {
        let toolchain = select_toolchain(first_set(cli.compiler, settings.compiler), prompter)?;
        log_info!("[Config] Toolchain: {}", toolchain.to_string().cyan());
        Some(toolchain)
    } else {
        if first_set(cli.compiler, settings.compiler).is_some() {
            log_debug!("[Config] Compiler selection ignored on {}", platform);
        }
        None
    };

    let build_mode =
        select_build_mode(first_set(cli.configuration, settings.configuration), prompter)?;
    log_info!("[Config] Build configuration: {}", build_mode.to_string().cyan());

    let plan_context = PlanContext::new(platform, toolchain, build_mode, settings.use_sudo)?;

    let working_dir = expand_path(
        cli.working_dir
            .as_deref()
            .or(settings.working_dir.as_deref())
            .unwrap_or(DEFAULT_WORKING_DIR),
    )?;

    let failure_policy = if cli.keep_going {
        FailurePolicy::Continue
    } else {
        settings.failure_policy
    };

    let command_timeout =
        first_set(cli.timeout, settings.command_timeout_secs).map(Duration::from_secs);

    Ok(ResolvedConfig {
        plan_context,
        working_dir,
        failure_policy,
        command_timeout,
        dry_run: cli.dry_run,
    })
}

/// First non-zero value, CLI before settings.
fn first_set<T>(cli: Option<T>, settings: Option<T>) -> Option<T>
where
    T: Copy + Default + PartialEq,
{
    let set = |v: &T| *v != T::default();
    cli.filter(set).or(settings.filter(set))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::errors::InstallerError;
    use crate::libs::prompter::fakes::ScriptedPrompter;
    use crate::schemas::toolchain::{BuildMode, Toolchain, VsVersion};
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("install-deps").chain(args.iter().copied()))
    }

    #[test]
    fn flags_resolve_without_prompting() {
        let prompter = ScriptedPrompter::default();
        let config = resolve_config(
            &cli(&["-c", "1", "--compiler", "3"]),
            &Settings::default(),
            Platform::Windows,
            &prompter,
        )
        .unwrap();

        assert_eq!(
            config.plan_context.toolchain(),
            Some(Toolchain::VisualStudio(VsVersion::Vs2019))
        );
        assert_eq!(config.plan_context.build_mode(), BuildMode::Debug);
        assert_eq!(config.working_dir, PathBuf::from("deps"));
        assert_eq!(config.failure_policy, FailurePolicy::Abort);
        assert!(prompter.asked.borrow().is_empty());
    }

    #[test]
    fn zero_means_prompt() {
        let prompter = ScriptedPrompter::answering(&[1, 2]);
        let config = resolve_config(
            &cli(&["-c", "0", "--compiler", "0"]),
            &Settings::default(),
            Platform::Windows,
            &prompter,
        )
        .unwrap();

        assert_eq!(config.plan_context.toolchain(), Some(Toolchain::MinGw));
        assert_eq!(config.plan_context.build_mode(), BuildMode::Release);
        // Toolchain is asked before the build configuration.
        let asked = prompter.asked.borrow();
        assert!(asked[0].contains("compiler"));
        assert!(asked[1].contains("configuration"));
    }

    #[test]
    fn compiler_is_not_asked_off_windows() {
        let prompter = ScriptedPrompter::answering(&[2]);
        let config =
            resolve_config(&cli(&[]), &Settings::default(), Platform::Linux, &prompter).unwrap();
        assert_eq!(config.plan_context.toolchain(), None);
        assert_eq!(prompter.asked.borrow().len(), 1);
    }

    #[test]
    fn settings_fill_in_missing_flags_and_flags_win() {
        let settings = Settings {
            configuration: Some(1),
            working_dir: Some("third_party".into()),
            failure_policy: FailurePolicy::Continue,
            command_timeout_secs: Some(600),
            ..Settings::default()
        };
        let prompter = ScriptedPrompter::default();

        let from_settings =
            resolve_config(&cli(&[]), &settings, Platform::MacOS, &prompter).unwrap();
        assert_eq!(from_settings.plan_context.build_mode(), BuildMode::Debug);
        assert_eq!(from_settings.working_dir, PathBuf::from("third_party"));
        assert_eq!(from_settings.failure_policy, FailurePolicy::Continue);
        assert_eq!(from_settings.command_timeout, Some(Duration::from_secs(600)));

        let overridden = resolve_config(
            &cli(&["-c", "2", "--working-dir", "ext", "--timeout", "0"]),
            &settings,
            Platform::MacOS,
            &prompter,
        )
        .unwrap();
        assert_eq!(overridden.plan_context.build_mode(), BuildMode::Release);
        assert_eq!(overridden.working_dir, PathBuf::from("ext"));
        // 0 is "unset" here too, so the settings timeout still applies.
        assert_eq!(overridden.command_timeout, Some(Duration::from_secs(600)));
    }

    #[test]
    fn zero_timeout_everywhere_means_no_timeout() {
        let settings = Settings {
            configuration: Some(2),
            command_timeout_secs: Some(0),
            ..Settings::default()
        };
        let prompter = ScriptedPrompter::default();

        let config =
            resolve_config(&cli(&["--timeout", "0"]), &settings, Platform::Linux, &prompter).unwrap();
        assert_eq!(config.command_timeout, None);

        let from_cli =
            resolve_config(&cli(&["--timeout", "30"]), &settings, Platform::Linux, &prompter).unwrap();
        assert_eq!(from_cli.command_timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn invalid_configuration_value_is_a_configuration_error() {
        let err = resolve_config(
            &cli(&["-c", "5"]),
            &Settings::default(),
            Platform::Linux,
            &ScriptedPrompter::default(),
        )
        .unwrap_err();
        assert!(matches!(err, InstallerError::InvalidSelection { .. }));
        assert_eq!(err.exit_code(), 3);
    }
}
