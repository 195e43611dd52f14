// Command-line surface of `install-deps`.
//
// A single entry point: every flag is optional, missing build configuration
// or compiler values are asked for interactively.

use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "install-deps")]
#[command(version, about = "Install the native libraries the engine build depends on", long_about = None)]
pub struct Cli {
    /// Build configuration: 1 = Debug, 2 = Release, 0 = ask
    #[arg(short = 'c', long, value_name = "INT")]
    pub configuration: Option<u32>,

    /// Windows compiler: 1 = MinGW, 2 = VS2017, 3 = VS2019, 4 = VS2022, 0 = ask
    #[arg(long, value_name = "INT")]
    pub compiler: Option<u32>,

    /// YAML settings file [default: ~/.install-deps/settings.yaml]
    #[arg(long, value_name = "PATH", env = "INSTALL_DEPS_SETTINGS")]
    pub settings: Option<String>,

    /// Directory the sources are cloned and built in [default: deps]
    #[arg(long, value_name = "PATH")]
    pub working_dir: Option<String>,

    /// Keep installing the remaining dependencies after one fails
    #[arg(long)]
    pub keep_going: bool,

    /// Kill any single command that runs longer than this many seconds, 0 = unset
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Print the install plans without running anything
    #[arg(long)]
    pub dry_run: bool,

    /// Turn debugging information on
    #[arg(short, long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_short_and_long_flags() {
        let cli = Cli::parse_from(["install-deps", "-c", "2", "--compiler", "4", "--keep-going"]);
        assert_eq!(cli.configuration, Some(2));
        assert_eq!(cli.compiler, Some(4));
        assert!(cli.keep_going);
        assert!(!cli.dry_run);
    }

    #[test]
    fn non_numeric_configuration_is_rejected() {
        assert!(Cli::try_parse_from(["install-deps", "--configuration", "release"]).is_err());
    }
}
