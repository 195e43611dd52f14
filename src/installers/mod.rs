// Command builders for the two install strategies.
//
// Each module only *prepares* `PlannedCommand`s; running them is the job of
// `libs::command_executor`. The planner picks which builder to use.

/// `brew install` for the package-manager strategy on macOS.
pub(crate) mod brew;

/// `apt-get install -y` for the package-manager strategy on Linux.
pub(crate) mod apt;

/// Clone, configure, build and install steps of the source-build strategy.
pub(crate) mod source_build;
