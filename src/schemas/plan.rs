// Structured install plans.
//
// A plan is an ordered list of `PlannedCommand`s: program, argument list and
// an optional directory relative to the dependencies working directory. No
// shell is involved in running them, so the planner can be tested by comparing
// values, and the rendered form is only used for logs and failure reports.

use std::fmt;
use std::path::PathBuf;

use crate::schemas::platform::PackageManager;

/// One external command of an install plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedCommand {
    pub program: String,
    pub args: Vec<String>,
    /// Directory to run in, relative to the dependencies working directory.
    /// `None` runs in the working directory itself.
    pub cwd: Option<PathBuf>,
}

impl PlannedCommand {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            args: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Renders the command as a copy-pasteable shell line.
    ///
    /// Arguments with whitespace are double-quoted and CMake cache definitions
    /// (`-DNAME=value`) are rendered with a quoted value, e.g.
    /// `-DCMAKE_CONFIGURATION_TYPES:STRING="Debug"`.
    pub fn render(&self) -> String {
        std::iter::once(quote_arg(&self.program))
            .chain(self.args.iter().map(|a| render_arg(a)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for PlannedCommand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.cwd {
            Some(dir) => write!(f, "(in {}) {}", dir.display(), self.render()),
            None => write!(f, "{}", self.render()),
        }
    }
}

fn render_arg(arg: &str) -> String {
    if let Some(definition) = arg.strip_prefix("-D") {
        if let Some((key, value)) = definition.split_once('=') {
            return format!("-D{}=\"{}\"", key, value.replace('"', "\\\""));
        }
    }
    quote_arg(arg)
}

fn quote_arg(arg: &str) -> String {
    if arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || c == '"') {
        format!("\"{}\"", arg.replace('"', "\\\""))
    } else {
        arg.to_string()
    }
}

/// Which of the two strategies a plan implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallStrategy {
    PackageManager(PackageManager),
    SourceBuild,
}

impl fmt::Display for InstallStrategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InstallStrategy::PackageManager(pm) => write!(f, "package manager ({pm})"),
            InstallStrategy::SourceBuild => write!(f, "source build"),
        }
    }
}

/// The ordered commands for one dependency. Produced fresh by the planner and
/// consumed (moved) by the executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    pub dependency: String,
    pub strategy: InstallStrategy,
    pub commands: Vec<PlannedCommand>,
}

impl InstallPlan {
    /// Rendered command lines, in order.
    pub fn rendered(&self) -> Vec<String> {
        self.commands.iter().map(PlannedCommand::render).collect()
    }
}
