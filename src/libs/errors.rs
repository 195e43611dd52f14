// Error taxonomy of the installer and its mapping to process exit codes.
//
// Configuration errors   -> exit 3
// Working directory      -> exit 1
// Build driver missing   -> exit 2
// Planned command failed -> exit 4

use thiserror::Error;

use crate::schemas::execution::CommandOutcome;

#[derive(Debug, Error)]
pub enum InstallerError {
    #[error("unsupported platform '{0}'")]
    UnsupportedPlatform(String),

    #[error("invalid {what} selection: {value}")]
    InvalidSelection { what: &'static str, value: String },

    #[error("interactive prompt failed: {0}")]
    Prompt(String),

    #[error("settings error: {0}")]
    Settings(String),

    #[error("could not prepare dependencies working directory '{path}': {source}")]
    WorkingDirectory {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("required tool '{0}' was not found on PATH")]
    ToolNotFound(String),

    #[error("dependency '{dependency}' failed: `{command}` ({outcome})")]
    CommandFailed {
        dependency: String,
        command: String,
        outcome: CommandOutcome,
    },

    #[error("{} dependencies failed: {}", .0.len(), .0.join(", "))]
    DependenciesFailed(Vec<String>),
}

impl InstallerError {
    /// The process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            InstallerError::WorkingDirectory { .. } => 1,
            InstallerError::ToolNotFound(_) => 2,
            InstallerError::UnsupportedPlatform(_)
            | InstallerError::InvalidSelection { .. }
            | InstallerError::Prompt(_)
            | InstallerError::Settings(_) => 3,
            InstallerError::CommandFailed { .. } | InstallerError::DependenciesFailed(_) => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, InstallerError>;
