// Executable presence checks.
//
// The planner and the orchestrator never spawn a process to find out whether a
// tool exists; they ask a `ToolProbe`. The console build uses `PathProbe`,
// tests substitute a fixed set of available programs.

use crate::log_debug;

/// Answers "is this program runnable on the host?".
pub trait ToolProbe {
    fn is_available(&self, program: &str) -> bool;
}

/// Looks programs up on `PATH` (honouring `PATHEXT` on Windows).
#[derive(Debug, Default, Clone, Copy)]
pub struct PathProbe;

impl ToolProbe for PathProbe {
    fn is_available(&self, program: &str) -> bool {
        match which::which(program) {
            Ok(path) => {
                log_debug!("[Probe] Found '{}' at {}", program, path.display());
                true
            }
            Err(e) => {
                log_debug!("[Probe] '{}' not found on PATH: {}", program, e);
                false
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod fakes {
    use super::ToolProbe;
    use std::collections::HashSet;

    /// A probe that reports exactly the listed programs as available.
    pub struct FakeProbe {
        available: HashSet<String>,
    }

    impl FakeProbe {
        pub fn with(programs: &[&str]) -> Self {
            Self {
                available: programs.iter().map(|p| p.to_string()).collect(),
            }
        }

        /// Everything the installer may look for.
        pub fn all() -> Self {
            Self::with(&["brew", "apt-get", "cmake", "git"])
        }
    }

    impl ToolProbe for FakeProbe {
        fn is_available(&self, program: &str) -> bool {
            self.available.contains(program)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_probe_rejects_nonexistent_program() {
        assert!(!PathProbe.is_available("definitely-not-a-real-program-4f2a9c"));
    }
}
