// Schema of the optional YAML settings file (`~/.install-deps/settings.yaml`).
//
// Every key is optional; CLI flags override whatever is set here.
//
// ```yaml
// configuration: 2        # 1 = Debug, 2 = Release
// compiler: 4             # Windows only: 1 = MinGW, 2/3/4 = VS2017/2019/2022
// working_dir: ~/deps
// failure_policy: continue
// command_timeout_secs: 1800
// use_sudo: false
// debug: true
// ```

use serde::Deserialize;

/// What the orchestrator does after a dependency fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop at the first failed dependency.
    #[default]
    Abort,
    /// Process every dependency, then fail the run if any failed.
    Continue,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub configuration: Option<u32>,
    pub compiler: Option<u32>,
    pub working_dir: Option<String>,
    pub failure_policy: FailurePolicy,
    pub command_timeout_secs: Option<u64>,
    pub use_sudo: bool,
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            configuration: None,
            compiler: None,
            working_dir: None,
            failure_policy: FailurePolicy::Abort,
            command_timeout_secs: None,
            use_sudo: true,
            debug: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let settings: Settings = serde_yaml::from_str("configuration: 2\n").unwrap();
        assert_eq!(settings.configuration, Some(2));
        assert_eq!(settings.failure_policy, FailurePolicy::Abort);
        assert!(settings.use_sudo);
    }

    #[test]
    fn parses_every_key() {
        let yaml = "configuration: 1\ncompiler: 3\nworking_dir: ~/deps\nfailure_policy: continue\ncommand_timeout_secs: 60\nuse_sudo: false\ndebug: true\n";
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.compiler, Some(3));
        assert_eq!(settings.working_dir.as_deref(), Some("~/deps"));
        assert_eq!(settings.failure_policy, FailurePolicy::Continue);
        assert_eq!(settings.command_timeout_secs, Some(60));
        assert!(!settings.use_sudo);
        assert!(settings.debug);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(serde_yaml::from_str::<Settings>("compilr: 2\n").is_err());
    }
}
