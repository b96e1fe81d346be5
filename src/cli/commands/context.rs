//! Shared command context.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::{load_config, ResolverConfig};
use crate::error::Result;
use crate::network::BuildSignals;

/// State every command needs: where the project is, which config to use,
/// and where environment signals come from.
#[derive(Debug, Clone)]
pub struct CommandContext {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    env_overrides: Option<HashMap<String, String>>,
}

impl CommandContext {
    /// Create a context reading signals from the process environment.
    pub fn new(project_root: &Path, config_path: Option<&Path>) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            env_overrides: None,
        }
    }

    /// Replace the process environment with fixed variables (for testing).
    pub fn with_env(mut self, vars: &[(&str, &str)]) -> Self {
        self.env_overrides = Some(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Load the resolver configuration.
    pub fn load_config(&self) -> Result<ResolverConfig> {
        load_config(&self.project_root, self.config_path.as_deref())
    }

    /// Collect build signals, with command-line flags taking precedence.
    pub fn signals(
        &self,
        config: &ResolverConfig,
        network: Option<&str>,
        mode: Option<&str>,
    ) -> BuildSignals {
        let from_env = match &self.env_overrides {
            Some(vars) => BuildSignals::from_env_with(config, |key| {
                vars.get(key).cloned().ok_or(std::env::VarError::NotPresent)
            }),
            None => BuildSignals::from_env(config),
        };
        from_env.with_flags(network, mode)
    }
}
