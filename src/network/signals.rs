//! External build signals.
//!
//! All process-environment reads for network selection happen here, so
//! [`NetworkSelector`](super::NetworkSelector) stays a pure function.

use crate::config::ResolverConfig;

/// The two inputs network selection depends on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSignals {
    /// Explicit network name (e.g. from `DFX_NETWORK`).
    pub network_override: Option<String>,
    /// Build mode (e.g. from `NODE_ENV`).
    pub build_mode: Option<String>,
}

impl BuildSignals {
    /// Create signals from explicit values.
    pub fn new(network_override: Option<&str>, build_mode: Option<&str>) -> Self {
        Self {
            network_override: network_override.map(str::to_string),
            build_mode: build_mode.map(str::to_string),
        }
    }

    /// Read signals from the process environment using the variable names
    /// in `config`.
    pub fn from_env(config: &ResolverConfig) -> Self {
        Self::from_env_with(config, |key| std::env::var(key))
    }

    /// Read signals with a custom env var lookup (for testing).
    ///
    /// Empty values are treated as unset.
    pub fn from_env_with<F>(config: &ResolverConfig, env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let read = |key: &str| env_fn(key).ok().filter(|value| !value.is_empty());

        Self {
            network_override: read(&config.network_var),
            build_mode: read(&config.mode_var),
        }
    }

    /// Apply command-line values on top, keeping environment values where
    /// no flag was given. Empty flags count as not given.
    pub fn with_flags(mut self, network: Option<&str>, mode: Option<&str>) -> Self {
        if let Some(network) = network.filter(|v| !v.is_empty()) {
            self.network_override = Some(network.to_string());
        }
        if let Some(mode) = mode.filter(|v| !v.is_empty()) {
            self.build_mode = Some(mode.to_string());
        }
        self
    }
}
