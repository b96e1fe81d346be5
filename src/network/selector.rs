//! Active network selection.
//!
//! Resolves the network using the priority chain:
//! 1. Explicit override signal
//! 2. Production build mode selects the production network
//! 3. Fallback to the local network

use std::fmt;

use super::signals::BuildSignals;
use crate::config::ResolverConfig;

/// How the network was determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkSource {
    /// Explicitly set via the override signal.
    Override,
    /// Selected because the build mode is production.
    BuildMode(String),
    /// Fallback to the local network.
    Default,
}

impl fmt::Display for NetworkSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Override => write!(f, "override"),
            Self::BuildMode(mode) => write!(f, "build mode '{}'", mode),
            Self::Default => write!(f, "default"),
        }
    }
}

/// A resolved network with its name and how it was determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNetwork {
    /// The network name (e.g., "local", "ic", or a custom deployment).
    pub name: String,
    /// How this network was determined.
    pub source: NetworkSource,
}

/// Chooses the active network from [`BuildSignals`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkSelector {
    local_network: String,
    production_network: String,
    production_mode: String,
}

impl Default for NetworkSelector {
    fn default() -> Self {
        Self::from_config(&ResolverConfig::default())
    }
}

impl NetworkSelector {
    /// Create a selector with explicit reserved names.
    pub fn new(local_network: &str, production_network: &str, production_mode: &str) -> Self {
        Self {
            local_network: local_network.to_string(),
            production_network: production_network.to_string(),
            production_mode: production_mode.to_string(),
        }
    }

    /// Create a selector from resolver configuration.
    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(
            &config.local_network,
            &config.production_network,
            &config.production_mode,
        )
    }

    /// Check whether `network` is the production network.
    pub fn is_production(&self, network: &str) -> bool {
        network == self.production_network
    }

    /// Resolve the active network.
    ///
    /// # Example
    ///
    /// ```
    /// use canister_env::network::{BuildSignals, NetworkSelector, NetworkSource};
    ///
    /// let selector = NetworkSelector::default();
    ///
    /// let resolved = selector.select(&BuildSignals::new(None, Some("production")));
    /// assert_eq!(resolved.name, "ic");
    ///
    /// let resolved = selector.select(&BuildSignals::new(Some("staging"), Some("production")));
    /// assert_eq!(resolved.name, "staging");
    /// assert_eq!(resolved.source, NetworkSource::Override);
    /// ```
    pub fn select(&self, signals: &BuildSignals) -> ResolvedNetwork {
        // 1. Explicit override
        if let Some(name) = signals.network_override.as_deref().filter(|n| !n.is_empty()) {
            return ResolvedNetwork {
                name: name.to_string(),
                source: NetworkSource::Override,
            };
        }

        // 2. Production build mode
        if let Some(mode) = &signals.build_mode {
            if *mode == self.production_mode {
                return ResolvedNetwork {
                    name: self.production_network.clone(),
                    source: NetworkSource::BuildMode(mode.clone()),
                };
            }
        }

        // 3. Fallback
        ResolvedNetwork {
            name: self.local_network.clone(),
            source: NetworkSource::Default,
        }
    }
}
