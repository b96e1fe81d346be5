//! Configuration schema for `.canister-env.yml`.
//!
//! Every field has a default, so an absent or empty file yields the
//! conventional dfx layout: `.dfx/local/canister_ids.json` for the local
//! replica, `canister_ids.json` for mainnet, `DFX_NETWORK` and `NODE_ENV`
//! as the environment signals.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::environment::ProvideBinding;
use crate::registry::RegistryPaths;

/// Root configuration structure for `.canister-env.yml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    /// Local registry path, relative to the project root
    pub local_registry: PathBuf,

    /// Production registry path, relative to the project root
    pub production_registry: PathBuf,

    /// Network name reserved for local development
    pub local_network: String,

    /// Network name reserved for the production deployment target
    pub production_network: String,

    /// Environment variable that overrides the active network
    pub network_var: String,

    /// Environment variable carrying the build mode
    pub mode_var: String,

    /// Build mode value that selects the production network
    pub production_mode: String,

    /// Build mode used for the static mode variable when none is set
    pub default_mode: String,

    /// Module-provider bindings registered alongside the variables
    pub bindings: Vec<ProvideBinding>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            local_registry: default_local_registry(),
            production_registry: PathBuf::from("canister_ids.json"),
            local_network: "local".to_string(),
            production_network: "ic".to_string(),
            network_var: "DFX_NETWORK".to_string(),
            mode_var: "NODE_ENV".to_string(),
            production_mode: "production".to_string(),
            default_mode: "development".to_string(),
            bindings: default_bindings(),
        }
    }
}

impl ResolverConfig {
    /// Resolve the registry locations against a project root.
    ///
    /// Absolute paths in the config are kept as-is.
    pub fn registry_paths(&self, project_root: &Path) -> RegistryPaths {
        RegistryPaths {
            local: project_root.join(&self.local_registry),
            production: project_root.join(&self.production_registry),
        }
    }
}

fn default_local_registry() -> PathBuf {
    PathBuf::from(".dfx").join("local").join("canister_ids.json")
}

/// Polyfills browser bundles need to talk to a replica.
fn default_bindings() -> Vec<ProvideBinding> {
    vec![
        ProvideBinding::with_export("Buffer", "buffer/", "Buffer"),
        ProvideBinding::module("process", "process/browser"),
    ]
}
