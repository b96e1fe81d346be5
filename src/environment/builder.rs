//! Derivation of build variables from the selected registry.

use serde::Serialize;

use super::pipeline::DefinePipeline;
use super::variables::{canister_variable_name, EnvironmentVariableSet, ProvideBinding};
use crate::config::ResolverConfig;
use crate::error::{CanisterEnvError, Result};
use crate::network::{BuildSignals, NetworkSelector};
use crate::registry::{LoadedRegistries, RegistryKind, RegistrySlot};

/// Everything registered with the host pipeline for one build.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefineSet {
    /// One `<NAME>_CANISTER_ID` variable per resolvable canister.
    pub canisters: EnvironmentVariableSet,
    /// Fixed variables such as the build mode.
    pub statics: EnvironmentVariableSet,
    /// Module-provider bindings.
    pub bindings: Vec<ProvideBinding>,
}

impl DefineSet {
    /// Static and canister variables combined; canister values win on
    /// collisions.
    pub fn variables(&self) -> EnvironmentVariableSet {
        let mut all = self.statics.clone();
        all.merge(&self.canisters);
        all
    }

    /// Hand the definitions to the host pipeline in a single call.
    pub fn register_with<P: DefinePipeline + ?Sized>(&self, pipeline: &mut P) -> Result<()> {
        pipeline.register(&self.variables(), &self.bindings)
    }
}

/// Derives the build's [`DefineSet`] from the loaded registries.
#[derive(Debug, Clone)]
pub struct EnvironmentBuilder {
    selector: NetworkSelector,
    mode_var: String,
    default_mode: String,
    bindings: Vec<ProvideBinding>,
}

impl Default for EnvironmentBuilder {
    fn default() -> Self {
        Self::from_config(&ResolverConfig::default())
    }
}

impl EnvironmentBuilder {
    /// Create a builder from resolver configuration.
    pub fn from_config(config: &ResolverConfig) -> Self {
        Self {
            selector: NetworkSelector::from_config(config),
            mode_var: config.mode_var.clone(),
            default_mode: config.default_mode.clone(),
            bindings: config.bindings.clone(),
        }
    }

    /// Which registry serves `network`: production for the production
    /// network, local for everything else.
    pub fn registry_kind(&self, network: &str) -> RegistryKind {
        if self.selector.is_production(network) {
            RegistryKind::Production
        } else {
            RegistryKind::Local
        }
    }

    /// Derive one variable per canister that has an identifier on `network`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryUnavailable` if the registry serving `network` was
    /// not loaded, and `InvalidRegistry` if it has the wrong shape.
    ///
    /// # Example
    ///
    /// ```
    /// use canister_env::environment::EnvironmentBuilder;
    /// use canister_env::registry::{LoadedRegistries, Registry, RegistrySlot};
    /// use serde_json::json;
    /// use std::path::PathBuf;
    ///
    /// let registries = LoadedRegistries {
    ///     local: RegistrySlot::Present(Registry::new(
    ///         "local.json",
    ///         json!({"a": {"local": "X"}, "b": {"ic": "Y"}}),
    ///     )),
    ///     production: RegistrySlot::Absent { path: PathBuf::from("prod.json") },
    /// };
    ///
    /// let vars = EnvironmentBuilder::default()
    ///     .canister_variables("local", &registries)
    ///     .unwrap();
    /// assert_eq!(vars.len(), 1);
    /// assert_eq!(vars.get("A_CANISTER_ID"), Some("X"));
    /// ```
    pub fn canister_variables(
        &self,
        network: &str,
        registries: &LoadedRegistries,
    ) -> Result<EnvironmentVariableSet> {
        let kind = self.registry_kind(network);

        let registry = match registries.slot(kind) {
            RegistrySlot::Present(registry) => registry,
            RegistrySlot::Absent { path } => {
                return Err(CanisterEnvError::RegistryUnavailable {
                    network: network.to_string(),
                    path: path.clone(),
                });
            }
        };

        let mut vars = EnvironmentVariableSet::new();
        for (canister, id) in registry.identifiers_for(network)? {
            let name = canister_variable_name(canister);
            if let Some(previous) = vars.insert(name.as_str(), id) {
                tracing::warn!(
                    "Canister '{}' maps to {} already set to {}; using {}",
                    canister,
                    name,
                    previous,
                    id
                );
            }
        }

        tracing::debug!(
            "Derived {} canister variables for network '{}' from {}",
            vars.len(),
            network,
            registry.source().display()
        );

        Ok(vars)
    }

    /// The fixed build-mode variable, taken from the signal when set and
    /// non-empty.
    pub fn static_variables(&self, signals: &BuildSignals) -> EnvironmentVariableSet {
        let mode = signals
            .build_mode
            .as_deref()
            .filter(|mode| !mode.is_empty())
            .unwrap_or(&self.default_mode);

        let mut vars = EnvironmentVariableSet::new();
        vars.insert(self.mode_var.as_str(), mode);
        vars
    }

    /// Build the complete define set for `network`.
    pub fn build(
        &self,
        network: &str,
        signals: &BuildSignals,
        registries: &LoadedRegistries,
    ) -> Result<DefineSet> {
        Ok(DefineSet {
            canisters: self.canister_variables(network, registries)?,
            statics: self.static_variables(signals),
            bindings: self.bindings.clone(),
        })
    }
}
