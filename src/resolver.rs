//! End-to-end canister environment resolution.
//!
//! Runs the three stages in order (load both registries, select the
//! network, derive the variables) and registers the result with a
//! [`DefinePipeline`] exactly once.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::ResolverConfig;
use crate::environment::{
    DefinePipeline, DefineSet, EnvironmentBuilder, EnvironmentVariableSet, ProvideBinding,
    StaticDefines,
};
use crate::error::Result;
use crate::network::{BuildSignals, NetworkSelector, ResolvedNetwork};
use crate::registry::{FsReader, LoadedRegistries, RegistryKind, RegistryLoader, RegistryReader};

/// Outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// The active network and how it was chosen.
    pub network: ResolvedNetwork,
    /// Which registry served the network.
    pub registry: RegistryKind,
    /// Path of that registry.
    pub registry_path: PathBuf,
    /// Definitions handed to the pipeline.
    pub defines: DefineSet,
}

/// What a pipeline ended up with after a resolution, ready for rendering.
#[derive(Debug, Serialize)]
pub struct ResolutionReport<'a> {
    pub network: &'a str,
    pub network_source: String,
    pub registry: String,
    pub registry_path: String,
    pub variables: &'a EnvironmentVariableSet,
    pub bindings: &'a [ProvideBinding],
}

impl Resolution {
    /// Describe this resolution together with the definitions `defines`
    /// collected from it.
    pub fn report<'a>(&'a self, defines: &'a StaticDefines) -> ResolutionReport<'a> {
        ResolutionReport {
            network: &self.network.name,
            network_source: self.network.source.to_string(),
            registry: self.registry.to_string(),
            registry_path: self.registry_path.display().to_string(),
            variables: defines.variables(),
            bindings: defines.bindings(),
        }
    }
}

/// Wires the registry loader, network selector and environment builder.
///
/// # Example
///
/// ```
/// use canister_env::config::ResolverConfig;
/// use canister_env::environment::StaticDefines;
/// use canister_env::network::BuildSignals;
/// use canister_env::registry::{RegistryLoader, RegistryPaths};
/// use canister_env::resolver::CanisterEnvResolver;
/// use std::io;
/// use std::path::{Path, PathBuf};
///
/// let paths = RegistryPaths {
///     local: PathBuf::from("local.json"),
///     production: PathBuf::from("prod.json"),
/// };
/// let reader = |path: &Path| -> io::Result<String> {
///     match path.to_str() {
///         Some("local.json") => Ok(r#"{"backend": {"local": "X"}}"#.to_string()),
///         _ => Err(io::Error::from(io::ErrorKind::NotFound)),
///     }
/// };
///
/// let resolver = CanisterEnvResolver::with_loader(
///     RegistryLoader::with_reader(paths, reader),
///     &ResolverConfig::default(),
/// );
///
/// let mut pipeline = StaticDefines::new();
/// let resolution = resolver
///     .resolve_into(&BuildSignals::default(), &mut pipeline)
///     .unwrap();
///
/// assert_eq!(resolution.network.name, "local");
/// assert_eq!(pipeline.variables().get("BACKEND_CANISTER_ID"), Some("X"));
/// ```
#[derive(Debug, Clone)]
pub struct CanisterEnvResolver<R = FsReader> {
    loader: RegistryLoader<R>,
    selector: NetworkSelector,
    builder: EnvironmentBuilder,
}

impl CanisterEnvResolver<FsReader> {
    /// Create a resolver reading the registries under `project_root`.
    pub fn new(project_root: &Path, config: &ResolverConfig) -> Self {
        Self::with_loader(
            RegistryLoader::new(config.registry_paths(project_root)),
            config,
        )
    }
}

impl<R: RegistryReader> CanisterEnvResolver<R> {
    /// Create a resolver with a custom registry loader.
    pub fn with_loader(loader: RegistryLoader<R>, config: &ResolverConfig) -> Self {
        Self {
            loader,
            selector: NetworkSelector::from_config(config),
            builder: EnvironmentBuilder::from_config(config),
        }
    }

    /// Get the network selector.
    pub fn selector(&self) -> &NetworkSelector {
        &self.selector
    }

    /// Get the environment builder.
    pub fn builder(&self) -> &EnvironmentBuilder {
        &self.builder
    }

    /// Attempt both registries.
    pub fn load_registries(&self) -> LoadedRegistries {
        self.loader.load()
    }

    /// Resolve definitions without registering them anywhere.
    ///
    /// # Errors
    ///
    /// Fails when the registry serving the selected network is absent or
    /// malformed.
    pub fn resolve(&self, signals: &BuildSignals) -> Result<Resolution> {
        let registries = self.loader.load();
        let network = self.selector.select(signals);
        tracing::debug!("Selected network '{}' ({})", network.name, network.source);

        let registry = self.builder.registry_kind(&network.name);
        let registry_path = registries.slot(registry).path().to_path_buf();
        let defines = self.builder.build(&network.name, signals, &registries)?;

        Ok(Resolution {
            network,
            registry,
            registry_path,
            defines,
        })
    }

    /// Resolve and register the definitions with `pipeline` once.
    pub fn resolve_into<P: DefinePipeline + ?Sized>(
        &self,
        signals: &BuildSignals,
        pipeline: &mut P,
    ) -> Result<Resolution> {
        let resolution = self.resolve(signals)?;
        resolution.defines.register_with(pipeline)?;
        Ok(resolution)
    }
}
