//! Registry file loading.
//!
//! Both registry files are attempted on every load, whichever network ends
//! up being selected. A file that is missing or not valid JSON produces a
//! warning and an absent slot; it never stops the other file from loading.

use std::io;
use std::path::{Path, PathBuf};

use super::model::{LoadedRegistries, Registry, RegistryKind, RegistrySlot};
use crate::error::{CanisterEnvError, Result};

/// Source of registry file contents.
///
/// Implemented for the filesystem by [`FsReader`] and for any
/// `Fn(&Path) -> io::Result<String>` closure, which lets tests feed
/// contents without touching disk.
pub trait RegistryReader {
    /// Read the full contents of `path`.
    fn read(&self, path: &Path) -> io::Result<String>;
}

/// Reads registry files from the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl RegistryReader for FsReader {
    fn read(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

impl<F> RegistryReader for F
where
    F: Fn(&Path) -> io::Result<String>,
{
    fn read(&self, path: &Path) -> io::Result<String> {
        self(path)
    }
}

/// Locations of the two registry files.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryPaths {
    /// Written by `dfx deploy` against a local replica.
    pub local: PathBuf,
    /// Committed alongside the project for mainnet deployments.
    pub production: PathBuf,
}

impl RegistryPaths {
    /// Get the path for a registry kind.
    pub fn get(&self, kind: RegistryKind) -> &Path {
        match kind {
            RegistryKind::Local => &self.local,
            RegistryKind::Production => &self.production,
        }
    }
}

/// Loads the local and production registries.
///
/// # Example
///
/// ```
/// use canister_env::registry::{RegistryLoader, RegistryPaths};
/// use std::io;
/// use std::path::{Path, PathBuf};
///
/// let paths = RegistryPaths {
///     local: PathBuf::from("local.json"),
///     production: PathBuf::from("prod.json"),
/// };
/// let reader = |path: &Path| -> io::Result<String> {
///     if path == Path::new("local.json") {
///         Ok(r#"{"backend": {"local": "X"}}"#.to_string())
///     } else {
///         Err(io::Error::from(io::ErrorKind::NotFound))
///     }
/// };
///
/// let loaded = RegistryLoader::with_reader(paths, reader).load();
/// assert!(loaded.local.is_present());
/// assert!(!loaded.production.is_present());
/// ```
#[derive(Debug, Clone)]
pub struct RegistryLoader<R = FsReader> {
    paths: RegistryPaths,
    reader: R,
}

impl RegistryLoader<FsReader> {
    /// Create a loader that reads from the filesystem.
    pub fn new(paths: RegistryPaths) -> Self {
        Self::with_reader(paths, FsReader)
    }
}

impl<R: RegistryReader> RegistryLoader<R> {
    /// Create a loader with a custom reader.
    pub fn with_reader(paths: RegistryPaths, reader: R) -> Self {
        Self { paths, reader }
    }

    /// Attempt both registries.
    pub fn load(&self) -> LoadedRegistries {
        LoadedRegistries {
            local: self.load_slot(RegistryKind::Local),
            production: self.load_slot(RegistryKind::Production),
        }
    }

    /// Attempt a single registry, turning any failure into an absent slot.
    pub fn load_slot(&self, kind: RegistryKind) -> RegistrySlot {
        let path = self.paths.get(kind);

        match self.read_registry(path) {
            Ok(registry) => {
                tracing::debug!("Loaded {} canister registry from {}", kind, path.display());
                RegistrySlot::Present(registry)
            }
            Err(e) => {
                let fallback = match kind {
                    RegistryKind::Local => RegistryKind::Production,
                    RegistryKind::Production => RegistryKind::Local,
                };
                tracing::warn!("No {} canister registry: {}. Continuing with {}", kind, e, fallback);
                RegistrySlot::Absent {
                    path: path.to_path_buf(),
                }
            }
        }
    }

    /// Read and parse one registry file.
    ///
    /// # Errors
    ///
    /// Returns `RegistryNotFound` if the file doesn't exist.
    /// Returns `RegistryParseError` if the content is not JSON.
    pub fn read_registry(&self, path: &Path) -> Result<Registry> {
        let content = self.reader.read(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                CanisterEnvError::RegistryNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                CanisterEnvError::Io(e)
            }
        })?;

        parse_registry(&content, path)
    }
}

/// Parse registry JSON without checking its shape.
pub fn parse_registry(content: &str, source_path: &Path) -> Result<Registry> {
    let document =
        serde_json::from_str(content).map_err(|e| CanisterEnvError::RegistryParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(Registry::new(source_path, document))
}
