//! Configuration file discovery and loading.

use crate::config::schema::ResolverConfig;
use crate::error::{CanisterEnvError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file name, looked up at the project root.
pub const CONFIG_FILE_NAME: &str = ".canister-env.yml";

/// Find the project config at `.canister-env.yml`.
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load the resolver configuration for a project.
///
/// An explicit path must exist. Without one, `.canister-env.yml` is used
/// when present and the built-in defaults otherwise.
///
/// # Errors
///
/// Returns `ConfigNotFound` if `explicit` is given and missing.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<ResolverConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match find_project_config(project_root) {
            Some(path) => path,
            None => {
                tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                return Ok(ResolverConfig::default());
            }
        },
    };

    load_config_file(&path)
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ResolverConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CanisterEnvError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CanisterEnvError::Io(e)
        }
    })?;

    tracing::debug!("Loading config from {}", path.display());
    parse_config(&content, path)
}

/// Parse YAML content into a [`ResolverConfig`].
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ResolverConfig> {
    if content.trim().is_empty() {
        return Ok(ResolverConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| CanisterEnvError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
