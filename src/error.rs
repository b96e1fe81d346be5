//! Error types for canister environment resolution.
//!
//! This module defines [`CanisterEnvError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Registry file errors (`RegistryNotFound`, `RegistryParseError`, and
//!   `Io` while reading a registry) are recovered by the loader one file at
//!   a time and never reach the caller
//! - `RegistryUnavailable` and `InvalidRegistry` abort the resolution
//! - Use `anyhow::Error` (via `CanisterEnvError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for canister environment resolution.
#[derive(Debug, Error)]
pub enum CanisterEnvError {
    /// Registry file not found at its expected location.
    #[error("Canister registry not found: {path}")]
    RegistryNotFound { path: PathBuf },

    /// Registry file exists but is not valid JSON.
    #[error("Failed to parse canister registry at {path}: {message}")]
    RegistryParseError { path: PathBuf, message: String },

    /// The registry required by the selected network could not be loaded.
    #[error("No canister registry available for network '{network}' (expected {path})")]
    RegistryUnavailable { network: String, path: PathBuf },

    /// Registry parsed but does not have the `{canister: {network: id}}` shape.
    #[error("Invalid canister registry at {path}: {message}")]
    InvalidRegistry { path: PathBuf, message: String },

    /// Explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for canister environment operations.
pub type Result<T> = std::result::Result<T, CanisterEnvError>;
