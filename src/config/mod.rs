//! Resolver configuration.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use canister_env::config::{load_config, CONFIG_FILE_NAME};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(CONFIG_FILE_NAME), "production_network: mainnet").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.production_network, "mainnet");
//! assert_eq!(config.local_network, "local");
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    find_project_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME,
};
pub use schema::ResolverConfig;
