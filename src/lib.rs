//! canister-env - Canister environment resolution for front-end builds.
//!
//! Resolves which deployment network a build targets, reads the canister
//! identifier registries a dfx project keeps on disk, and derives the
//! `<CANISTER>_CANISTER_ID` variables a bundler injects at build time.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `.canister-env.yml` loading
//! - [`environment`] - Variable derivation and the pipeline extension point
//! - [`error`] - Error types and result aliases
//! - [`network`] - Active network selection
//! - [`output`] - Dotenv, shell, Cargo and JSON formatters
//! - [`registry`] - Registry files and their loader
//! - [`resolver`] - End-to-end resolution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use canister_env::environment::canister_variable_name;
//! use canister_env::network::{BuildSignals, NetworkSelector};
//!
//! let network = NetworkSelector::default().select(&BuildSignals::new(None, Some("production")));
//! assert_eq!(network.name, "ic");
//! assert_eq!(canister_variable_name("ledger"), "LEDGER_CANISTER_ID");
//! ```

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod network;
pub mod output;
pub mod registry;
pub mod resolver;
pub mod ui;

pub use error::{CanisterEnvError, Result};
pub use resolver::{CanisterEnvResolver, Resolution};
