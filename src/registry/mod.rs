//! Canister identifier registries.
//!
//! A registry maps canister names to per-network identifiers:
//!
//! ```json
//! {"ledger": {"local": "bkyz2-fmaaa-aaaaa-qaaaq-cai", "ic": "ryjl3-tyaaa-aaaaa-aaaba-cai"}}
//! ```
//!
//! Two registries exist per project: the local one written by deploying to
//! a local replica, and the production one committed with the project.
//! Either may be missing; the [`RegistryLoader`] reports that as
//! [`RegistrySlot::Absent`] rather than failing.

pub mod loader;
pub mod model;

pub use loader::{parse_registry, FsReader, RegistryLoader, RegistryPaths, RegistryReader};
pub use model::{LoadedRegistries, NetworkMap, Registry, RegistryKind, RegistrySlot};
