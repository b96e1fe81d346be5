//! Canister registry data model.
//!
//! A registry is kept as the raw JSON document it was loaded from. Shape
//! checks happen only when entries are read for a specific network, so a
//! file that parses but has the wrong structure is still loaded and fails
//! at the point where its contents are needed.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{CanisterEnvError, Result};

/// Mapping from network name to canister identifier.
pub type NetworkMap = BTreeMap<String, String>;

/// Which of the two registry sources a slot refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryKind {
    /// The registry written by a local replica deployment.
    Local,
    /// The registry committed for the production network.
    Production,
}

impl fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// A canister registry loaded verbatim from a JSON file.
#[derive(Debug, Clone, PartialEq)]
pub struct Registry {
    source: PathBuf,
    document: Value,
}

impl Registry {
    /// Wrap a parsed JSON document. No shape validation is performed.
    pub fn new(source: impl Into<PathBuf>, document: Value) -> Self {
        Self {
            source: source.into(),
            document,
        }
    }

    /// Path the registry was loaded from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Canister names in the registry, sorted.
    pub fn canister_names(&self) -> Result<Vec<&str>> {
        Ok(self.canisters()?.keys().map(String::as_str).collect())
    }

    /// `(canister, identifier)` pairs for every canister deployed to `network`.
    ///
    /// Canisters without an entry for `network` are skipped.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRegistry` if the document is not an object of
    /// objects, or if the identifier for `network` is not a string.
    pub fn identifiers_for(&self, network: &str) -> Result<Vec<(&str, &str)>> {
        let mut found = Vec::new();

        for (name, entry) in self.canisters()? {
            let networks = entry.as_object().ok_or_else(|| {
                self.invalid(format!(
                    "canister '{}' must map network names to identifiers, found {}",
                    name,
                    json_kind(entry)
                ))
            })?;

            let Some(id) = networks.get(network) else {
                continue;
            };

            let id = id.as_str().ok_or_else(|| {
                self.invalid(format!(
                    "canister '{}' has a {} identifier for network '{}', expected a string",
                    name,
                    json_kind(id),
                    network
                ))
            })?;

            found.push((name.as_str(), id));
        }

        Ok(found)
    }

    fn canisters(&self) -> Result<&Map<String, Value>> {
        self.document.as_object().ok_or_else(|| {
            self.invalid(format!(
                "top level must be an object of canister names, found {}",
                json_kind(&self.document)
            ))
        })
    }

    fn invalid(&self, message: String) -> CanisterEnvError {
        CanisterEnvError::InvalidRegistry {
            path: self.source.clone(),
            message,
        }
    }
}

/// Result of attempting to load one registry file.
///
/// `Absent` is distinct from an empty registry: it means the file could
/// not be read or parsed at all.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistrySlot {
    /// The file was read and parsed.
    Present(Registry),
    /// The file was missing or unparsable.
    Absent { path: PathBuf },
}

impl RegistrySlot {
    /// Check if a registry was loaded.
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// The loaded registry, if any.
    pub fn registry(&self) -> Option<&Registry> {
        match self {
            Self::Present(registry) => Some(registry),
            Self::Absent { .. } => None,
        }
    }

    /// Path this slot was loaded from (or expected at).
    pub fn path(&self) -> &Path {
        match self {
            Self::Present(registry) => registry.source(),
            Self::Absent { path } => path,
        }
    }
}

/// Both registry slots as produced by a single load.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedRegistries {
    pub local: RegistrySlot,
    pub production: RegistrySlot,
}

impl LoadedRegistries {
    /// Get the slot for a registry kind.
    pub fn slot(&self, kind: RegistryKind) -> &RegistrySlot {
        match kind {
            RegistryKind::Local => &self.local,
            RegistryKind::Production => &self.production,
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registry(document: Value) -> Registry {
        Registry::new("canister_ids.json", document)
    }

    #[test]
    fn identifiers_for_skips_canisters_without_network() {
        let reg = registry(json!({
            "a": {"local": "X"},
            "b": {"ic": "Y"}
        }));
        assert_eq!(reg.identifiers_for("local").unwrap(), vec![("a", "X")]);
        assert_eq!(reg.identifiers_for("ic").unwrap(), vec![("b", "Y")]);
    }

    #[test]
    fn identifiers_for_unknown_network_is_empty() {
        let reg = registry(json!({"a": {"local": "X"}}));
        assert!(reg.identifiers_for("staging").unwrap().is_empty());
    }

    #[test]
    fn canister_names_are_case_sensitive() {
        let reg = registry(json!({
            "Ledger": {"local": "1"},
            "ledger": {"local": "2"}
        }));
        assert_eq!(reg.canister_names().unwrap(), vec!["Ledger", "ledger"]);
    }

    #[test]
    fn empty_object_is_an_empty_registry() {
        let reg = registry(json!({}));
        assert!(reg.canister_names().unwrap().is_empty());
        assert!(reg.identifiers_for("local").unwrap().is_empty());
    }

    #[test]
    fn top_level_array_is_invalid() {
        let reg = registry(json!(["ledger"]));
        let err = reg.identifiers_for("local").unwrap_err();
        match err {
            CanisterEnvError::InvalidRegistry { path, message } => {
                assert_eq!(path, PathBuf::from("canister_ids.json"));
                assert!(message.contains("an array"));
            }
            other => panic!("expected InvalidRegistry, got {:?}", other),
        }
    }

    #[test]
    fn canister_entry_must_be_object() {
        let reg = registry(json!({"ledger": "ryjl3-tyaaa-aaaaa-aaaba-cai"}));
        let err = reg.identifiers_for("ic").unwrap_err();
        assert!(err.to_string().contains("canister 'ledger'"));
    }

    #[test]
    fn identifier_must_be_string() {
        let reg = registry(json!({"ledger": {"ic": 42}}));
        let err = reg.identifiers_for("ic").unwrap_err();
        assert!(err.to_string().contains("a number identifier"));
    }

    #[test]
    fn non_string_identifier_on_other_network_is_ignored() {
        let reg = registry(json!({"ledger": {"ic": 42, "local": "X"}}));
        assert_eq!(reg.identifiers_for("local").unwrap(), vec![("ledger", "X")]);
    }

    #[test]
    fn absent_slot_is_not_present() {
        let slot = RegistrySlot::Absent {
            path: PathBuf::from("canister_ids.json"),
        };
        assert!(!slot.is_present());
        assert!(slot.registry().is_none());
        assert_eq!(slot.path(), Path::new("canister_ids.json"));
    }

    #[test]
    fn absent_differs_from_empty() {
        let empty = RegistrySlot::Present(registry(json!({})));
        let absent = RegistrySlot::Absent {
            path: PathBuf::from("canister_ids.json"),
        };
        assert_ne!(empty, absent);
        assert!(empty.is_present());
    }

    #[test]
    fn loaded_registries_slot_lookup() {
        let loaded = LoadedRegistries {
            local: RegistrySlot::Present(registry(json!({}))),
            production: RegistrySlot::Absent {
                path: PathBuf::from("canister_ids.json"),
            },
        };
        assert!(loaded.slot(RegistryKind::Local).is_present());
        assert!(!loaded.slot(RegistryKind::Production).is_present());
    }

    #[test]
    fn registry_kind_display() {
        assert_eq!(RegistryKind::Local.to_string(), "local");
        assert_eq!(RegistryKind::Production.to_string(), "production");
    }
}
