//! Build-time variable and binding types.

use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Suffix appended to the uppercased canister name.
pub const CANISTER_ID_SUFFIX: &str = "_CANISTER_ID";

/// Derive the variable name for a canister.
///
/// # Example
///
/// ```
/// use canister_env::environment::canister_variable_name;
///
/// assert_eq!(canister_variable_name("swap_backend"), "SWAP_BACKEND_CANISTER_ID");
/// assert_eq!(canister_variable_name("Ledger-1"), "LEDGER-1_CANISTER_ID");
/// ```
pub fn canister_variable_name(canister: &str) -> String {
    format!("{}{}", canister.to_uppercase(), CANISTER_ID_SUFFIX)
}

/// Environment variables produced for one build, ordered by name.
///
/// Inserting an existing name replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EnvironmentVariableSet {
    vars: BTreeMap<String, String>,
}

impl EnvironmentVariableSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a variable, returning the value it replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.vars.insert(name.into(), value.into())
    }

    /// Get a variable's value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterate variables in name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.vars.iter()
    }

    /// Merge `other` into this set; `other` wins on collisions.
    pub fn merge(&mut self, other: &EnvironmentVariableSet) {
        for (name, value) in other {
            self.vars.insert(name.clone(), value.clone());
        }
    }
}

impl<'a> IntoIterator for &'a EnvironmentVariableSet {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for EnvironmentVariableSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A global name the bundler resolves to a module (or one of its exports).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProvideBinding {
    /// Global identifier, e.g. `Buffer`.
    pub name: String,
    /// Module specifier, e.g. `buffer/`.
    pub module: String,
    /// Named export of the module; the module itself when `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export: Option<String>,
}

impl ProvideBinding {
    /// Bind `name` to a whole module.
    pub fn module(name: &str, module: &str) -> Self {
        Self {
            name: name.to_string(),
            module: module.to_string(),
            export: None,
        }
    }

    /// Bind `name` to a named export of a module.
    pub fn with_export(name: &str, module: &str, export: &str) -> Self {
        Self {
            name: name.to_string(),
            module: module.to_string(),
            export: Some(export.to_string()),
        }
    }
}
