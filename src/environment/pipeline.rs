//! Host build pipeline extension point.

use super::variables::{EnvironmentVariableSet, ProvideBinding};
use crate::error::Result;

/// The define/provide hook of a host build pipeline.
///
/// The resolver calls [`register`](DefinePipeline::register) exactly once
/// per build. How collisions with definitions from other sources are
/// merged is up to the implementation.
pub trait DefinePipeline {
    /// Merge variables and module bindings into the build's static defines.
    fn register(
        &mut self,
        variables: &EnvironmentVariableSet,
        bindings: &[ProvideBinding],
    ) -> Result<()>;
}

/// In-memory pipeline where the last registration for a name wins.
///
/// The CLI registers into one of these and renders its contents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticDefines {
    variables: EnvironmentVariableSet,
    bindings: Vec<ProvideBinding>,
    registrations: usize,
}

impl StaticDefines {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Variables registered so far.
    pub fn variables(&self) -> &EnvironmentVariableSet {
        &self.variables
    }

    /// Bindings registered so far, in first-registration order.
    pub fn bindings(&self) -> &[ProvideBinding] {
        &self.bindings
    }

    /// Number of `register` calls received.
    pub fn registrations(&self) -> usize {
        self.registrations
    }
}

impl DefinePipeline for StaticDefines {
    fn register(
        &mut self,
        variables: &EnvironmentVariableSet,
        bindings: &[ProvideBinding],
    ) -> Result<()> {
        self.variables.merge(variables);

        for binding in bindings {
            match self.bindings.iter_mut().find(|b| b.name == binding.name) {
                Some(existing) => *existing = binding.clone(),
                None => self.bindings.push(binding.clone()),
            }
        }

        self.registrations += 1;
        tracing::debug!(
            "Registered {} variables and {} bindings",
            variables.len(),
            bindings.len()
        );
        Ok(())
    }
}
