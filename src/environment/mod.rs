//! Build environment derivation.
//!
//! Turns the selected registry into `<CANISTER>_CANISTER_ID` variables and
//! registers them, with the static build-mode variable and polyfill
//! bindings, through a [`DefinePipeline`].

pub mod builder;
pub mod pipeline;
pub mod variables;

pub use builder::{DefineSet, EnvironmentBuilder};
pub use pipeline::{DefinePipeline, StaticDefines};
pub use variables::{
    canister_variable_name, EnvironmentVariableSet, ProvideBinding, CANISTER_ID_SUFFIX,
};
