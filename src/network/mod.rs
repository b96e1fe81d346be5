//! Network selection.
//!
//! Determines which deployment network the build targets. The priority
//! chain is:
//!
//! 1. Explicit override (`--network` flag, then `DFX_NETWORK`)
//! 2. Production build mode (`NODE_ENV=production`) selects `ic`
//! 3. Fallback to `local`

pub mod selector;
pub mod signals;

pub use selector::{NetworkSelector, NetworkSource, ResolvedNetwork};
pub use signals::BuildSignals;
