//! Pluggable override provider system.
//!
//! Operators tune per-plan parameters without code changes through a
//! read-only key/value lookup. Keys are `<PARAMETER>_<PLAN>` (e.g.
//! `MONTHLY_MINUTES_PRO`); the environment-backed provider prepends the
//! `VOICEGATE_` namespace to form the process-environment variable name.
//!
//! Absent keys mean "no override". Present keys are raw strings; typed
//! access goes through [`OverrideProviderExt`], which treats a malformed
//! value exactly like an absent one — resolution never fails on operator
//! input.
//!
//! ```rust
//! use voicegate::overrides::{MemoryOverrideProvider, OverrideProviderExt};
//!
//! let overrides = MemoryOverrideProvider::new().value("MONTHLY_MINUTES_PRO", "2500");
//! assert_eq!(overrides.get_i64("MONTHLY_MINUTES_PRO"), Some(2500));
//! assert_eq!(overrides.get_i64("MONTHLY_MINUTES_FREE"), None);
//! ```

pub mod env;
pub mod memory;
pub mod provider;

pub use env::EnvOverrideProvider;
pub use memory::MemoryOverrideProvider;
pub use provider::{OverrideProvider, OverrideProviderExt};

/// Default namespace prepended by [`EnvOverrideProvider`].
pub const DEFAULT_NAMESPACE: &str = "VOICEGATE_";

/// Build the override key for a plan-scoped parameter.
///
/// `plan` is the lowercase plan identifier; the suffix is uppercased to
/// match the environment-variable convention.
pub fn plan_scoped_key(parameter: &str, plan: &str) -> String {
    format!("{}_{}", parameter, plan.to_uppercase())
}
