//! # voicegate
//!
//! Effective-parameter resolution for a metered, plan-gated voice-AI service.
//!
//! This crate turns a sparse, layered configuration (global defaults, per-plan
//! defaults, externally supplied overrides, per-tenant billing anchors) into
//! one unambiguous, typed parameter set consumed by call-handling and billing
//! logic elsewhere in the service:
//!
//! - [`plans::resolve_plan_limits`] — per-plan usage quotas (monthly minutes,
//!   maximum single-call duration).
//! - [`billing::cycle_start`] — the start instant of the tenant's current
//!   billing cycle, back-computed from their next billing date.
//! - [`billing::usage_status`] — minutes consumed since cycle start and
//!   whether the monthly quota has been reached.
//! - [`routing::resolve_model_routing`] — AI model identifiers and tuning
//!   values (temperature, token ceiling, session duration ceiling) per plan.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use voicegate::{
//!     EnvOverrideProvider, MemoryCallDurationSource, ParamResolver, TenantBilling,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), voicegate::UsageError> {
//!     let resolver = ParamResolver::new(
//!         Arc::new(EnvOverrideProvider::new()),
//!         Arc::new(MemoryCallDurationSource::new()),
//!     );
//!
//!     let tenant = TenantBilling {
//!         tenant_id: Some("tenant-42".into()),
//!         plan: "pro".into(),
//!         anchor: Default::default(),
//!     };
//!
//!     let params = resolver.resolve(&tenant).await?;
//!     println!(
//!         "{} gets {} with {} minutes used",
//!         params.limits.plan, params.routing.realtime_model, params.usage.used_minutes,
//!     );
//!     Ok(())
//! }
//! ```
//!
//! All resolution paths are total — malformed overrides, unknown plan keys,
//! and missing billing anchors silently degrade to the next precedence tier.
//! The single fallible operation is the usage aggregate read, which surfaces
//! data-layer failures to the caller unmasked.

#![deny(rustdoc::broken_intra_doc_links)]

pub mod billing;
pub mod overrides;
pub mod params;
pub mod plans;
pub mod routing;

// Re-exports for convenience
pub use billing::{
    BillingAnchor, BillingCycle, CallDurationSource, DEFAULT_TIMEZONE, MemoryCallDurationSource,
    UsageError, UsageResult, UsageStatus, cycle_start, cycle_start_at, usage_status,
    usage_status_at,
};
pub use overrides::{
    EnvOverrideProvider, MemoryOverrideProvider, OverrideProvider, OverrideProviderExt,
};
pub use params::{EffectiveParams, ParamResolver, TenantBilling};
pub use plans::{DEFAULT_MAX_CALL_SECONDS, PlanKey, PlanLimits, resolve_plan_limits};
pub use routing::{ModelRoutingConfig, resolve_model_routing};
