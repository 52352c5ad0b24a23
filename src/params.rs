//! One-call resolution of a tenant's effective operating parameters.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::billing::{BillingAnchor, CallDurationSource, UsageResult, UsageStatus, usage_status};
use crate::overrides::OverrideProvider;
use crate::plans::{PlanLimits, resolve_plan_limits};
use crate::routing::{ModelRoutingConfig, resolve_model_routing};

/// Billing fields read from the tenant record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TenantBilling {
    pub tenant_id: Option<String>,
    /// Raw plan identifier as stored; normalized during resolution.
    pub plan: String,
    pub anchor: BillingAnchor,
}

/// The complete resolved parameter set for one tenant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectiveParams {
    pub limits: PlanLimits,
    pub routing: ModelRoutingConfig,
    pub usage: UsageStatus,
}

/// Composes the four resolution operations over injected collaborators.
///
/// Holds no state of its own beyond the collaborators; every [`resolve`]
/// call re-derives the full parameter set from the override snapshot and
/// duration aggregate in effect at call time.
///
/// [`resolve`]: ParamResolver::resolve
#[derive(Clone)]
pub struct ParamResolver {
    overrides: Arc<dyn OverrideProvider>,
    durations: Arc<dyn CallDurationSource>,
}

impl ParamResolver {
    pub fn new(
        overrides: Arc<dyn OverrideProvider>,
        durations: Arc<dyn CallDurationSource>,
    ) -> Self {
        Self {
            overrides,
            durations,
        }
    }

    /// Resolve the effective parameters for one tenant.
    ///
    /// Plan limits first, then cycle usage against them, then model routing
    /// with the resolved call ceiling. The only failure mode is the
    /// duration-aggregate read.
    pub async fn resolve(&self, tenant: &TenantBilling) -> UsageResult<EffectiveParams> {
        let limits = resolve_plan_limits(&tenant.plan, self.overrides.as_ref());
        let usage = usage_status(
            tenant.tenant_id.as_deref(),
            &limits,
            &tenant.anchor,
            self.durations.as_ref(),
        )
        .await?;
        let routing =
            resolve_model_routing(&tenant.plan, limits.max_call_seconds, self.overrides.as_ref());

        Ok(EffectiveParams {
            limits,
            routing,
            usage,
        })
    }
}

impl std::fmt::Debug for ParamResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParamResolver")
            .field("overrides", &self.overrides.name())
            .finish_non_exhaustive()
    }
}
