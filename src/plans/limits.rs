//! Plan quota limits with override-aware resolution.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::PlanKey;
use crate::overrides::{OverrideProvider, OverrideProviderExt, plan_scoped_key};

/// Override parameter for the monthly minute allotment.
pub const PARAM_MONTHLY_MINUTES: &str = "MONTHLY_MINUTES";
/// Override parameter for the maximum single-call duration; also valid
/// without a plan suffix as the global ceiling.
pub const PARAM_MAX_CALL_SECONDS: &str = "MAX_CALL_SECONDS";

/// Global default ceiling on a single call, in seconds.
pub const DEFAULT_MAX_CALL_SECONDS: i64 = 600;

const fn default_monthly_minutes(plan: PlanKey) -> i64 {
    match plan {
        PlanKey::Free => 10,
        PlanKey::Basic => 100,
        PlanKey::Premium => 500,
        PlanKey::Pro => 1500,
    }
}

/// Resolved usage quotas for one plan tier.
///
/// Recomputed on every call; never persisted by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanLimits {
    pub plan: PlanKey,
    /// Allotted minutes per billing cycle; `-1` means unlimited.
    pub monthly_minutes: i64,
    /// Ceiling on a single call, in seconds.
    pub max_call_seconds: i64,
}

impl PlanLimits {
    /// Whether this tier has no monthly minute quota.
    pub fn is_unlimited(&self) -> bool {
        self.monthly_minutes < 0
    }
}

/// Resolve the quota limits for a plan.
///
/// Precedence per parameter, highest first: per-plan integer override, then
/// (for `max_call_seconds`) the plan-independent `MAX_CALL_SECONDS` override,
/// then the static tier default. Unknown plan keys resolve as `free`.
/// Total — malformed overrides fall through silently.
pub fn resolve_plan_limits(plan: &str, overrides: &dyn OverrideProvider) -> PlanLimits {
    let plan = PlanKey::parse(plan);

    let monthly_minutes = overrides
        .get_i64(&plan_scoped_key(PARAM_MONTHLY_MINUTES, plan.as_str()))
        .unwrap_or_else(|| default_monthly_minutes(plan));

    let global_ceiling = overrides
        .get_i64(PARAM_MAX_CALL_SECONDS)
        .unwrap_or(DEFAULT_MAX_CALL_SECONDS);
    let max_call_seconds = overrides
        .get_i64(&plan_scoped_key(PARAM_MAX_CALL_SECONDS, plan.as_str()))
        .unwrap_or(global_ceiling);

    debug!(%plan, monthly_minutes, max_call_seconds, "resolved plan limits");

    PlanLimits {
        plan,
        monthly_minutes,
        max_call_seconds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overrides::MemoryOverrideProvider;

    #[test]
    fn test_static_defaults() {
        let overrides = MemoryOverrideProvider::new();

        let limits = resolve_plan_limits("free", &overrides);
        assert_eq!(limits.plan, PlanKey::Free);
        assert_eq!(limits.monthly_minutes, 10);
        assert_eq!(limits.max_call_seconds, DEFAULT_MAX_CALL_SECONDS);

        let limits = resolve_plan_limits("pro", &overrides);
        assert_eq!(limits.monthly_minutes, 1500);
        assert_eq!(limits.max_call_seconds, DEFAULT_MAX_CALL_SECONDS);
    }

    #[test]
    fn test_unknown_plan_gets_free_defaults() {
        let overrides = MemoryOverrideProvider::new();
        let limits = resolve_plan_limits("enterprise", &overrides);
        assert_eq!(limits, resolve_plan_limits("free", &overrides));
    }

    #[test]
    fn test_override_beats_static_default() {
        let overrides = MemoryOverrideProvider::new()
            .value("MONTHLY_MINUTES_PRO", "2500")
            .value("MAX_CALL_SECONDS_PRO", "1800");

        let limits = resolve_plan_limits("pro", &overrides);
        assert_eq!(limits.monthly_minutes, 2500);
        assert_eq!(limits.max_call_seconds, 1800);

        // Other plans untouched
        let limits = resolve_plan_limits("basic", &overrides);
        assert_eq!(limits.monthly_minutes, 100);
        assert_eq!(limits.max_call_seconds, DEFAULT_MAX_CALL_SECONDS);
    }

    #[test]
    fn test_malformed_override_falls_through() {
        let overrides = MemoryOverrideProvider::new()
            .value("MONTHLY_MINUTES_BASIC", "lots")
            .value("MAX_CALL_SECONDS_BASIC", "");

        let limits = resolve_plan_limits("basic", &overrides);
        assert_eq!(limits.monthly_minutes, 100);
        assert_eq!(limits.max_call_seconds, DEFAULT_MAX_CALL_SECONDS);
    }

    #[test]
    fn test_global_ceiling_applies_to_all_plans() {
        let overrides = MemoryOverrideProvider::new().value("MAX_CALL_SECONDS", "900");

        for plan in PlanKey::ALL {
            let limits = resolve_plan_limits(plan.as_str(), &overrides);
            assert_eq!(limits.max_call_seconds, 900, "plan {plan}");
        }
    }

    #[test]
    fn test_per_plan_ceiling_shadows_global() {
        let overrides = MemoryOverrideProvider::new()
            .value("MAX_CALL_SECONDS", "900")
            .value("MAX_CALL_SECONDS_FREE", "120");

        assert_eq!(resolve_plan_limits("free", &overrides).max_call_seconds, 120);
        assert_eq!(resolve_plan_limits("pro", &overrides).max_call_seconds, 900);
    }

    #[test]
    fn test_unlimited_override() {
        let overrides = MemoryOverrideProvider::new().value("MONTHLY_MINUTES_PREMIUM", "-1");

        let limits = resolve_plan_limits("premium", &overrides);
        assert_eq!(limits.monthly_minutes, -1);
        assert!(limits.is_unlimited());
    }

    #[test]
    fn test_determinism() {
        let overrides = MemoryOverrideProvider::new().value("MONTHLY_MINUTES_PRO", "777");
        assert_eq!(
            resolve_plan_limits("pro", &overrides),
            resolve_plan_limits("pro", &overrides)
        );
    }
}
