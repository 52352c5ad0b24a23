//! Subscription plan tiers and quota limits.

use std::fmt;

use serde::{Deserialize, Serialize};

mod limits;

pub use limits::{
    DEFAULT_MAX_CALL_SECONDS, PARAM_MAX_CALL_SECONDS, PARAM_MONTHLY_MINUTES, PlanLimits,
    resolve_plan_limits,
};

/// A subscription tier.
///
/// Parsing is total: plan keys are lowercased and unknown values resolve to
/// [`PlanKey::Free`], so a mistyped or retired plan never breaks resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanKey {
    #[default]
    Free,
    Basic,
    Premium,
    Pro,
}

impl<'de> Deserialize<'de> for PlanKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Total, mirroring parse(): unknown strings are the free tier
        let raw = String::deserialize(deserializer)?;
        Ok(PlanKey::parse(&raw))
    }
}

impl PlanKey {
    /// All known tiers, cheapest first.
    pub const ALL: [PlanKey; 4] = [PlanKey::Free, PlanKey::Basic, PlanKey::Premium, PlanKey::Pro];

    /// Parse a raw plan identifier; unknown values fall back to `Free`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "basic" => PlanKey::Basic,
            "premium" => PlanKey::Premium,
            "pro" => PlanKey::Pro,
            _ => PlanKey::Free,
        }
    }

    /// The normalized lowercase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanKey::Free => "free",
            PlanKey::Basic => "basic",
            PlanKey::Premium => "premium",
            PlanKey::Pro => "pro",
        }
    }
}

impl fmt::Display for PlanKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PlanKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PlanKey::parse(s))
    }
}
