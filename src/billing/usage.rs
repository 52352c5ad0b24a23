//! Usage aggregation against the monthly minute quota.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use tracing::debug;

use super::cycle::{BillingAnchor, cycle_start_at};
use super::{UsageError, UsageResult};
use crate::plans::PlanLimits;

/// Aggregate source of historical call durations.
///
/// The one external collaborator of this crate. Implementations answer a
/// single synchronous aggregate query; they may block or fail, and callers
/// own timeout, retry, and cancellation policy.
#[async_trait::async_trait]
pub trait CallDurationSource: Send + Sync {
    /// Sum of call durations in seconds for `tenant_id`, counting calls
    /// recorded at or after `since`.
    async fn total_call_seconds(&self, tenant_id: &str, since: DateTime<Tz>) -> UsageResult<i64>;
}

/// A tenant's standing against their monthly minute quota.
///
/// Transient — derived per call from the cycle window and the duration
/// aggregate, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageStatus {
    /// Whether the tenant has consumed at least their monthly allotment.
    pub usage_exceeded: bool,
    /// Minutes used since cycle start, rounded to nearest.
    pub used_minutes: i64,
    /// Start of the current billing cycle; `None` when aggregation was
    /// short-circuited (unlimited plan or missing tenant id).
    pub cycle_start: Option<DateTime<Tz>>,
}

impl UsageStatus {
    fn unmetered() -> Self {
        Self {
            usage_exceeded: false,
            used_minutes: 0,
            cycle_start: None,
        }
    }
}

/// Determine a tenant's usage status, evaluating cycle boundaries at `now`.
///
/// Unlimited plans (`monthly_minutes < 0`) and absent tenant ids never
/// consult the source. Summed seconds round to the *nearest* minute, so a
/// 90-second total counts as 2 minutes; reaching the quota exactly counts
/// as exceeded. A failing source propagates — exceeded status must not
/// silently default on a data-layer fault.
pub async fn usage_status_at(
    tenant_id: Option<&str>,
    limits: &PlanLimits,
    anchor: &BillingAnchor,
    source: &dyn CallDurationSource,
    now: DateTime<Utc>,
) -> UsageResult<UsageStatus> {
    let tenant_id = match tenant_id {
        Some(id) if !id.is_empty() => id,
        _ => return Ok(UsageStatus::unmetered()),
    };
    if limits.is_unlimited() {
        return Ok(UsageStatus::unmetered());
    }

    let start = cycle_start_at(anchor, now);
    let seconds = source.total_call_seconds(tenant_id, start).await?.max(0);

    // Round half up: 90s is 2 minutes, 5999s is 100
    let used_minutes = (seconds + 30).div_euclid(60);
    let usage_exceeded = used_minutes >= limits.monthly_minutes;

    debug!(
        tenant_id,
        plan = %limits.plan,
        used_minutes,
        quota = limits.monthly_minutes,
        usage_exceeded,
        "aggregated cycle usage"
    );

    Ok(UsageStatus {
        usage_exceeded,
        used_minutes,
        cycle_start: Some(start),
    })
}

/// Determine a tenant's usage status for the cycle in progress right now.
pub async fn usage_status(
    tenant_id: Option<&str>,
    limits: &PlanLimits,
    anchor: &BillingAnchor,
    source: &dyn CallDurationSource,
) -> UsageResult<UsageStatus> {
    usage_status_at(tenant_id, limits, anchor, source, Utc::now()).await
}

/// In-memory call-duration source for tests and embedded use.
#[derive(Debug, Default)]
pub struct MemoryCallDurationSource {
    calls: Mutex<Vec<CallRecord>>,
}

#[derive(Debug, Clone)]
struct CallRecord {
    tenant_id: String,
    recorded_at: DateTime<Utc>,
    seconds: i64,
}

impl MemoryCallDurationSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed call.
    pub fn record(&self, tenant_id: impl Into<String>, recorded_at: DateTime<Utc>, seconds: i64) {
        let mut calls = self.calls.lock().expect("call record lock poisoned");
        calls.push(CallRecord {
            tenant_id: tenant_id.into(),
            recorded_at,
            seconds,
        });
    }
}

#[async_trait::async_trait]
impl CallDurationSource for MemoryCallDurationSource {
    async fn total_call_seconds(&self, tenant_id: &str, since: DateTime<Tz>) -> UsageResult<i64> {
        let calls = self
            .calls
            .lock()
            .map_err(|_| UsageError::source("call record lock poisoned"))?;
        Ok(calls
            .iter()
            .filter(|c| c.tenant_id == tenant_id && c.recorded_at >= since.with_timezone(&Utc))
            .map(|c| c.seconds)
            .sum())
    }
}
