//! Billing cycle calculation.
//!
//! The tenant record stores the *next* scheduled billing date. The current
//! period began one cycle unit before it, so the calculator subtracts one
//! calendar month (or year) in the tenant's zone. Calendar subtraction
//! tolerates anchors that drift (month-end clamping: Mar 31 minus one month
//! is Feb 28/29), which fixed-duration arithmetic would get wrong.

use chrono::{DateTime, Datelike, Months, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Zone used when the tenant record carries none (or an unknown name).
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::New_York;

/// The recurring period over which usage quotas reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    fn months(self) -> u32 {
        match self {
            BillingCycle::Monthly => 1,
            BillingCycle::Yearly => 12,
        }
    }
}

impl<'de> Deserialize<'de> for BillingCycle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Anything that is not "yearly" bills monthly
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.trim().to_lowercase().as_str() {
            "yearly" => BillingCycle::Yearly,
            _ => BillingCycle::Monthly,
        })
    }
}

/// Per-tenant billing anchor, read from the tenant record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BillingAnchor {
    /// Next scheduled billing date; `None` for tenants without one yet.
    pub next_billing_date: Option<DateTime<Utc>>,
    pub billing_cycle: BillingCycle,
    /// IANA zone name; unknown or absent falls back to [`DEFAULT_TIMEZONE`].
    pub timezone: Option<String>,
}

impl BillingAnchor {
    /// The tenant's zone, defaulting on absent or unparseable names.
    pub fn zone(&self) -> Tz {
        match self.timezone.as_deref() {
            None => DEFAULT_TIMEZONE,
            Some(name) => name.parse().unwrap_or_else(|_| {
                warn!(timezone = name, "unknown IANA zone, using default");
                DEFAULT_TIMEZONE
            }),
        }
    }
}

/// Compute when the current billing cycle began, evaluated at `now`.
///
/// With a valid anchor: `next_billing_date` minus one cycle unit, in the
/// tenant's zone. Without one (or when calendar subtraction has no valid
/// result): the first instant of the current calendar month in that zone.
/// Total and free of I/O. The result is not validated against `now` — a
/// future-dated anchor yields a future cycle start, which callers see as
/// zero accumulated usage.
pub fn cycle_start_at(anchor: &BillingAnchor, now: DateTime<Utc>) -> DateTime<Tz> {
    let tz = anchor.zone();

    if let Some(next) = anchor.next_billing_date {
        let months = Months::new(anchor.billing_cycle.months());
        match next.with_timezone(&tz).checked_sub_months(months) {
            Some(start) => return start,
            None => {
                warn!(%next, "billing anchor out of calendar range, using month start");
            }
        }
    }

    current_month_start(tz, now)
}

/// Compute when the current billing cycle began, evaluated now.
pub fn cycle_start(anchor: &BillingAnchor) -> DateTime<Tz> {
    cycle_start_at(anchor, Utc::now())
}

fn current_month_start(tz: Tz, now: DateTime<Utc>) -> DateTime<Tz> {
    let local = now.with_timezone(&tz);
    tz.with_ymd_and_hms(local.year(), local.month(), 1, 0, 0, 0)
        .earliest()
        // Midnight on the 1st exists in every IANA zone's real transitions
        .unwrap_or(local)
}
