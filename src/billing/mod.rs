//! Billing cycles and usage aggregation.
//!
//! [`cycle_start`] back-computes when the tenant's current billing period
//! began from their next scheduled billing date; [`usage_status`] sums call
//! durations since that instant and compares them against the monthly
//! minute quota.

pub mod cycle;
pub mod usage;

pub use cycle::{BillingAnchor, BillingCycle, DEFAULT_TIMEZONE, cycle_start, cycle_start_at};
pub use usage::{
    CallDurationSource, MemoryCallDurationSource, UsageStatus, usage_status, usage_status_at,
};

use thiserror::Error;

/// Errors that can occur during usage aggregation.
///
/// The only fallible path in this crate is the call-duration aggregate read;
/// quota resolution and cycle calculation are total. A source failure is
/// surfaced unmasked so callers can decide whether to fail closed or open —
/// usage-exceeded must never silently default to "not exceeded" on a
/// data-layer fault.
#[derive(Error, Debug)]
pub enum UsageError {
    /// The call-duration source could not produce an aggregate.
    #[error("call duration source error: {message}")]
    Source {
        /// Error message from the underlying store
        message: String,
    },
}

impl UsageError {
    /// Wrap a data-layer failure.
    pub fn source(message: impl Into<String>) -> Self {
        Self::Source {
            message: message.into(),
        }
    }
}

/// Result type for usage aggregation.
pub type UsageResult<T> = std::result::Result<T, UsageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_error_display() {
        let err = UsageError::source("connection refused");
        assert!(err.to_string().contains("connection refused"));
    }
}
