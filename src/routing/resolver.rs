//! Model routing resolution with override-aware precedence.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    DEFAULT_MAX_RESPONSE_OUTPUT_TOKENS, DEFAULT_MAX_SESSION_DURATION_MS, DEFAULT_REALTIME_MODEL,
    DEFAULT_TEMPERATURE, DEFAULT_TRANSCRIPTION_MODEL, PARAM_MAX_RESPONSE_TOKENS,
    PARAM_MAX_SESSION_MS, PARAM_REALTIME_MODEL, PARAM_TEMPERATURE, PARAM_TRANSCRIPTION_MODEL,
};
use crate::overrides::{OverrideProvider, OverrideProviderExt, plan_scoped_key};
use crate::plans::PlanKey;

/// Resolved AI model identifiers and tuning values for one plan tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRoutingConfig {
    pub plan: PlanKey,
    pub realtime_model: String,
    pub transcription_model: String,
    pub temperature: f64,
    pub max_response_output_tokens: i64,
    /// Session duration ceiling; `None` means unbounded, no ceiling is
    /// enforced downstream.
    pub max_session_duration_ms: Option<i64>,
}

/// Resolve the model routing parameters for a plan.
///
/// Every field follows per-plan override, then global default; malformed or
/// empty overrides fall through silently, so resolution is total.
///
/// The session duration ceiling resolves in two stages: an explicit override
/// (or a positive global default) always wins, otherwise the caller-supplied
/// `max_call_seconds` from plan-limit resolution becomes the ceiling — one
/// knob, not two independently drifting time limits. When both are
/// non-positive the ceiling is `None` (unbounded).
pub fn resolve_model_routing(
    plan: &str,
    max_call_seconds: i64,
    overrides: &dyn OverrideProvider,
) -> ModelRoutingConfig {
    let plan = PlanKey::parse(plan);
    let key = |param: &str| plan_scoped_key(param, plan.as_str());

    let realtime_model = overrides
        .get_str(&key(PARAM_REALTIME_MODEL))
        .unwrap_or_else(|| DEFAULT_REALTIME_MODEL.to_string());
    let transcription_model = overrides
        .get_str(&key(PARAM_TRANSCRIPTION_MODEL))
        .unwrap_or_else(|| DEFAULT_TRANSCRIPTION_MODEL.to_string());
    let temperature = overrides
        .get_f64(&key(PARAM_TEMPERATURE))
        .unwrap_or(DEFAULT_TEMPERATURE);
    let max_response_output_tokens = overrides
        .get_i64(&key(PARAM_MAX_RESPONSE_TOKENS))
        .unwrap_or(DEFAULT_MAX_RESPONSE_OUTPUT_TOKENS);

    let session_ms = overrides
        .get_i64(&key(PARAM_MAX_SESSION_MS))
        .unwrap_or(DEFAULT_MAX_SESSION_DURATION_MS);
    let max_session_duration_ms = if session_ms > 0 {
        Some(session_ms)
    } else if max_call_seconds > 0 {
        Some(max_call_seconds * 1000)
    } else {
        None
    };

    debug!(
        %plan,
        realtime_model = %realtime_model,
        transcription_model = %transcription_model,
        temperature,
        max_response_output_tokens,
        ?max_session_duration_ms,
        "resolved model routing"
    );

    ModelRoutingConfig {
        plan,
        realtime_model,
        transcription_model,
        temperature,
        max_response_output_tokens,
        max_session_duration_ms,
    }
}
