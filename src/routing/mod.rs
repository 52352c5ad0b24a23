//! AI model routing parameters per plan tier.

mod resolver;

pub use resolver::{ModelRoutingConfig, resolve_model_routing};

/// Default realtime voice model.
pub const DEFAULT_REALTIME_MODEL: &str = "gpt-4o-realtime-preview";
/// Default transcription model.
pub const DEFAULT_TRANSCRIPTION_MODEL: &str = "whisper-1";
/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f64 = 0.8;
/// Default ceiling on response output tokens.
pub const DEFAULT_MAX_RESPONSE_OUTPUT_TOKENS: i64 = 4096;
/// Default session duration ceiling in milliseconds; `0` means unset, in
/// which case the plan's call-duration ceiling applies.
pub const DEFAULT_MAX_SESSION_DURATION_MS: i64 = 0;

/// Override parameter for the realtime model (string).
pub const PARAM_REALTIME_MODEL: &str = "REALTIME_MODEL";
/// Override parameter for the transcription model (string).
pub const PARAM_TRANSCRIPTION_MODEL: &str = "TRANSCRIPTION_MODEL";
/// Override parameter for sampling temperature (float).
pub const PARAM_TEMPERATURE: &str = "TEMPERATURE";
/// Override parameter for the response token ceiling (integer).
pub const PARAM_MAX_RESPONSE_TOKENS: &str = "MAX_RESPONSE_TOKENS";
/// Override parameter for the session duration ceiling (integer ms).
pub const PARAM_MAX_SESSION_MS: &str = "MAX_SESSION_MS";
