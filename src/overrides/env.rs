//! Environment Variable Override Provider
//!
//! Provides read-only access to overrides via process environment variables.
//! Environment variables are immutable at runtime for thread-safety.

use super::DEFAULT_NAMESPACE;
use super::provider::OverrideProvider;

/// Read-only environment variable override provider.
///
/// Keys are namespaced: `MONTHLY_MINUTES_PRO` reads the
/// `VOICEGATE_MONTHLY_MINUTES_PRO` environment variable.
#[derive(Debug, Clone)]
pub struct EnvOverrideProvider {
    namespace: String,
}

impl EnvOverrideProvider {
    /// Create an environment provider with the default `VOICEGATE_` namespace.
    pub fn new() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }

    /// Create an environment provider with a custom namespace.
    pub fn namespaced(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// Get the full environment variable name for a key.
    fn env_key(&self, key: &str) -> String {
        format!("{}{}", self.namespace, key.to_uppercase())
    }
}

impl Default for EnvOverrideProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl OverrideProvider for EnvOverrideProvider {
    fn name(&self) -> &str {
        "env"
    }

    fn get(&self, key: &str) -> Option<String> {
        std::env::var(self.env_key(key)).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_key_conversion() {
        let provider = EnvOverrideProvider::new();
        assert_eq!(provider.env_key("MONTHLY_MINUTES_PRO"), "VOICEGATE_MONTHLY_MINUTES_PRO");
        assert_eq!(provider.env_key("temperature_free"), "VOICEGATE_TEMPERATURE_FREE");

        let provider = EnvOverrideProvider::namespaced("ACME_");
        assert_eq!(provider.env_key("MAX_CALL_SECONDS"), "ACME_MAX_CALL_SECONDS");
    }

    #[test]
    fn test_env_provider_get() {
        let provider = EnvOverrideProvider::namespaced("TEST_OVERRIDE_GET_");

        // SAFETY: Test-only environment setup
        unsafe { std::env::set_var("TEST_OVERRIDE_GET_MY_KEY", "my_value") };
        assert_eq!(provider.get("MY_KEY"), Some("my_value".to_string()));
        unsafe { std::env::remove_var("TEST_OVERRIDE_GET_MY_KEY") };
    }

    #[test]
    fn test_env_provider_not_found() {
        let provider = EnvOverrideProvider::namespaced("NONEXISTENT_NAMESPACE_");
        assert_eq!(provider.get("SOME_KEY"), None);
    }
}
