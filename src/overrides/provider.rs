//! Override Provider Trait

use tracing::warn;

/// Core override provider trait.
///
/// Implementations are read-only snapshots for the lifetime of a resolution
/// call; the value backing a key may change between calls (operator tuning)
/// but never during one.
pub trait OverrideProvider: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &str;

    /// Get a raw override value; `None` means "no override".
    fn get(&self, key: &str) -> Option<String>;
}

/// Extension methods for typed override access.
///
/// Every accessor is total: a value that fails to parse is logged and
/// discarded, indistinguishable from an absent key to the caller.
pub trait OverrideProviderExt: OverrideProvider {
    /// Get an integer override; malformed values are discarded.
    fn get_i64(&self, key: &str) -> Option<i64> {
        let raw = self.get(key)?;
        match raw.trim().parse::<i64>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(
                    provider = self.name(),
                    key,
                    raw = %raw,
                    "discarding non-integer override"
                );
                None
            }
        }
    }

    /// Get a floating-point override; malformed values are discarded.
    fn get_f64(&self, key: &str) -> Option<f64> {
        let raw = self.get(key)?;
        match raw.trim().parse::<f64>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(
                    provider = self.name(),
                    key,
                    raw = %raw,
                    "discarding non-numeric override"
                );
                None
            }
        }
    }

    /// Get a string override; empty and whitespace-only values are discarded.
    fn get_str(&self, key: &str) -> Option<String> {
        let raw = self.get(key)?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

impl<P: OverrideProvider + ?Sized> OverrideProviderExt for P {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overrides::MemoryOverrideProvider;

    #[test]
    fn test_typed_access() {
        let provider = MemoryOverrideProvider::new()
            .value("INT", "42")
            .value("FLOAT", "0.7")
            .value("PADDED", " 99 ")
            .value("WORDS", "not-a-number")
            .value("EMPTY", "   ");

        assert_eq!(provider.get_i64("INT"), Some(42));
        assert_eq!(provider.get_i64("PADDED"), Some(99));
        assert_eq!(provider.get_f64("FLOAT"), Some(0.7));
        assert_eq!(provider.get_str("INT"), Some("42".to_string()));

        // Malformed == absent
        assert_eq!(provider.get_i64("WORDS"), None);
        assert_eq!(provider.get_f64("WORDS"), None);
        assert_eq!(provider.get_str("EMPTY"), None);
        assert_eq!(provider.get_i64("MISSING"), None);
    }

    #[test]
    fn test_float_key_is_not_an_integer() {
        let provider = MemoryOverrideProvider::new().value("VALUE", "1.5");
        assert_eq!(provider.get_i64("VALUE"), None);
        assert_eq!(provider.get_f64("VALUE"), Some(1.5));
    }
}
