//! Store configuration.

/// Storage key used by the browser build.
pub const DEFAULT_STORAGE_KEY: &str = "todos";

/// Quiet window before a content edit is committed.
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Configuration for a [`TodoStore`](crate::TodoStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Key the whole collection is written under.
    pub storage_key: String,

    /// Debounce delay in milliseconds.
    ///
    /// After a keystroke, the editor waits this long before committing.
    /// Additional keystrokes reset the timer.
    pub debounce_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl StoreConfig {
    /// Default config writing under a different key.
    pub fn with_key(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.storage_key, "todos");
        assert_eq!(config.debounce_ms, 500);
    }

    #[test]
    fn test_with_key() {
        let config = StoreConfig::with_key("scratch");
        assert_eq!(config.storage_key, "scratch");
        assert_eq!(config.debounce_ms, DEFAULT_DEBOUNCE_MS);
    }
}
