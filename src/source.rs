//! Key/value sources that feed field bindings.

use std::collections::HashMap;

/// A string-to-string lookup, such as the process environment.
///
/// A key that is not present resolves to the empty string; the binding
/// engine treats "present but empty" and "absent" identically.
pub trait KeySource: Send + Sync + std::fmt::Debug {
    /// Returns the value for `key`, or the empty string if unset.
    fn get(&self, key: &str) -> String;
}

/// A key source backed by the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSource;

impl KeySource for EnvSource {
    fn get(&self, key: &str) -> String {
        // A non-unicode value is as unusable as a missing one.
        std::env::var(key).unwrap_or_default()
    }
}

/// An in-memory key source.
///
/// Useful for tests and for binding from programmatic key/value data
/// without touching the process environment.
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    entries: HashMap<String, String>,
}

impl MapSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, replacing any previous value for the key.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }
}

impl KeySource for MapSource {
    fn get(&self, key: &str) -> String {
        self.entries.get(key).cloned().unwrap_or_default()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapSource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_source_lookup() {
        let source = MapSource::new().with("DB_HOST", "localhost");

        assert_eq!(source.get("DB_HOST"), "localhost");
        assert_eq!(source.get("DB_PORT"), "");
    }

    #[test]
    fn test_map_source_from_iter() {
        let source: MapSource = [("A", "1"), ("B", "2")].into_iter().collect();

        assert_eq!(source.get("A"), "1");
        assert_eq!(source.get("B"), "2");
    }

    #[test]
    fn test_env_source_absent_key_is_empty() {
        let source = EnvSource;

        assert_eq!(source.get("ENVBIND_TEST_NO_SUCH_KEY"), "");
    }
}
