//! Configuration bag capture from the process environment and dotenv
//! overlays

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::Path;

/// Immutable bag of raw configuration values.
///
/// Captured once at startup; the rest of the pipeline only ever reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigBag {
    entries: BTreeMap<String, String>,
}

impl ConfigBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value for a field, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ConfigBag
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Captures configuration bags from the process environment, optionally
/// overlaid on a dotenv-style file.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Capture the bag from the process environment only.
    pub fn from_env() -> ConfigBag {
        std::env::vars().collect()
    }

    /// Capture the bag from the process environment with a dotenv-style
    /// file overlay.
    ///
    /// Process environment entries take precedence over file entries for
    /// any key present in both. The file is parsed without mutating the
    /// process environment, so repeated loads see the same inputs.
    pub fn from_env_with_overlay<P: AsRef<Path>>(path: P) -> Result<ConfigBag> {
        let path = path.as_ref();
        let iter = dotenv::from_path_iter(path)
            .with_context(|| format!("Failed to open env file: {}", path.display()))?;

        let mut entries = BTreeMap::new();
        for item in iter {
            let (key, value) = item
                .with_context(|| format!("Failed to parse env file: {}", path.display()))?;
            entries.insert(key, value);
        }
        for (key, value) in std::env::vars() {
            entries.insert(key, value);
        }

        Ok(ConfigBag { entries })
    }
}
