//! Engine configuration
//!
//! Stored as pretty JSON. A missing file means defaults: cache disabled,
//! and unbounded when enabled.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root cache settings
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Whether the engine memoizes roots by fingerprint
    pub enabled: bool,
    /// Upper bound on stored roots; `None` keeps every root
    pub max_entries: Option<usize>,
}

impl CacheConfig {
    /// Enabled and unbounded
    pub fn enabled() -> Self {
        CacheConfig {
            enabled: true,
            max_entries: None,
        }
    }

    /// Enabled with at most `max_entries` roots
    pub fn bounded(max_entries: usize) -> Self {
        CacheConfig {
            enabled: true,
            max_entries: Some(max_entries),
        }
    }
}

/// Configuration for a [`Merkleizer`](crate::Merkleizer)
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub cache: CacheConfig,
}

impl EngineConfig {
    /// Configuration with an unbounded root cache
    pub fn cached() -> Self {
        EngineConfig {
            cache: CacheConfig::enabled(),
        }
    }

    /// Load configuration from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: EngineConfig = serde_json::from_str(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.cache.enabled && self.cache.max_entries == Some(0) {
            return Err(Error::Config(
                "cache.max_entries must be positive when the cache is enabled".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_disables_cache() {
        let config = EngineConfig::default();
        assert!(!config.cache.enabled);
        assert_eq!(config.cache.max_entries, None);
    }

    #[test]
    fn test_config_save_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ssz_root.json");

        let config = EngineConfig {
            cache: CacheConfig::bounded(1024),
        };
        config.save(&path).unwrap();

        assert_eq!(EngineConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_config_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let config = EngineConfig::load(dir.path().join("absent.json")).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_config_partial_json_uses_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"cache":{"enabled":true}}"#).unwrap();
        assert_eq!(config, EngineConfig::cached());

        let empty: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, EngineConfig::default());
    }

    #[test]
    fn test_config_rejects_zero_bound() {
        let config = EngineConfig {
            cache: CacheConfig::bounded(0),
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        config.save(&path).unwrap();
        assert!(matches!(EngineConfig::load(&path), Err(Error::Config(_))));
    }
}
