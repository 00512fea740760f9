use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::{MIN_QUERY_CHARS, RESULT_LIMIT};
use crate::error::{PortalError, PortalResult};

/// Bucket label used when a result has no category.
pub const DEFAULT_FALLBACK_CATEGORY: &str = "Outros";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiescence window after the last keystroke, in milliseconds
    pub debounce_ms: u64,
    /// Normalized queries shorter than this never reach the matcher
    pub min_query_chars: usize,
    /// Result cap applied after ranking
    pub max_results: usize,
    /// Group label for results without a category
    pub fallback_category: String,
    /// Whether the static navigation destinations take part in matching
    pub include_builtin_destinations: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            min_query_chars: MIN_QUERY_CHARS,
            max_results: RESULT_LIMIT,
            fallback_category: DEFAULT_FALLBACK_CATEGORY.to_string(),
            include_builtin_destinations: true,
        }
    }
}

impl SearchConfig {
    /// Get the config file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .map(|h| h.join(".config"))
                    .unwrap_or_else(|| PathBuf::from("/tmp"))
            })
            .join("portal")
            .join("search.toml")
    }

    /// Load config from the default path, or return defaults if it is
    /// missing or unreadable
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to load search config, using defaults");
                Self::default()
            }
        }
    }

    /// Load and validate config from a specific file
    pub fn load_from(path: &Path) -> PortalResult<Self> {
        let content = fs::read_to_string(path)?;
        let mut config = Self::from_toml(&content)?;
        config.validate();
        tracing::debug!(path = %path.display(), "Loaded search config");
        Ok(config)
    }

    /// Parse config from a TOML string without validating it
    pub fn from_toml(content: &str) -> PortalResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Validate and clamp config values to acceptable ranges
    pub fn validate(&mut self) {
        self.debounce_ms = self.debounce_ms.min(5_000);
        self.min_query_chars = self.min_query_chars.clamp(1, 32);
        self.max_results = self.max_results.clamp(1, 100);

        if self.fallback_category.trim().is_empty() {
            self.fallback_category = DEFAULT_FALLBACK_CATEGORY.to_string();
        }
    }

    /// The debounce window as a `Duration`
    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Save config to the default path
    pub fn save(&self) -> PortalResult<()> {
        self.save_to(&Self::config_path())
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> PortalResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                PortalError::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_constants() {
        let config = SearchConfig::default();
        assert_eq!(config.debounce_window(), Duration::from_millis(300));
        assert_eq!(config.min_query_chars, 2);
        assert_eq!(config.max_results, 10);
        assert!(config.include_builtin_destinations);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = SearchConfig::from_toml("max_results = 5").unwrap();
        assert_eq!(config.max_results, 5);
        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.fallback_category, "Outros");
    }

    #[test]
    fn test_validate_clamps() {
        let mut config = SearchConfig {
            debounce_ms: 60_000,
            min_query_chars: 0,
            max_results: 1_000,
            fallback_category: "  ".to_string(),
            include_builtin_destinations: false,
        };
        config.validate();

        assert_eq!(config.debounce_ms, 5_000);
        assert_eq!(config.min_query_chars, 1);
        assert_eq!(config.max_results, 100);
        assert_eq!(config.fallback_category, DEFAULT_FALLBACK_CATEGORY);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let err = SearchConfig::from_toml("max_results = \"many\"").unwrap_err();
        assert!(matches!(err, PortalError::TomlParse(_)));
    }

    #[test]
    fn test_save_and_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("search.toml");

        let config = SearchConfig {
            debounce_ms: 150,
            ..SearchConfig::default()
        };
        config.save_to(&path).unwrap();

        let loaded = SearchConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SearchConfig::load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, PortalError::Io(_)));
    }
}
