//! Runtime user preferences for the MiniC front end
//!
//! Preferences tune logging and metrics collection only. Tokenization and
//! parsing semantics are fixed and cannot be reconfigured at runtime.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Log level selection as it appears in configuration profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warning,
    #[default]
    Info,
    Debug,
}

impl LogLevel {
    /// Convert to the logging subsystem's level type
    pub fn to_events_log_level(self) -> crate::logging::LogLevel {
        match self {
            LogLevel::Error => crate::logging::LogLevel::Error,
            LogLevel::Warning => crate::logging::LogLevel::Warning,
            LogLevel::Info => crate::logging::LogLevel::Info,
            LogLevel::Debug => crate::logging::LogLevel::Debug,
        }
    }
}

/// Preferences for the global logging system
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Minimum level that will be emitted
    pub min_log_level: LogLevel,
    /// Emit JSON events instead of human-readable lines
    pub use_structured_logging: bool,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            min_log_level: LogLevel::Info,
            use_structured_logging: false,
        }
    }
}

/// Preferences for lexical analysis reporting
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LexicalPreferences {
    /// Include the per-class token statistics in the completion log line
    pub log_token_statistics: bool,
    /// Warn when the preprocessed source exceeds the large-source threshold
    pub warn_on_large_source: bool,
}

impl Default for LexicalPreferences {
    fn default() -> Self {
        Self {
            log_token_statistics: true,
            warn_on_large_source: true,
        }
    }
}

/// Preferences for the file processor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProcessorPreferences {
    /// Reject files whose extension is not `.mc`
    pub require_mc_extension: bool,
    /// Log timing information for each processed file
    pub enable_performance_logging: bool,
}

impl Default for FileProcessorPreferences {
    fn default() -> Self {
        Self {
            require_mc_extension: false,
            enable_performance_logging: true,
        }
    }
}

/// Complete runtime configuration profile, loadable from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub logging: LoggingPreferences,
    pub lexical: LexicalPreferences,
    pub file_processor: FileProcessorPreferences,
}

impl RuntimeConfig {
    /// Parse a configuration profile from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load a configuration profile from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, String> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read config {}: {}", path.display(), e))?;
        Self::from_toml_str(&text).map_err(|e| format!("invalid config {}: {}", path.display(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_reasonable() {
        let config = RuntimeConfig::default();
        assert_eq!(config.logging.min_log_level, LogLevel::Info);
        assert!(!config.logging.use_structured_logging);
        assert!(config.lexical.log_token_statistics);
        assert!(!config.file_processor.require_mc_extension);
    }

    #[test]
    fn parses_partial_toml_profile() {
        let text = r#"
            [logging]
            min_log_level = "debug"
            use_structured_logging = true

            [file_processor]
            require_mc_extension = true
        "#;

        let config = RuntimeConfig::from_toml_str(text).unwrap();
        assert_eq!(config.logging.min_log_level, LogLevel::Debug);
        assert!(config.logging.use_structured_logging);
        assert!(config.file_processor.require_mc_extension);
        // Unspecified sections fall back to defaults
        assert!(config.lexical.log_token_statistics);
    }

    #[test]
    fn rejects_unknown_level() {
        let text = r#"
            [logging]
            min_log_level = "verbose"
        "#;
        assert!(RuntimeConfig::from_toml_str(text).is_err());
    }

    #[test]
    fn round_trips_through_toml() {
        let config = RuntimeConfig {
            logging: LoggingPreferences {
                min_log_level: LogLevel::Warning,
                use_structured_logging: true,
            },
            ..Default::default()
        };

        let text = toml::to_string(&config).unwrap();
        let reparsed = RuntimeConfig::from_toml_str(&text).unwrap();
        assert_eq!(reparsed.logging.min_log_level, LogLevel::Warning);
        assert!(reparsed.logging.use_structured_logging);
    }
}
