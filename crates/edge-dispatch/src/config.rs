//! Dispatcher configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use edge_observability::{LogConfig, ObservabilityError};
use edge_router::ClassifierOptions;
use serde::Deserialize;

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level dispatcher configuration. Every field has a default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    pub logging: LogConfig,
    pub render: RenderConfig,
    pub classifier: ClassifierOptions,
}

/// Render settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// End still-open responses with 504 after this many milliseconds.
    pub deadline_ms: Option<u64>,
}

impl RenderConfig {
    /// The render deadline, if one is configured.
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline_ms
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
    }
}

impl DispatchConfig {
    /// Parse configuration from TOML.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Install the global log subscriber described by `logging`.
    ///
    /// Fails if a subscriber is already installed.
    pub fn init_logging(&self) -> Result<(), ObservabilityError> {
        edge_observability::init_logging(&self.logging)
    }

    /// Set logging configuration.
    pub fn with_logging(mut self, logging: LogConfig) -> Self {
        self.logging = logging;
        self
    }

    /// Set the render deadline.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.render.deadline_ms = Some(deadline.as_millis() as u64);
        self
    }

    /// Set classifier options.
    pub fn with_classifier(mut self, classifier: ClassifierOptions) -> Self {
        self.classifier = classifier;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edge_observability::LogFormat;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = DispatchConfig::from_toml_str("").unwrap();

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.render.deadline().is_none());
        assert_eq!(config.classifier.data_prefix, "/_next/data");
        assert_eq!(config.classifier.error_page, "/_error");
    }

    #[test]
    fn test_full_config() {
        let config = DispatchConfig::from_toml_str(
            r#"
            [logging]
            level = "debug"
            format = "human"

            [render]
            deadline_ms = 29000

            [classifier]
            error_page = "/_custom_error"
            preview_cookie = "__preview"
            "#,
        )
        .unwrap();

        assert_eq!(config.logging.format, LogFormat::Human);
        assert_eq!(config.render.deadline(), Some(Duration::from_secs(29)));
        assert_eq!(config.classifier.error_page, "/_custom_error");
        assert_eq!(config.classifier.preview_cookie, "__preview");
        assert_eq!(config.classifier.static_prefix, "/_next/static");
    }

    #[test]
    fn test_zero_deadline_disabled() {
        let config = DispatchConfig::from_toml_str("[render]\ndeadline_ms = 0").unwrap();
        assert!(config.render.deadline().is_none());
    }

    #[test]
    fn test_invalid_config() {
        let err = DispatchConfig::from_toml_str("[render]\ndeadline_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = DispatchConfig::load("/nonexistent/dispatch.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_init_logging_installs_once() {
        let config = DispatchConfig::from_toml_str("[logging]\nformat = \"human\"").unwrap();

        let _ = config.init_logging();
        assert!(matches!(config.init_logging(), Err(ObservabilityError::Init(_))));
    }

    #[test]
    fn test_builders() {
        let config = DispatchConfig::default()
            .with_deadline(Duration::from_millis(1500))
            .with_classifier(ClassifierOptions::default().with_error_page("/oops"));

        assert_eq!(config.render.deadline_ms, Some(1500));
        assert_eq!(config.classifier.error_page, "/oops");
    }
}
