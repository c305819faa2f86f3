//! Configuration utilities

use crate::sentiment::{LabelPreset, OutputFormat, ScoreLabels};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Score label settings
    pub labels: LabelSettings,
    /// Output settings
    pub output: OutputSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Score label settings: a preset plus optional per-score overrides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelSettings {
    /// Base label set
    pub preset: LabelPreset,
    pub negative: Option<String>,
    pub neutral: Option<String>,
    pub positive: Option<String>,
    pub compound: Option<String>,
}

impl LabelSettings {
    /// Resolve the preset and overrides into concrete labels
    pub fn resolve(&self) -> ScoreLabels {
        let base = ScoreLabels::from(self.preset);
        ScoreLabels {
            negative: self.negative.clone().unwrap_or(base.negative),
            neutral: self.neutral.clone().unwrap_or(base.neutral),
            positive: self.positive.clone().unwrap_or(base.positive),
            compound: self.compound.clone().unwrap_or(base.compound),
        }
    }
}

/// Output settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Output format (json, text)
    pub format: OutputFormat,
    /// Append tone, bias signals and risk note to `analyze` output
    pub interpret: bool,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// File formats a configuration can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
    Yaml,
}

impl ConfigFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match ext {
            "json" => Ok(ConfigFormat::Json),
            "toml" => Ok(ConfigFormat::Toml),
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }

    fn parse(self, content: &str) -> Result<AppConfig, String> {
        match self {
            ConfigFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

/// Load configuration from a `.json`, `.toml` or `.yaml` file.
///
/// Sections and keys left out of the file keep their defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    format.parse(&content).map_err(|message| ConfigError::Parse { format, message })
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {message}")]
    Read { path: String, message: String },
    #[error("invalid {format:?} config: {message}")]
    Parse {
        format: ConfigFormat,
        message: String,
    },
    #[error("unsupported config format: '{0}'")]
    UnsupportedFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.labels.preset, LabelPreset::Semantic);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.interpret);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_label_overrides() {
        let settings = LabelSettings {
            preset: LabelPreset::Original,
            compound: Some("overall".to_string()),
            ..Default::default()
        };
        let labels = settings.resolve();

        assert_eq!(labels.negative, "negatif_skor");
        assert_eq!(labels.compound, "overall");
    }

    #[test]
    fn test_load_toml() {
        let file = write_config(
            ".toml",
            r#"
[labels]
preset = "original"

[output]
format = "text"
"#,
        );
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.labels.preset, LabelPreset::Original);
        assert_eq!(config.output.format, OutputFormat::Text);
        // Missing sections fall back to defaults
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_json_partial() {
        let file = write_config(".json", r#"{"labels": {"neutral": "calm"}}"#);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.labels.resolve().neutral, "calm");
        assert_eq!(config.labels.resolve().positive, "positive_score");
    }

    #[test]
    fn test_load_yaml() {
        let file = write_config(
            ".yml",
            "output:\n  interpret: true\nlogging:\n  level: debug\n",
        );
        let config = load_config(file.path()).unwrap();

        assert!(config.output.interpret);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.labels.preset, LabelPreset::Semantic);
    }

    #[test]
    fn test_unsupported_format() {
        let file = write_config(".ini", "level=info");
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(ref ext) if ext == "ini"));
    }

    #[test]
    fn test_format_checked_before_reading() {
        // No such file, but the extension is rejected first
        let err = load_config("/nonexistent/zenith").unwrap_err();
        assert_eq!(err.to_string(), "unsupported config format: ''");
    }

    #[test]
    fn test_missing_file() {
        let err = load_config("/nonexistent/zenith.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { ref path, .. } if path == "/nonexistent/zenith.toml"));
    }

    #[test]
    fn test_malformed_toml() {
        let file = write_config(".toml", "[labels\npreset = ");
        assert!(matches!(
            load_config(file.path()).unwrap_err(),
            ConfigError::Parse {
                format: ConfigFormat::Toml,
                ..
            }
        ));
    }
}
