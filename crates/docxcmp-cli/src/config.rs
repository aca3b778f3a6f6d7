//! Configuration settings
//!
//! `docxcmp.toml` supplies defaults for output and logging. Every section and
//! field is optional; command-line flags take precedence over the file.
//!
//! ```toml
//! [output]
//! format = "json"
//! pretty = true
//!
//! [logging]
//! filter = "docxcmp_core=debug"
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// File looked up in the working directory when `--config` is not given
pub const CONFIG_FILE_NAME: &str = "docxcmp.toml";

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripts and services
    Json,
}

/// Top-level settings structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub output: OutputSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Read settings from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Resolve the settings for a run.
    ///
    /// An explicit path must exist. Without one, `docxcmp.toml` in `dir` is
    /// used when present, otherwise the defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::from_file(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// [`Settings::discover`] in the working directory
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::discover(explicit, Path::new("."))
    }
}

/// `[output]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Format of the comparison verdict
    pub format: OutputFormat,
    /// Pretty-print JSON output
    pub pretty: bool,
}

/// `[logging]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directives; `RUST_LOG` wins when set
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.output.format, OutputFormat::Text);
        assert!(!settings.output.pretty);
        assert_eq!(settings.logging.filter, "warn");
    }

    #[test]
    fn test_parse_full_config() {
        let settings = Settings::from_toml_str(
            r#"
[output]
format = "json"
pretty = true

[logging]
filter = "docxcmp_core=debug"
"#,
        )
        .unwrap();

        assert_eq!(settings.output.format, OutputFormat::Json);
        assert!(settings.output.pretty);
        assert_eq!(settings.logging.filter, "docxcmp_core=debug");
    }

    #[test]
    fn test_parse_partial_config() {
        let settings = Settings::from_toml_str("[output]\npretty = true\n").unwrap();
        assert_eq!(settings.output.format, OutputFormat::Text);
        assert!(settings.output.pretty);
        assert_eq!(settings.logging, LoggingSettings::default());

        assert_eq!(Settings::from_toml_str("").unwrap(), Settings::default());
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Settings::from_toml_str("[output]\nformat = \"xml\"\n").is_err());
    }

    #[test]
    fn test_discover() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Settings::discover(None, dir.path()).unwrap(), Settings::default());

        fs::write(dir.path().join(CONFIG_FILE_NAME), "[output]\nformat = \"json\"\n").unwrap();
        let settings = Settings::discover(None, dir.path()).unwrap();
        assert_eq!(settings.output.format, OutputFormat::Json);

        // An explicit file replaces the discovered one
        let explicit = dir.path().join("other.toml");
        fs::write(&explicit, "[output]\npretty = true\n").unwrap();
        let settings = Settings::discover(Some(&explicit), dir.path()).unwrap();
        assert_eq!(settings.output.format, OutputFormat::Text);
        assert!(settings.output.pretty);
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");

        let err = Settings::discover(Some(&missing), dir.path()).unwrap_err();
        assert!(err.to_string().contains("missing.toml"));
    }
}
