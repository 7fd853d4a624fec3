//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use textsplit_engine::SplitterConfig;

use crate::error::CliError;
use crate::input::FileReader;
use crate::output::OutputFormat;

/// Commented template written by `generate-config`
pub const TEMPLATE: &str = r#"# textsplit configuration

[splitting]
# Unit counted per chunk: "paragraph", "sentence", "line", "word" or "pattern"
unit = "paragraph"

# Maximum number of units per chunk
max_units_per_chunk = 4

# Regular expression used when unit = "pattern"; each match starts a new unit
# pattern = '(\r?\n|\r)\s*#+'

# Share of each chunk's span re-included from the previous chunk, in [0, 100)
overlap_percent = 0.0

# Trim leading and trailing whitespace from every chunk
trim_whitespace = false

[output]
# Output format: "text", "json" or "markdown"
format = "text"

# Pretty print JSON output
pretty_json = true

# Written after every chunk in text output
separator = "\n\n"
"#;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Splitter configuration
    #[serde(default)]
    pub splitting: SplitterConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,

    /// Separator written after every chunk in text output
    pub separator: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty_json: true,
            separator: "\n\n".to_string(),
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let content = FileReader::read_text(path)?;
        let config: CliConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration: {}", path.display()))?;
        log::debug!("Loaded configuration from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Check the splitting section without building a splitter
    pub fn validate(&self) -> Result<()> {
        self.splitting
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use textsplit_engine::SplitUnit;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_template_matches_defaults() {
        let config: CliConfig = toml::from_str(TEMPLATE).unwrap();
        assert_eq!(config, CliConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let file = write_config(
            r#"
[splitting]
unit = "sentence"
max_units_per_chunk = 3
"#,
        );

        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.splitting.unit, SplitUnit::Sentence);
        assert_eq!(config.splitting.max_units_per_chunk, 3);
        assert!(!config.splitting.trim_whitespace);
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_output_section() {
        let file = write_config(
            r#"
[output]
format = "json"
pretty_json = false
"#,
        );

        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.pretty_json);
    }

    #[test]
    fn test_missing_file() {
        let err = CliConfig::from_file(Path::new("/nonexistent/textsplit.toml")).unwrap_err();
        assert!(err.to_string().starts_with("File not found:"));
    }

    #[test]
    fn test_malformed_file() {
        let file = write_config("[splitting\nunit = ");
        let err = CliConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse configuration"));
    }

    #[test]
    fn test_validate_reports_bad_values() {
        let file = write_config(
            r#"
[splitting]
max_units_per_chunk = 0
"#,
        );

        let config = CliConfig::from_file(file.path()).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().starts_with("Configuration error:"));
    }
}
