use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// How the CLI writes the converted article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comment-delimited block document (what the host CMS persists).
    #[default]
    Blocks,
    /// Structured JSON view of the block sequence.
    Json,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Root directory that relative draft paths resolve against.
    pub drafts_path: PathBuf,
    /// Output format used when the command line does not name one.
    #[serde(default)]
    pub output_format: OutputFormat,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded drafts path
        config.drafts_path = Self::expand_path(&config.drafts_path).unwrap_or(config.drafts_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/draftblocks");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        // Should contain the expected config file name
        assert!(path_str.ends_with(".config/draftblocks/config.toml"));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            drafts_path: PathBuf::from("/tmp/test-drafts"),
            output_format: OutputFormat::Json,
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original.drafts_path, deserialized.drafts_path);
        assert_eq!(original.output_format, deserialized.output_format);
    }

    #[test]
    fn test_output_format_defaults_to_blocks() {
        let config: Config = toml::from_str(r#"drafts_path = "/tmp/drafts""#).unwrap();
        assert_eq!(config.output_format, OutputFormat::Blocks);
    }

    #[test]
    fn test_output_format_parses_lowercase_names() {
        let config: Config =
            toml::from_str("drafts_path = \"/tmp/drafts\"\noutput_format = \"json\"").unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path);

        assert!(expanded.is_some());
        let expanded = expanded.unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_absolute_path() {
        let path = PathBuf::from("/absolute/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        let test_config = Config {
            drafts_path: PathBuf::from("/tmp/test-drafts"),
            output_format: OutputFormat::Blocks,
        };

        // Test saving
        test_config.save_to_path(&config_file).unwrap();

        // Test loading
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config.drafts_path, test_config.drafts_path);
        assert_eq!(loaded_config.output_format, test_config.output_format);
    }

    #[test]
    fn test_config_with_tilde_in_toml() {
        let config_content = r#"
drafts_path = "~/test/drafts"
"#;

        let mut config: Config = toml::from_str(config_content).unwrap();
        config.drafts_path = Config::expand_path(&config.drafts_path).unwrap_or(config.drafts_path);

        let expanded_path = config.drafts_path.to_string_lossy();
        assert!(!expanded_path.starts_with('~'));
        assert!(expanded_path.contains("test/drafts"));
    }

    #[test]
    fn test_malformed_config_is_a_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "drafts_path = 42").unwrap();

        let result = Config::load_from_path(&config_file);
        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }
}
