use ini_blocks_engine::LoadOptions;
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rewrite CRLF line endings before parsing.
    pub normalize_line_endings: bool,
    /// File to open when none is given on the command line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            normalize_line_endings: LoadOptions::native().normalize_line_endings,
            default_file: None,
        }
    }
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

        // Expand shell variables and tilde in the default file path
        config.default_file = config
            .default_file
            .map(|path| Self::expand_path(&path).unwrap_or(path));

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

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/ini-blocks");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            normalize_line_endings: self.normalize_line_endings,
        }
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
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/ini-blocks/config.toml"));
    }

    #[test]
    fn test_default_follows_host_line_endings() {
        let config = Config::default();
        assert_eq!(config.normalize_line_endings, cfg!(windows));
        assert!(config.default_file.is_none());
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            normalize_line_endings: true,
            default_file: Some(PathBuf::from("/tmp/app.ini")),
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());

        let config: Config = toml::from_str("normalize_line_endings = true\n").unwrap();
        assert!(config.normalize_line_endings);
        assert!(config.default_file.is_none());
    }

    #[test]
    fn test_load_options_mirror_config() {
        let config = Config {
            normalize_line_endings: true,
            default_file: None,
        };
        assert!(config.load_options().normalize_line_endings);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/app.ini");
        let expanded = Config::expand_path(&path).unwrap();

        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/app.ini"));
    }

    #[test]
    fn test_expand_path_with_absolute_path() {
        let path = PathBuf::from("/absolute/app.ini");
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
    fn test_load_invalid_config_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "normalize_line_endings = \"yes\"\n").unwrap();

        let result = Config::load_from_path(&config_file);

        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let test_config = Config {
            normalize_line_endings: true,
            default_file: Some(PathBuf::from("/tmp/app.ini")),
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_default_file_env_var_in_toml() {
        unsafe {
            env::set_var("INI_BLOCKS_TEST_ROOT", "/custom/etc");
        }

        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_file,
            "default_file = \"$INI_BLOCKS_TEST_ROOT/app.ini\"\n",
        )
        .unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(config.default_file, Some(PathBuf::from("/custom/etc/app.ini")));

        unsafe {
            env::remove_var("INI_BLOCKS_TEST_ROOT");
        }
    }
}
