use crate::finder::BoundsCheck;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG: &str = ".wordsearch.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub bounds: BoundsCheck,
    pub ignore_case: bool,
    pub format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bounds: BoundsCheck::default(),
            ignore_case: false,
            format: "text".to_string(),
        }
    }
}

/// One config file. Keys left out of the file leave lower layers alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    pub bounds: Option<BoundsCheck>,
    pub ignore_case: Option<bool>,
    pub format: Option<String>,
}

impl ConfigFile {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

/// Command-line values that take precedence over config files.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub bounds: Option<BoundsCheck>,
    pub ignore_case: bool,
    pub format: Option<String>,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: &Overrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                config = config.merge(ConfigFile::from_file(&global_path)?);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG);
        if local_path.exists() {
            config = config.merge(ConfigFile::from_file(&local_path)?);
        }

        Ok(config.apply(overrides))
    }

    fn merge(mut self, layer: ConfigFile) -> Self {
        if let Some(bounds) = layer.bounds {
            self.bounds = bounds;
        }
        if let Some(ignore_case) = layer.ignore_case {
            self.ignore_case = ignore_case;
        }
        if let Some(format) = layer.format {
            self.format = format;
        }
        self
    }

    fn apply(mut self, overrides: &Overrides) -> Self {
        if let Some(bounds) = overrides.bounds {
            self.bounds = bounds;
        }
        if overrides.ignore_case {
            self.ignore_case = true;
        }
        if let Some(format) = &overrides.format {
            self.format = format.clone();
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "wordsearch").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(toml_text: &str) -> ConfigFile {
        toml::from_str(toml_text).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.bounds, BoundsCheck::Strict);
        assert_eq!(config.format, "text");
        assert!(!config.ignore_case);
    }

    #[test]
    fn test_merge_configs() {
        let merged = Config::default().merge(layer("bounds = \"legacy\""));
        assert_eq!(merged.bounds, BoundsCheck::Legacy);
        assert_eq!(merged.format, "text");
    }

    #[test]
    fn test_unset_keys_keep_lower_layer() {
        let merged = Config::default()
            .merge(layer("ignore_case = true"))
            .merge(layer("format = \"json\""));

        assert!(merged.ignore_case);
        assert_eq!(merged.format, "json");
    }

    #[test]
    fn test_local_can_restore_defaults() {
        let merged = Config::default()
            .merge(layer("bounds = \"legacy\"\nignore_case = true\nformat = \"json\""))
            .merge(layer("bounds = \"strict\"\nignore_case = false\nformat = \"text\""));

        assert_eq!(merged, Config::default());
    }

    #[test]
    fn test_cli_overrides_win() {
        let file = Config::default().merge(layer("format = \"json\"\nbounds = \"legacy\""));
        let overrides = Overrides {
            bounds: Some(BoundsCheck::Strict),
            ignore_case: true,
            format: Some("text".to_string()),
        };

        let config = file.apply(&overrides);
        assert_eq!(config.bounds, BoundsCheck::Strict);
        assert!(config.ignore_case);
        assert_eq!(config.format, "text");

        let untouched = Config::default()
            .merge(layer("bounds = \"legacy\""))
            .apply(&Overrides::default());
        assert_eq!(untouched.bounds, BoundsCheck::Legacy);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "bounds = \"legacy\"\nignore_case = true\n").unwrap();

        let file = ConfigFile::from_file(&path).unwrap();
        assert_eq!(file.bounds, Some(BoundsCheck::Legacy));
        assert_eq!(file.ignore_case, Some(true));
        assert_eq!(file.format, None);

        fs::write(&path, "bounds = \"sideways\"\n").unwrap();
        let err = ConfigFile::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
