use crate::error::{Result, UserStoreError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = ".userstore.json";
const DEFAULT_BOOTSTRAP_FILE: &str = "users.json";

/// Configuration for userstore, stored in `.userstore.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserStoreConfig {
    /// File created empty at startup if it does not exist yet
    #[serde(default = "default_bootstrap_file")]
    pub bootstrap_file: String,

    /// Write the collection as indented JSON
    #[serde(default)]
    pub pretty: bool,
}

fn default_bootstrap_file() -> String {
    DEFAULT_BOOTSTRAP_FILE.to_string()
}

impl Default for UserStoreConfig {
    fn default() -> Self {
        Self {
            bootstrap_file: default_bootstrap_file(),
            pretty: false,
        }
    }
}

impl UserStoreConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: UserStoreConfig =
            serde_json::from_str(&content).map_err(UserStoreError::Decode)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(UserStoreError::Encode)?;
        fs::write(config_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = UserStoreConfig::default();
        assert_eq!(config.bootstrap_file, "users.json");
        assert!(!config.pretty);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = UserStoreConfig::load(dir.path()).unwrap();
        assert_eq!(config, UserStoreConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested");

        let config = UserStoreConfig {
            bootstrap_file: "people.json".to_string(),
            pretty: true,
        };
        config.save(&nested).unwrap();

        let loaded = UserStoreConfig::load(&nested).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"pretty":true}"#).unwrap();

        let config = UserStoreConfig::load(dir.path()).unwrap();
        assert_eq!(config.bootstrap_file, "users.json");
        assert!(config.pretty);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "pretty = true").unwrap();

        let err = UserStoreConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, UserStoreError::Decode(_)));
    }
}
