use crate::error::{HouseError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "house_data1.json";
const DEFAULT_BACKUP_FILE: &str = "house_data.json";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration for the registry, stored in `<data-dir>/config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct HouseConfig {
    /// Main document, rewritten after every change
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Target of the manual save/load menu items
    #[serde(default = "default_backup_file")]
    pub backup_file: String,

    /// trace|debug|info|warn|error
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_backup_file() -> String {
    DEFAULT_BACKUP_FILE.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for HouseConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            backup_file: default_backup_file(),
            log_level: default_log_level(),
        }
    }
}

impl HouseConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(HouseError::Io)?;
        let config: HouseConfig = serde_json::from_str(&content)
            .map_err(|e| HouseError::Config(format!("{}: {}", config_path.display(), e)))?;
        Ok(config)
    }

    pub fn data_path(&self, data_dir: &Path) -> PathBuf {
        resolve(data_dir, &self.data_file)
    }

    pub fn backup_path(&self, data_dir: &Path) -> PathBuf {
        resolve(data_dir, &self.backup_file)
    }
}

fn resolve(data_dir: &Path, file: &str) -> PathBuf {
    let path = Path::new(file);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        data_dir.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = HouseConfig::default();
        assert_eq!(config.data_file, "house_data1.json");
        assert_eq!(config.backup_file, "house_data.json");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempdir().unwrap();
        let config = HouseConfig::load(dir.path()).unwrap();
        assert_eq!(config, HouseConfig::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"log_level": "debug"}"#).unwrap();

        let config = HouseConfig::load(dir.path()).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.data_file, "house_data1.json");
    }

    #[test]
    fn test_malformed_config_is_config_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{ nope").unwrap();

        let err = HouseConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, HouseError::Config(_)));
    }

    #[test]
    fn test_full_config_overrides_every_default() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"data_file": "main.json", "backup_file": "copy.json", "log_level": "warn"}"#,
        )
        .unwrap();

        let config = HouseConfig::load(dir.path()).unwrap();
        assert_eq!(
            config,
            HouseConfig {
                data_file: "main.json".to_string(),
                backup_file: "copy.json".to_string(),
                log_level: "warn".to_string(),
            }
        );
    }

    #[test]
    fn test_paths_resolve_against_data_dir() {
        let dir = tempdir().unwrap();
        let absolute = dir.path().join("elsewhere.json");
        let config = HouseConfig {
            backup_file: absolute.to_string_lossy().into_owned(),
            ..HouseConfig::default()
        };

        assert_eq!(
            config.data_path(Path::new("/data")),
            Path::new("/data").join("house_data1.json")
        );
        assert_eq!(config.backup_path(Path::new("/data")), absolute);
    }
}
