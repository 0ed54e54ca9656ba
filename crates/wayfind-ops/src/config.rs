//! Configuration for the operations layer.

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{OpsError, OpsResult};

/// Keys accepted by [`Config::get`] and [`Config::set`].
pub const CONFIG_KEYS: &[&str] = &["data_dir", "bind", "seed_demo"];

/// Configuration for Wayfind operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding `graph.json`.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Address the API server listens on.
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Seed the demo hospital floor when the store is empty.
    #[serde(default = "default_seed_demo")]
    pub seed_demo: bool,
}

fn default_data_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".wayfind"))
}

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_seed_demo() -> bool {
    true
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "wayfind", "wayfind")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            bind: default_bind(),
            seed_demo: default_seed_demo(),
        }
    }
}

impl Config {
    /// Load configuration from disk with environment overrides.
    pub fn load() -> OpsResult<Self> {
        let config = match Self::config_file_path() {
            Some(path) if path.exists() => {
                let contents = std::fs::read_to_string(&path)?;
                serde_json::from_str(&contents)?
            }
            _ => Self::default(),
        };

        Ok(config.with_env_overrides())
    }

    /// Apply `WAYFIND_DATA_DIR` and `WAYFIND_BIND` when set.
    pub fn with_env_overrides(self) -> Self {
        Self {
            data_dir: std::env::var_os("WAYFIND_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(self.data_dir),
            bind: std::env::var("WAYFIND_BIND").unwrap_or(self.bind),
            ..self
        }
    }

    /// Save configuration to disk.
    pub fn save(&self) -> OpsResult<()> {
        if let Some(path) = Self::config_file_path() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let contents = serde_json::to_string_pretty(self)?;
            std::fs::write(&path, contents)?;
        }
        Ok(())
    }

    /// Get the path to the configuration file.
    pub fn config_file_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Get a configuration value by key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data_dir" => Some(self.data_dir.display().to_string()),
            "bind" => Some(self.bind.clone()),
            "seed_demo" => Some(self.seed_demo.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key.
    pub fn set(&mut self, key: &str, value: &str) -> OpsResult<()> {
        match key {
            "data_dir" => {
                self.data_dir = PathBuf::from(value);
            }
            "bind" => {
                self.bind = value.to_string();
            }
            "seed_demo" => {
                self.seed_demo = value
                    .parse()
                    .map_err(|_| OpsError::Config(format!("Invalid boolean: {}", value)))?;
            }
            _ => {
                return Err(OpsError::Config(format!("Unknown config key: {}", key)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_set() {
        let mut config = Config::default();

        config.set("bind", "0.0.0.0:8080").unwrap();
        config.set("seed_demo", "false").unwrap();
        config.set("data_dir", "/tmp/wayfind").unwrap();

        assert_eq!(config.get("bind").as_deref(), Some("0.0.0.0:8080"));
        assert_eq!(config.get("seed_demo").as_deref(), Some("false"));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/wayfind"));
        assert_eq!(config.get("nope"), None);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();

        assert!(matches!(
            config.set("seed_demo", "maybe"),
            Err(OpsError::Config(_))
        ));
        assert!(matches!(config.set("colour", "red"), Err(OpsError::Config(_))));
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: Config = serde_json::from_str(r#"{"bind": "127.0.0.1:9999"}"#).unwrap();

        assert_eq!(config.bind, "127.0.0.1:9999");
        assert!(config.seed_demo);
        assert_eq!(config.data_dir, default_data_dir());
    }
}
