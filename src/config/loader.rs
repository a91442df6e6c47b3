//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.roster.toml` in the working directory
//! 4. `~/.config/roster/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS, ENV_BASE_URL, ENV_PAGE_SIZE,
    ENV_TIMEOUT_SECS,
};
use crate::env::Env;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub pagination: PaginationConfig,
}

/// Where and how to reach the user directory API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Paging behaviour for list fetches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub page_size: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads the global config, then `.roster.toml` in `local_dir`, then
    /// applies environment variable overrides.
    pub fn load(local_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                config.merge(global);
            }
        }

        if let Some(dir) = local_dir {
            let local_path = dir.join(crate::constants::CONFIG_FILENAME);
            if local_path.exists() {
                let local = Self::load_file(&local_path)?;
                config.merge(local);
            }
        }

        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a config from a specific file.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(crate::constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge another config into this one (other wins for non-default values).
    fn merge(&mut self, other: Config) {
        let default_api = ApiConfig::default();
        if other.api.base_url != default_api.base_url {
            self.api.base_url = other.api.base_url;
        }
        if other.api.timeout_secs != default_api.timeout_secs {
            self.api.timeout_secs = other.api.timeout_secs;
        }

        if other.pagination.page_size != PaginationConfig::default().page_size {
            self.pagination.page_size = other.pagination.page_size;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(val) = env.non_empty(ENV_BASE_URL) {
            self.api.base_url = val;
        }
        if let Some(val) = env.non_empty(ENV_PAGE_SIZE) {
            match val.trim().parse::<u32>() {
                Ok(size) if size > 0 => self.pagination.page_size = size,
                _ => tracing::warn!("ignoring invalid {ENV_PAGE_SIZE} value: {val}"),
            }
        }
        if let Some(val) = env.non_empty(ENV_TIMEOUT_SECS) {
            match val.trim().parse::<u64>() {
                Ok(secs) => self.api.timeout_secs = secs,
                Err(_) => tracing::warn!("ignoring invalid {ENV_TIMEOUT_SECS} value: {val}"),
            }
        }
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env() -> Env {
        Env::mock(Vec::<(&str, &str)>::new())
    }

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "https://jsonplaceholder.typicode.com");
        assert_eq!(config.api.timeout(), Duration::from_secs(10));
        assert_eq!(config.pagination.page_size, 6);
    }

    #[test]
    fn parse_toml_config() {
        let toml_str = r#"
[api]
base_url = "http://localhost:3000"
timeout_secs = 3

[pagination]
page_size = 20
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.api.timeout_secs, 3);
        assert_eq!(config.pagination.page_size, 20);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("[pagination]\npage_size = 2\n").unwrap();
        assert_eq!(config.api, ApiConfig::default());
        assert_eq!(config.pagination.page_size, 2);
    }

    #[test]
    fn merge_overrides_non_default_values() {
        let mut base = Config::default();
        let mut other = Config::default();
        other.api.base_url = "http://localhost:3000".to_string();
        other.api.timeout_secs = 1;
        other.pagination.page_size = 12;

        base.merge(other);

        assert_eq!(base.api.base_url, "http://localhost:3000");
        assert_eq!(base.api.timeout_secs, 1);
        assert_eq!(base.pagination.page_size, 12);
    }

    #[test]
    fn merge_keeps_base_when_other_is_default() {
        let mut base = Config::default();
        base.api.base_url = "http://staging".to_string();
        base.pagination.page_size = 3;

        base.merge(Config::default());

        assert_eq!(base.api.base_url, "http://staging");
        assert_eq!(base.pagination.page_size, 3);
    }

    #[test]
    fn load_file_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "not valid {{ toml").unwrap();

        let result = Config::load_file(&path);
        assert!(result.unwrap_err().to_string().contains("parse"));
    }

    #[test]
    fn load_file_not_found() {
        let result = Config::load_file(Path::new("/tmp/roster_not_exist_config.toml"));
        assert!(result.unwrap_err().to_string().contains("read"));
    }

    #[test]
    fn load_from_local_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".roster.toml"),
            "[api]\nbase_url = \"http://localhost:3000\"\n",
        )
        .unwrap();

        let config = Config::load(Some(dir.path()), &no_env()).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3000");
    }

    #[test]
    fn env_overrides_local_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".roster.toml"),
            "[api]\nbase_url = \"http://from-file\"\n",
        )
        .unwrap();
        let env = Env::mock([
            ("ROSTER_BASE_URL", "http://from-env"),
            ("ROSTER_PAGE_SIZE", "4"),
            ("ROSTER_TIMEOUT_SECS", "30"),
        ]);

        let config = Config::load(Some(dir.path()), &env).unwrap();
        assert_eq!(config.api.base_url, "http://from-env");
        assert_eq!(config.pagination.page_size, 4);
        assert_eq!(config.api.timeout_secs, 30);
    }

    #[test]
    fn apply_env_vars_ignores_invalid_numbers() {
        let env = Env::mock([("ROSTER_PAGE_SIZE", "zero"), ("ROSTER_TIMEOUT_SECS", "-1")]);
        let mut config = Config::default();
        config.apply_env_vars(&env);
        assert_eq!(config.pagination.page_size, 6);
        assert_eq!(config.api.timeout_secs, 10);
    }

    #[test]
    fn apply_env_vars_rejects_zero_page_size() {
        let env = Env::mock([("ROSTER_PAGE_SIZE", "0")]);
        let mut config = Config::default();
        config.apply_env_vars(&env);
        assert_eq!(config.pagination.page_size, 6);
    }

    #[test]
    fn to_toml_round_trips_through_parser() {
        let mut config = Config::default();
        config.pagination.page_size = 9;
        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("page_size = 9"));
        let parsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }
}
