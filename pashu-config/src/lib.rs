//! Configuration for P.A.S.H.U.
//!
//! [`ConfigManager`] is a layered key/value store fed from `.env` files,
//! TOML/JSON files and `PASHU_*` environment variables. [`AppConfig`] is the
//! typed view the flow is built from.
//!
//! ```
//! use pashu_config::{AppConfig, ConfigManager};
//!
//! let manager = ConfigManager::with_prefix("PASHU".to_string());
//! manager.set("login_latency_ms", 250).unwrap();
//!
//! let config = AppConfig::from_manager(&manager).unwrap();
//! assert_eq!(config.login_latency_ms, 250);
//! assert_eq!(config.recognition_latency_ms, 3000);
//! ```

pub mod app;
pub mod env;
pub mod error;
pub mod loader;
pub mod validation;

pub use app::AppConfig;
pub use env::EnvLoader;
pub use error::{ConfigError, Result};
pub use loader::{ConfigLoader, FileFormat};
pub use validation::{ConfigValidator, Validate};

use parking_lot::RwLock;
use pashu_log::debug;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

/// Main configuration manager
#[derive(Clone, Default)]
pub struct ConfigManager {
    config: Arc<RwLock<HashMap<String, serde_json::Value>>>,
    env_prefix: Option<String>,
}

impl ConfigManager {
    /// Create a new configuration manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with environment variable prefix
    pub fn with_prefix(prefix: String) -> Self {
        Self {
            config: Arc::default(),
            env_prefix: Some(prefix),
        }
    }

    /// Load configuration from environment variables
    pub fn load_env(&self) -> Result<()> {
        let loader = EnvLoader::new(self.env_prefix.clone());
        self.insert_strings(loader.load()?);
        Ok(())
    }

    /// Load a `.env` file into the process environment, then load the environment.
    ///
    /// Without a path, a missing `.env` in the working directory is not an error.
    pub fn load_dotenv(&self, path: Option<&Path>) -> Result<()> {
        match path {
            Some(path) => {
                dotenvy::from_path(path).map_err(|e| ConfigError::LoadError(e.to_string()))?;
            }
            None => {
                dotenvy::dotenv().ok();
            }
        }
        self.load_env()
    }

    /// Load configuration from file
    ///
    /// Env-format files go through the same prefix rules as the process
    /// environment.
    pub fn load_file(&self, path: impl AsRef<Path>, format: FileFormat) -> Result<()> {
        let path = path.as_ref();
        let data = ConfigLoader::new(format).load_file(path)?;

        let serde_json::Value::Object(map) = data else {
            return Err(ConfigError::ParseError(format!(
                "{} must contain a table at the top level",
                path.display()
            )));
        };

        if format == FileFormat::Env {
            let loader = EnvLoader::new(self.env_prefix.clone());
            let pairs = map
                .into_iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k, s.to_string())));
            self.insert_strings(loader.load_from(pairs));
        } else {
            self.config.write().extend(map);
        }

        debug!(target: "pashu::config", "Loaded configuration from {}", path.display());
        Ok(())
    }

    fn insert_strings(&self, values: HashMap<String, String>) {
        let mut config = self.config.write();
        for (key, value) in values {
            config.insert(key, serde_json::Value::String(value));
        }
    }

    /// Set a configuration value
    pub fn set<T: serde::Serialize>(&self, key: &str, value: T) -> Result<()> {
        let json_value = serde_json::to_value(value)
            .map_err(|e| ConfigError::SerializationError(e.to_string()))?;

        self.config.write().insert(key.to_string(), json_value);
        Ok(())
    }

    /// Get a configuration value
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let value = self
            .config
            .read()
            .get(key)
            .cloned()
            .ok_or_else(|| ConfigError::KeyNotFound(key.to_string()))?;

        serde_json::from_value(value).map_err(|e| ConfigError::DeserializationError(e.to_string()))
    }

    /// Get a value that may be stored either typed or as a string.
    ///
    /// Environment variables always arrive as strings, so `"250"` and `250`
    /// both read as `250u64`.
    pub fn get_parsed<T>(&self, key: &str) -> Result<T>
    where
        T: DeserializeOwned + FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get::<T>(key) {
            Ok(value) => Ok(value),
            Err(ConfigError::DeserializationError(_)) => {
                let raw = self.get_string(key)?;
                raw.trim().parse().map_err(|e: T::Err| {
                    ConfigError::ParseError(format!("{} = {:?}: {}", key, raw, e))
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Get a configuration value with default
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    /// Get a string value
    pub fn get_string(&self, key: &str) -> Result<String> {
        self.get(key)
    }

    /// Get an integer value
    pub fn get_int(&self, key: &str) -> Result<i64> {
        self.get_parsed(key)
    }

    /// Get a boolean value
    pub fn get_bool(&self, key: &str) -> Result<bool> {
        self.get_parsed(key)
    }

    /// Check if a key exists
    pub fn has(&self, key: &str) -> bool {
        self.config.read().contains_key(key)
    }

    /// Get all configuration keys
    pub fn keys(&self) -> Vec<String> {
        self.config.read().keys().cloned().collect()
    }

    /// Merge configuration from another manager
    pub fn merge(&self, other: &ConfigManager) {
        let other_config = other.config.read().clone();
        self.config.write().extend(other_config);
    }
}
