// Typed application configuration

use crate::{ConfigError, ConfigLoader, ConfigManager, ConfigValidator, Result, Validate};
use pashu_i18n::Language;
use pashu_log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix for every setting.
pub const ENV_PREFIX: &str = "PASHU";

const MAX_LATENCY_MS: u64 = 60_000;

/// Settings the flow is built from.
///
/// Keys, as they appear in files or after stripping `PASHU_` from the
/// environment:
///
/// | key | default |
/// |---|---|
/// | `default_language` | `en` |
/// | `login_latency_ms` | `1000` |
/// | `recognition_latency_ms` | `3000` |
/// | `locales_dir` | unset |
/// | `seed` | unset |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub default_language: Language,
    pub login_latency_ms: u64,
    pub recognition_latency_ms: u64,
    pub locales_dir: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_language: Language::English,
            login_latency_ms: 1000,
            recognition_latency_ms: 3000,
            locales_dir: None,
            seed: None,
        }
    }
}

impl AppConfig {
    /// Load from an optional file, then `.env`, then `PASHU_*` variables.
    ///
    /// Later sources win.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let manager = ConfigManager::with_prefix(ENV_PREFIX.to_string());

        if let Some(path) = file {
            let format = *ConfigLoader::auto(path)?.format();
            manager.load_file(path, format)?;
        }
        manager.load_dotenv(None)?;

        let config = Self::from_manager(&manager)?;
        info!(target: "pashu::config", "Configuration loaded: language={} login={}ms recognition={}ms",
            config.default_language, config.login_latency_ms, config.recognition_latency_ms);
        Ok(config)
    }

    /// Read every known key from a manager, keeping defaults for absent keys.
    pub fn from_manager(manager: &ConfigManager) -> Result<Self> {
        let mut config = Self::default();

        if manager.has("default_language") {
            let raw = manager.get_string("default_language")?;
            config.default_language = Language::parse(&raw).map_err(|_| {
                ConfigError::ValidationError(format!(
                    "default_language must be one of [en, hi], got {}",
                    raw
                ))
            })?;
        }
        if manager.has("login_latency_ms") {
            config.login_latency_ms = manager.get_parsed("login_latency_ms")?;
        }
        if manager.has("recognition_latency_ms") {
            config.recognition_latency_ms = manager.get_parsed("recognition_latency_ms")?;
        }
        if manager.has("locales_dir") {
            config.locales_dir = Some(PathBuf::from(manager.get_string("locales_dir")?));
        }
        if manager.has("seed") {
            config.seed = Some(manager.get_parsed("seed")?);
        }

        config.validate()?;
        debug!(target: "pashu::config", "Resolved {:?}", config);
        Ok(config)
    }

    /// Zero simulated latency; handy for scripted drivers.
    pub fn instant() -> Self {
        Self {
            login_latency_ms: 0,
            recognition_latency_ms: 0,
            ..Self::default()
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        ConfigValidator::in_range(self.login_latency_ms, 0, MAX_LATENCY_MS, "login_latency_ms")?;
        ConfigValidator::in_range(
            self.recognition_latency_ms,
            0,
            MAX_LATENCY_MS,
            "recognition_latency_ms",
        )?;
        if let Some(dir) = &self.locales_dir {
            ConfigValidator::not_empty(&dir.to_string_lossy(), "locales_dir")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.default_language, Language::English);
        assert_eq!(config.login_latency_ms, 1000);
        assert_eq!(config.recognition_latency_ms, 3000);
        assert!(config.locales_dir.is_none());
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_empty_manager_is_default() {
        let config = AppConfig::from_manager(&ConfigManager::new()).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_string_values_are_coerced() {
        let manager = ConfigManager::new();
        manager.set("default_language", "hi-IN").unwrap();
        manager.set("login_latency_ms", "0").unwrap();
        manager.set("seed", "42").unwrap();
        manager.set("locales_dir", "/srv/locales").unwrap();

        let config = AppConfig::from_manager(&manager).unwrap();
        assert_eq!(config.default_language, Language::Hindi);
        assert_eq!(config.login_latency_ms, 0);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.locales_dir, Some(PathBuf::from("/srv/locales")));
    }

    #[test]
    fn test_unknown_language_rejected() {
        let manager = ConfigManager::new();
        manager.set("default_language", "fr").unwrap();

        let err = AppConfig::from_manager(&manager).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("fr"));
    }

    #[test]
    fn test_latency_bounds() {
        let manager = ConfigManager::new();
        manager.set("recognition_latency_ms", 600_000u64).unwrap();
        assert!(matches!(
            AppConfig::from_manager(&manager),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_instant() {
        let config = AppConfig::instant();
        assert_eq!(config.login_latency_ms, 0);
        assert_eq!(config.recognition_latency_ms, 0);
        assert_eq!(config.default_language, Language::English);
    }
}
