//! TOML-based application configuration.
//!
//! Holds the local user identity the CLI operates as. The id is
//! generated on first run and persisted, so every later invocation
//! resolves to the same planner data.
//!
//! Configuration is stored at `~/.config/dayrota/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

use super::data_dir;

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/dayrota/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_user_id")]
    pub user_id: String,
}

fn default_user_id() -> String {
    Uuid::new_v4().to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
        }
    }
}

impl AppConfig {
    fn path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, writing a freshly generated config on first run.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: AppConfig = toml::from_str(&content)?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(Self::path()?, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_generates_a_user_id() {
        let cfg = AppConfig::default();
        assert!(!cfg.user_id.is_empty());
        assert_ne!(cfg.user_id, AppConfig::default().user_id);
    }

    #[test]
    fn toml_roundtrip_preserves_user_id() {
        let cfg = AppConfig::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.user_id, cfg.user_id);
    }

    #[test]
    fn missing_user_id_field_gets_generated() {
        let parsed: AppConfig = toml::from_str("").unwrap();
        assert!(!parsed.user_id.is_empty());
    }
}
