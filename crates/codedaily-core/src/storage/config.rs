//! TOML-based application configuration.
//!
//! Stores the handful of tunable defaults:
//! - Default sprint duration offered before the user picks one
//! - Default roadmap length in weeks
//!
//! Configuration is stored at `~/.config/codedaily/config.toml`. The sprint
//! reward amount is deliberately not configurable.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;

/// Timer-related configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerConfig {
    #[serde(default = "default_duration_secs")]
    pub default_duration_secs: u64,
}

/// Roadmap generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapConfig {
    #[serde(default = "default_weeks")]
    pub default_weeks: u32,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/codedaily/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timer: TimerConfig,
    #[serde(default)]
    pub roadmap: RoadmapConfig,
}

fn default_duration_secs() -> u64 {
    600
}
fn default_weeks() -> u32 {
    8
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            default_duration_secs: default_duration_secs(),
        }
    }
}

impl Default for RoadmapConfig {
    fn default() -> Self {
        Self {
            default_weeks: default_weeks(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timer: TimerConfig::default(),
            roadmap: RoadmapConfig::default(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or return default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content)?;
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

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let mut current = &json;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        match current {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed
    /// as the existing value's type, or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
        let mut json = serde_json::to_value(&*self)?;

        let mut parts = key.split('.').peekable();
        let mut current = &mut json;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current
                    .as_object_mut()
                    .ok_or_else(|| format!("unknown config key: {key}"))?;
                let existing = obj
                    .get(part)
                    .ok_or_else(|| format!("unknown config key: {key}"))?;
                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(value.parse::<bool>()?),
                    serde_json::Value::Number(_) => {
                        serde_json::Value::Number(value.parse::<u64>()?.into())
                    }
                    _ => serde_json::Value::String(value.into()),
                };
                obj.insert(part.to_string(), new_value);
            } else {
                current = current
                    .get_mut(part)
                    .ok_or_else(|| format!("unknown config key: {key}"))?;
            }
        }

        *self = serde_json::from_value(json)?;
        self.save()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.timer.default_duration_secs, 600);
        assert_eq!(parsed.roadmap.default_weeks, 8);
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("timer.default_duration_secs").as_deref(), Some("600"));
        assert_eq!(cfg.get("roadmap.default_weeks").as_deref(), Some("8"));
        assert!(cfg.get("timer.missing_key").is_none());
    }

    #[test]
    fn empty_toml_gets_all_defaults() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg.timer.default_duration_secs, 600);
        assert_eq!(cfg.roadmap.default_weeks, 8);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let cfg: Config = toml::from_str("[roadmap]\ndefault_weeks = 12\n").unwrap();
        assert_eq!(cfg.roadmap.default_weeks, 12);
        assert_eq!(cfg.timer.default_duration_secs, 600);
    }
}
