//! TOML-based CLI configuration.
//!
//! Stored at `~/.config/touchbase/config.toml` (or `touchbase-dev` when
//! TOUCHBASE_ENV=dev). Configuration covers only where the roster lives and
//! the cadence given to new contacts; engine constants (score bands, the
//! birthday window) are contract and never appear here.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// CLI configuration.
///
/// Serialized to/from TOML at `~/.config/touchbase/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the contacts JSON file. Unset means
    /// `<config dir>/contacts.json`.
    #[serde(default)]
    pub contacts_file: Option<PathBuf>,
    /// Cadence in days for `contact add` when none is given.
    #[serde(default = "default_frequency_days")]
    pub default_frequency_days: i64,
}

fn default_frequency_days() -> i64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            contacts_file: None,
            default_frequency_days: default_frequency_days(),
        }
    }
}

/// Returns `~/.config/touchbase[-dev]/` based on TOUCHBASE_ENV.
///
/// Set TOUCHBASE_ENV=dev to use the development data directory.
pub fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("TOUCHBASE_ENV").unwrap_or_else(|_| "production".to_string());
    let dir = if env == "dev" {
        base_dir.join("touchbase-dev")
    } else {
        base_dir.join("touchbase")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

impl Config {
    fn path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, falling back to defaults when the file is absent.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(Self::path()?, content)?;
        Ok(())
    }

    /// Load from disk, returning default on error. Never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Resolved contacts-file path.
    pub fn contacts_path(&self) -> Result<PathBuf, Box<dyn std::error::Error>> {
        match &self.contacts_file {
            Some(path) => Ok(path.clone()),
            None => Ok(data_dir()?.join("contacts.json")),
        }
    }

    /// Get a config value as a string.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "contacts_file" => Some(
                self.contacts_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            "default_frequency_days" => Some(self.default_frequency_days.to_string()),
            _ => None,
        }
    }

    /// Set a config value by key and persist.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
        match key {
            "contacts_file" => self.contacts_file = Some(PathBuf::from(value)),
            "default_frequency_days" => {
                let days: i64 = value.parse()?;
                if days < 1 {
                    return Err(
                        format!("default_frequency_days must be positive, got {days}").into(),
                    );
                }
                self.default_frequency_days = days;
            }
            _ => return Err(format!("unknown config key: {key}").into()),
        }
        self.save()?;
        Ok(())
    }
}
