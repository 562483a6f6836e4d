//! Configuration management for siakad
//!
//! Config stored at: ~/.config/siakad/config.json

use serde::{Deserialize, Serialize};
use siakad_domain::service::GradingPolicy;
use siakad_infra::PolicyLoader;
use siakad_types::{ConfigError, Result};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// TOML grading policy; the built-in policy is used when unset
    #[serde(default)]
    pub policy_path: Option<PathBuf>,

    /// Log verbosity (0 = info, 1 = debug, 2+ = trace)
    #[serde(default)]
    pub verbosity: u8,
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("siakad");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or fall back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from a specific file, or fall back to defaults if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the grading policy this config points at
    pub fn grading_policy(&self) -> Result<GradingPolicy> {
        match &self.policy_path {
            Some(path) => PolicyLoader::load_from_file(path),
            None => Ok(GradingPolicy::default()),
        }
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SIAKAD Configuration")?;
        writeln!(f, "====================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Grading policy: {}",
            self.policy_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string())
        )?;
        writeln!(f, "Verbosity:      {}", self.verbosity)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
