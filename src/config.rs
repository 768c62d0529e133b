//! Configuration loader plus strongly typed settings structures.
//!
//! `config.toml` and `portfolio.toml` ship inside the binary and are extracted
//! into the data directory (`~/.folio` or `FOLIO_DIR`) on first run; after
//! that the on-disk copies win.

use crate::data::ui_state::Section;
use anyhow::{Context, Result};
use include_dir::{include_dir, Dir};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// Embed default configuration files at compile time
pub const DEFAULT_PORTFOLIO: &str = include_str!("../defaults/portfolio.toml");

// Everything under defaults/ is extracted on first run
static DEFAULTS_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/defaults");

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "FOLIO_DIR";

/// Top-level configuration object
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub relay: RelayConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Email relay (EmailJS-compatible) settings for the contact form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    #[serde(default = "default_relay_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub service_id: String,
    #[serde(default)]
    pub template_id: String,
    #[serde(default)]
    pub public_key: String,
    #[serde(default = "default_relay_timeout_secs")]
    pub timeout_secs: u64,
}

impl RelayConfig {
    /// Name of the first required field that is still empty
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("endpoint", &self.endpoint),
            ("service_id", &self.service_id),
            ("template_id", &self.template_id),
            ("public_key", &self.public_key),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: default_relay_endpoint(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            timeout_secs: default_relay_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event poll timeout - lower = higher FPS, higher CPU
    #[serde(default = "default_poll_timeout_ms")]
    pub poll_timeout_ms: u64,
    #[serde(default)]
    pub start_section: Section,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            poll_timeout_ms: default_poll_timeout_ms(),
            start_section: Section::default(),
        }
    }
}

fn default_relay_endpoint() -> String {
    "https://api.emailjs.com/api/v1.0/email/send".to_string()
}

fn default_relay_timeout_secs() -> u64 {
    15
}

fn default_poll_timeout_ms() -> u64 {
    16
}

impl Config {
    /// Load config.toml from the data directory, extracting defaults first
    pub fn load() -> Result<Self> {
        let base = Self::base_dir()?;
        Self::extract_defaults_into(&base)?;
        Self::load_from_path(&base.join("config.toml"))
    }

    /// Load config from a custom file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).context(format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&contents).context(format!("Failed to parse config file: {:?}", path))
    }

    /// Write any embedded default that is missing from `dir` (idempotent)
    pub fn extract_defaults_into(dir: &Path) -> Result<()> {
        fs::create_dir_all(dir).context(format!("Failed to create data directory {:?}", dir))?;

        for file in DEFAULTS_DIR.files() {
            let filename = file
                .path()
                .file_name()
                .and_then(|n| n.to_str())
                .context("Invalid default filename")?;
            let target = dir.join(filename);

            if !target.exists() {
                fs::write(&target, file.contents())
                    .context(format!("Failed to write {}", filename))?;
                tracing::info!("Extracted {} to {:?}", filename, target);
            }
        }

        Ok(())
    }

    /// Get the base folio directory (~/.folio/)
    /// Can be overridden with FOLIO_DIR environment variable
    pub fn base_dir() -> Result<PathBuf> {
        if let Ok(custom_dir) = std::env::var(DATA_DIR_ENV) {
            return Ok(PathBuf::from(custom_dir));
        }

        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".folio"))
    }

    pub fn portfolio_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("portfolio.toml"))
    }

    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("folio.log"))
    }
}
