//! Configuration management for Nordvik One.
//!
//! Loads configuration from ${NORDVIK_HOME}/config.toml with sensible
//! defaults. Nothing else is persisted; session state lives and dies with
//! the process.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::catalog::{self, ServiceLink};

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for Nordvik One configuration and log directories.
    //!
    //! NORDVIK_HOME resolution order:
    //! 1. NORDVIK_HOME environment variable (if set)
    //! 2. ~/.config/nordvik (default)

    use std::path::PathBuf;

    /// Returns the Nordvik One home directory.
    pub fn nordvik_home() -> PathBuf {
        if let Ok(home) = std::env::var("NORDVIK_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("nordvik"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        nordvik_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        nordvik_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Artificial delay for the simulated sign-in round trip, in milliseconds.
    pub auth_delay_ms: u64,

    /// Extra service links appended to the built-in catalog.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<ServiceLink>,
}

impl Config {
    const DEFAULT_AUTH_DELAY_MS: u64 = 1_000;

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// The artificial sign-in delay as a `Duration`.
    pub fn auth_delay(&self) -> Duration {
        Duration::from_millis(self.auth_delay_ms)
    }

    /// The effective catalog: built-in links plus config extras, in order.
    pub fn catalog(&self) -> Vec<ServiceLink> {
        let mut links = catalog::builtin_links();
        links.extend(self.links.iter().cloned());
        links
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auth_delay_ms: Self::DEFAULT_AUTH_DELAY_MS,
            links: Vec::new(),
        }
    }
}
