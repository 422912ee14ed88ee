//! Configuration management for TaskMaster
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_DIR_NAME, CONFIG_ENV_VAR, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_ADD_DELAY_MS, DEFAULT_REMOVE_DELAY_MS,
    DEFAULT_TICK_RATE_MS, LOG_FILE_NAME, MAX_SIMULATED_DELAY_MS, MAX_TICK_RATE_MS, MIN_TICK_RATE_MS,
};
use crate::operations::CommitOrder;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub operations: OperationsConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Event loop tick in milliseconds
    pub tick_rate_ms: u64,
    /// Show task descriptions under their titles
    pub show_descriptions: bool,
}

/// Simulated add/remove latency and commit ordering
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationsConfig {
    pub add_delay_ms: u64,
    pub remove_delay_ms: u64,
    /// "submission" or "resolve"
    pub commit_order: CommitOrder,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file
    pub enabled: bool,
    /// Log file location, defaults to the cache directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            show_descriptions: true,
        }
    }
}

impl Default for OperationsConfig {
    fn default() -> Self {
        Self {
            add_delay_ms: DEFAULT_ADD_DELAY_MS,
            remove_delay_ms: DEFAULT_REMOVE_DELAY_MS,
            commit_order: CommitOrder::default(),
        }
    }
}

impl LoggingConfig {
    /// Configured log file, or the default one under the cache directory
    pub fn resolve_file(&self) -> Result<PathBuf> {
        match &self.file {
            Some(path) => Ok(path.clone()),
            None => dirs::cache_dir()
                .ok_or_else(|| anyhow::anyhow!("Could not determine cache directory"))
                .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME)),
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Explicit path from the environment
        if let Ok(explicit) = std::env::var(CONFIG_ENV_VAR) {
            let path = PathBuf::from(explicit);
            if !path.exists() {
                anyhow::bail!("{} points to a missing file: {}", CONFIG_ENV_VAR, path.display());
            }
            return Ok(Some(path));
        }

        // 2. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 3. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_DIR_NAME).join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.tick_rate_ms < MIN_TICK_RATE_MS || self.ui.tick_rate_ms > MAX_TICK_RATE_MS {
            anyhow::bail!(
                "tick_rate_ms must be between {} and {}, got {}",
                MIN_TICK_RATE_MS,
                MAX_TICK_RATE_MS,
                self.ui.tick_rate_ms
            );
        }

        if self.operations.add_delay_ms > MAX_SIMULATED_DELAY_MS {
            anyhow::bail!("add_delay_ms cannot exceed {}", MAX_SIMULATED_DELAY_MS);
        }

        if self.operations.remove_delay_ms > MAX_SIMULATED_DELAY_MS {
            anyhow::bail!("remove_delay_ms cannot exceed {}", MAX_SIMULATED_DELAY_MS);
        }

        if let Some(file) = &self.logging.file {
            if file.as_os_str().is_empty() {
                anyhow::bail!("logging.file cannot be empty");
            }
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# TaskMaster Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        log::info!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
