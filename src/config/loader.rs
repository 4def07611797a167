//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the payroll
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{PayrollError, PayrollResult};

use super::types::{PayrollConfig, PayrollSettings, SeedConfig, ServerConfig, StorageConfig};

/// Name of the configuration file inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "payroll.yaml";

/// Loads and provides access to the payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── payroll.yaml   # settings, storage, server and seed sections
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_ledger::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// println!("Reports go to {}", loader.storage().reports_dir.display());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `payroll.yaml` is missing
    /// - the file contains invalid YAML
    /// - a value is out of range (zero cycle days, anchor day above 28)
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let config_path = path.as_ref().join(CONFIG_FILE_NAME);
        let path_str = config_path.display().to_string();

        let content = fs::read_to_string(&config_path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml(&content, &path_str)
    }

    /// Parses configuration from YAML text. `origin` names the source in errors.
    pub fn from_yaml(content: &str, origin: &str) -> PayrollResult<Self> {
        let config: PayrollConfig =
            serde_yaml::from_str(content).map_err(|e| PayrollError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        Self::from_config(config).map_err(|e| match e {
            PayrollError::Validation { field, message } => PayrollError::ConfigParseError {
                path: origin.to_string(),
                message: format!("{}: {}", field, message),
            },
            other => other,
        })
    }

    /// Wraps an already-built configuration after checking its values.
    pub fn from_config(config: PayrollConfig) -> PayrollResult<Self> {
        Self::validate(&config)?;
        Ok(Self { config })
    }

    fn validate(config: &PayrollConfig) -> PayrollResult<()> {
        if config.settings.cycle_days == Some(0) {
            return Err(PayrollError::validation(
                "settings.cycle_days",
                "must be greater than zero",
            ));
        }

        let anchor = config.settings.month_anchor_day;
        if !(1..=28).contains(&anchor) {
            return Err(PayrollError::validation(
                "settings.month_anchor_day",
                format!("{} is not between 1 and 28", anchor),
            ));
        }

        Ok(())
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the calculation settings.
    pub fn settings(&self) -> &PayrollSettings {
        &self.config.settings
    }

    /// Returns the storage locations.
    pub fn storage(&self) -> &StorageConfig {
        &self.config.storage
    }

    /// Returns the HTTP server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.config.server
    }

    /// Returns the sample-data bootstrap settings.
    pub fn seed(&self) -> &SeedConfig {
        &self.config.seed
    }
}
