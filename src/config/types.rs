//! Configuration types for the payroll ledger.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `payroll.yaml`. Every section has defaults, so a
//! partial file is valid.

use chrono::NaiveDate;
use serde::Deserialize;
use std::path::PathBuf;

use crate::calculation::SalaryCycle;
use crate::error::PayrollResult;
use crate::models::DEFAULT_ANCHOR_DAY;

/// Payroll calculation settings.
///
/// These replace the settings screen of the desktop application and are passed
/// explicitly into calculation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PayrollSettings {
    /// Overrides the salary cycle length. When absent, the cycle is the number
    /// of days in the current month.
    pub cycle_days: Option<u32>,
    /// Allowed absent days per calendar year, counting recorded ledger entries
    /// plus the request being calculated. Exceeding it raises a warning only.
    pub leave_limit: u32,
    /// The day of month every salaried month is normalized to.
    pub month_anchor_day: u32,
}

impl Default for PayrollSettings {
    fn default() -> Self {
        Self {
            cycle_days: None,
            leave_limit: 30,
            month_anchor_day: DEFAULT_ANCHOR_DAY,
        }
    }
}

impl PayrollSettings {
    /// Resolves the salary cycle to use for a calculation made on `today`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the configured override is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_ledger::config::PayrollSettings;
    /// use chrono::NaiveDate;
    ///
    /// let today = NaiveDate::from_ymd_opt(2023, 2, 14).unwrap();
    ///
    /// let settings = PayrollSettings::default();
    /// assert_eq!(settings.salary_cycle(today).unwrap().days(), 28);
    ///
    /// let settings = PayrollSettings { cycle_days: Some(30), ..Default::default() };
    /// assert_eq!(settings.salary_cycle(today).unwrap().days(), 30);
    /// ```
    pub fn salary_cycle(&self, today: NaiveDate) -> PayrollResult<SalaryCycle> {
        match self.cycle_days {
            Some(days) => SalaryCycle::new(days),
            None => Ok(SalaryCycle::for_month(today)),
        }
    }
}

/// Where persistent state and exports live.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,
    /// Directory report spreadsheets are written to.
    pub reports_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("./payroll.db"),
            reports_dir: PathBuf::from("Reports"),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to bind, e.g. `127.0.0.1:8080`.
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
        }
    }
}

/// Sample-data bootstrap settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Whether to seed empty tables on startup.
    pub enabled: bool,
    /// First month to generate ledger entries for (inclusive).
    pub start_month: NaiveDate,
    /// Month at which generation stops (exclusive).
    pub end_month: NaiveDate,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            start_month: NaiveDate::from_ymd_opt(2018, 1, 1).unwrap_or_default(),
            end_month: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap_or_default(),
        }
    }
}

/// The complete configuration loaded from `payroll.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PayrollConfig {
    /// Calculation settings.
    pub settings: PayrollSettings,
    /// Storage locations.
    pub storage: StorageConfig,
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Sample-data bootstrap.
    pub seed: SeedConfig,
}
