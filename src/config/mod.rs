//! Configuration loading and management for the payroll ledger.
//!
//! This module loads `payroll.yaml`: calculation settings (salary cycle
//! override, leave limit, month anchor day), storage locations, the HTTP bind
//! address and the sample-data bootstrap.
//!
//! # Example
//!
//! ```no_run
//! use payroll_ledger::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Database: {}", config.storage().database_path.display());
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{PayrollConfig, PayrollSettings, SeedConfig, ServerConfig, StorageConfig};
