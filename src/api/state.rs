//! Application state for the payroll ledger API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::report::ReportBuilder;
use crate::store::PayrollDb;

/// Shared application state.
///
/// Holds the database handle, the loaded configuration and the report
/// builder. Cloning is cheap: the database and configuration are shared.
#[derive(Clone)]
pub struct AppState {
    db: Arc<PayrollDb>,
    config: Arc<ConfigLoader>,
    reports: ReportBuilder,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// Reports are written to the configured `storage.reports_dir`.
    pub fn new(db: PayrollDb, config: ConfigLoader) -> Self {
        let reports = ReportBuilder::new(config.storage().reports_dir.clone());
        Self {
            db: Arc::new(db),
            config: Arc::new(config),
            reports,
        }
    }

    /// Replaces the report builder, e.g. to write into a scratch directory.
    pub fn with_reports(mut self, reports: ReportBuilder) -> Self {
        self.reports = reports;
        self
    }

    /// Returns the database handle.
    pub fn db(&self) -> &PayrollDb {
        &self.db
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the report builder.
    pub fn reports(&self) -> &ReportBuilder {
        &self.reports
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PayrollConfig;
    use std::path::Path;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_reports_default_to_configured_directory() {
        let db = PayrollDb::open_in_memory().unwrap();
        let config = ConfigLoader::from_config(PayrollConfig::default()).unwrap();

        let state = AppState::new(db, config);

        assert_eq!(state.reports().output_dir(), Path::new("Reports"));
    }
}
