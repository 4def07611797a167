//! HTTP API module for the payroll ledger.
//!
//! This module provides the REST endpoints for managing employees,
//! calculating and recording payroll, and building reports.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EmployeeRequest, PayrollRequest, ReportRequestBody};
pub use response::{ApiError, CalculationResponse, RecordResponse, ReportResponse};
pub use state::AppState;
