//! Response types for the payroll ledger API.
//!
//! This module defines the success bodies, the error response structure and
//! the mapping from [`PayrollError`] to HTTP status codes.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::PayrollFigures;
use crate::error::PayrollError;
use crate::models::PayrollEntry;
use crate::report::ReportOutcome;

/// Body returned by `POST /payroll/calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// The employee the figures belong to.
    pub employee_id: i64,
    /// The normalized month the figures would be recorded under.
    pub salaried_month: NaiveDate,
    /// Salary cycle length used for the no-pay deduction.
    pub cycle_days: u32,
    /// Deduction for absent days, rounded to cents.
    pub no_pay: Decimal,
    /// Salary plus allowances plus overtime, rounded to cents.
    pub base_pay: Decimal,
    /// Base pay less no-pay and tax, rounded to cents.
    pub gross_pay: Decimal,
    /// Set when the absent days exceed the configured leave limit.
    pub exceeds_leave_limit: bool,
}

impl CalculationResponse {
    /// Builds the body from calculated figures.
    pub fn new(
        employee_id: i64,
        salaried_month: NaiveDate,
        cycle_days: u32,
        figures: PayrollFigures,
        exceeds_leave_limit: bool,
    ) -> Self {
        let figures = figures.rounded();
        Self {
            employee_id,
            salaried_month,
            cycle_days,
            no_pay: figures.no_pay,
            base_pay: figures.base_pay,
            gross_pay: figures.gross_pay,
            exceeds_leave_limit,
        }
    }
}

/// Body returned by `POST /payroll/record`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordResponse {
    /// The entry as stored in the ledger.
    pub entry: PayrollEntry,
    /// Set when the absent days exceed the configured leave limit.
    pub exceeds_leave_limit: bool,
}

/// Body returned by `POST /reports`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReportResponse {
    /// A spreadsheet was written to the reports directory.
    Generated {
        /// File name inside the reports directory.
        filename: String,
        /// Number of data rows written.
        rows: usize,
    },
    /// Nothing matched, so no file was written.
    NoData {
        /// Human-readable explanation.
        message: String,
    },
}

impl From<ReportOutcome> for ReportResponse {
    fn from(outcome: ReportOutcome) -> Self {
        match outcome {
            ReportOutcome::Generated { filename, rows, .. } => {
                ReportResponse::Generated { filename, rows }
            }
            ReportOutcome::NoData => ReportResponse::NoData {
                message: "No data available for the selected report".to_string(),
            },
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an employee not found error response.
    pub fn employee_not_found(id: i64) -> Self {
        Self::with_details(
            "EMPLOYEE_NOT_FOUND",
            format!("Employee not found: {}", id),
            format!("No employee is registered with id {}", id),
        )
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<PayrollError> for ApiErrorResponse {
    fn from(error: PayrollError) -> Self {
        match error {
            PayrollError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            PayrollError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            PayrollError::Validation { field, message } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid field '{}': {}", field, message),
                    field,
                ),
            ),
            PayrollError::EmployeeNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::employee_not_found(id),
            },
            PayrollError::Database(err) => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("DATABASE_ERROR", "Database error", err.to_string()),
            },
            PayrollError::Export { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "EXPORT_ERROR",
                    "Report export failed",
                    format!("{}: {}", path, message),
                ),
            },
        }
    }
}
