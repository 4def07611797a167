//! Request types for the payroll ledger API.
//!
//! This module defines the JSON request bodies for the employee, payroll and
//! report endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::PayrollResult;
use crate::models::EmployeeDraft;
use crate::report::{ReportKind, ReportRequest};

/// Request body for `POST /employees` and `PUT /employees/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// The employee's display name.
    pub name: String,
    /// Monthly salary in currency units.
    pub monthly_salary: u32,
    /// Overtime pay per hour in currency units.
    pub overtime_rate: u32,
    /// Fixed monthly allowances in currency units.
    pub allowances: u32,
}

impl From<EmployeeRequest> for EmployeeDraft {
    fn from(req: EmployeeRequest) -> Self {
        EmployeeDraft {
            name: req.name,
            monthly_salary: req.monthly_salary,
            overtime_rate: req.overtime_rate,
            allowances: req.allowances,
        }
    }
}

/// Request body for `POST /payroll/calculate` and `POST /payroll/record`.
///
/// The employee's pay parameters are read from the store; the request carries
/// only one cycle's attendance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The employee to pay.
    pub employee_id: i64,
    /// Days absent in the cycle.
    pub absent_days: u32,
    /// Holidays taken in the cycle. Recorded, not used in the figures.
    #[serde(default)]
    pub holidays: u32,
    /// Overtime hours worked in the cycle.
    pub overtime_hours: u32,
    /// Overrides the configured salary cycle length.
    #[serde(default)]
    pub cycle_days: Option<u32>,
    /// The month to attribute the entry to. Defaults to today.
    #[serde(default)]
    pub salaried_month: Option<NaiveDate>,
}

/// Request body for `POST /reports`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequestBody {
    /// Which report to build.
    pub kind: ReportKind,
    /// Required for monthly and summary reports.
    #[serde(default)]
    pub employee_id: Option<i64>,
    /// First month of the range, required for summary and range reports.
    #[serde(default)]
    pub start_month: Option<NaiveDate>,
    /// Last month of the range, required for summary and range reports.
    #[serde(default)]
    pub end_month: Option<NaiveDate>,
}

impl ReportRequestBody {
    /// Validates the body into a [`ReportRequest`].
    pub fn into_request(self) -> PayrollResult<ReportRequest> {
        ReportRequest::from_parts(self.kind, self.employee_id, self.start_month, self.end_month)
    }
}
