//! Core data models for the payroll ledger.
//!
//! This module contains the employee, ledger entry, salaried month and report
//! row types used throughout the crate.

mod employee;
mod month;
mod payroll_entry;
mod report_row;

pub use employee::{Employee, EmployeeDraft};
pub use month::{
    DEFAULT_ANCHOR_DAY, MonthRange, days_in_month, next_month, normalize_month,
};
pub use payroll_entry::{NewPayrollEntry, PayrollEntry};
pub use report_row::{MonthlyReportRow, RangeReportRow, SummaryReportRow};
