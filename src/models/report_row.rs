//! Report row models.
//!
//! Each struct is the shape of one row returned by a ledger reporting query.
//! Field order matches the column order of the exported spreadsheet.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One ledger entry of a single employee, as listed by the monthly report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyReportRow {
    /// The month the entry is attributed to.
    pub salaried_month: NaiveDate,
    /// Recorded base pay.
    pub base_pay: Decimal,
    /// Recorded no-pay deduction.
    pub no_pay: Decimal,
    /// Recorded gross pay.
    pub gross_pay: Decimal,
}

/// Per-month totals for a single employee over a month range.
///
/// Duplicate entries within one month are summed into a single row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryReportRow {
    /// The month being totalled.
    pub salaried_month: NaiveDate,
    /// Sum of base pay for the month.
    pub base_pay: Decimal,
    /// Sum of no-pay deductions for the month.
    pub no_pay: Decimal,
    /// Sum of gross pay for the month.
    pub gross_pay: Decimal,
}

/// One ledger entry of any employee within a month range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeReportRow {
    /// The employee the entry is attributed to.
    pub employee_id: i64,
    /// The month the entry is attributed to.
    pub salaried_month: NaiveDate,
    /// Recorded no-pay deduction.
    pub no_pay: Decimal,
    /// Recorded base pay.
    pub base_pay: Decimal,
    /// Recorded gross pay.
    pub gross_pay: Decimal,
}
