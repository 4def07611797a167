//! Payroll ledger entry models.
//!
//! A [`PayrollEntry`] is one row of the append-only salary ledger. It is
//! written once per calculate-and-record action and never updated.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A payroll entry that has not yet been written to the ledger.
///
/// # Example
///
/// ```
/// use payroll_ledger::models::NewPayrollEntry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let entry = NewPayrollEntry {
///     employee_id: 1,
///     absent: 2,
///     holidays: 1,
///     overtime_hours: 10,
///     no_pay: Decimal::new(33333, 2),
///     base_pay: Decimal::from(6150),
///     gross_pay: Decimal::new(427917, 2),
///     salaried_month: NaiveDate::from_ymd_opt(2023, 5, 28).unwrap(),
/// };
/// assert_eq!(entry.employee_id, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPayrollEntry {
    /// The employee this entry is attributed to.
    pub employee_id: i64,
    /// Days absent in the salary cycle.
    pub absent: u32,
    /// Holidays taken in the salary cycle.
    pub holidays: u32,
    /// Overtime hours worked in the salary cycle.
    pub overtime_hours: u32,
    /// Deduction for absent days.
    pub no_pay: Decimal,
    /// Salary plus allowances plus overtime.
    pub base_pay: Decimal,
    /// Base pay less no-pay and tax.
    pub gross_pay: Decimal,
    /// The month the entry is attributed to.
    pub salaried_month: NaiveDate,
}

/// A payroll entry stored in the ledger.
///
/// The employee identifier is a back-reference only: the employee may have
/// been deleted since the entry was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollEntry {
    /// Ledger row identifier.
    pub id: i64,
    /// The employee this entry is attributed to.
    pub employee_id: i64,
    /// Days absent in the salary cycle.
    pub absent: u32,
    /// Holidays taken in the salary cycle.
    pub holidays: u32,
    /// Overtime hours worked in the salary cycle.
    pub overtime_hours: u32,
    /// Deduction for absent days.
    pub no_pay: Decimal,
    /// Salary plus allowances plus overtime.
    pub base_pay: Decimal,
    /// Base pay less no-pay and tax.
    pub gross_pay: Decimal,
    /// The month the entry is attributed to.
    pub salaried_month: NaiveDate,
}

impl PayrollEntry {
    /// Attaches the ledger identifier to a recorded entry.
    pub fn from_new(id: i64, entry: NewPayrollEntry) -> Self {
        Self {
            id,
            employee_id: entry.employee_id,
            absent: entry.absent,
            holidays: entry.holidays,
            overtime_hours: entry.overtime_hours,
            no_pay: entry.no_pay,
            base_pay: entry.base_pay,
            gross_pay: entry.gross_pay,
            salaried_month: entry.salaried_month,
        }
    }
}
