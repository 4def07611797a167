//! Payroll calculation functionality.
//!
//! Turns an employee's pay parameters and one salary cycle's attendance into
//! the no-pay, base-pay and gross-pay figures recorded in the ledger.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};
use crate::models::Employee;

use super::SalaryCycle;

/// The flat tax rate deducted from base pay (25%).
pub const TAX_RATE: Decimal = Decimal::from_parts(25, 0, 0, false, 2);

/// Decimal places money is rounded to before it is recorded.
pub const MONEY_SCALE: u32 = 2;

/// Pay parameters and attendance for one salary cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollInputs {
    /// Monthly salary.
    pub monthly_salary: Decimal,
    /// Fixed monthly allowances.
    pub allowances: Decimal,
    /// Overtime pay per hour.
    pub overtime_rate: Decimal,
    /// Days absent in the cycle.
    pub absent_days: u32,
    /// Overtime hours worked in the cycle.
    pub overtime_hours: u32,
}

impl PayrollInputs {
    /// Creates inputs from raw amounts.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::Validation`] naming the first negative amount.
    pub fn new(
        monthly_salary: Decimal,
        allowances: Decimal,
        overtime_rate: Decimal,
        absent_days: u32,
        overtime_hours: u32,
    ) -> PayrollResult<Self> {
        for (field, value) in [
            ("monthly_salary", monthly_salary),
            ("allowances", allowances),
            ("overtime_rate", overtime_rate),
        ] {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(PayrollError::validation(field, "must not be negative"));
            }
        }

        Ok(Self {
            monthly_salary,
            allowances,
            overtime_rate,
            absent_days,
            overtime_hours,
        })
    }

    /// Creates inputs from a stored employee's pay parameters.
    pub fn for_employee(employee: &Employee, absent_days: u32, overtime_hours: u32) -> Self {
        Self {
            monthly_salary: employee.monthly_salary_amount(),
            allowances: employee.allowances_amount(),
            overtime_rate: employee.overtime_rate_amount(),
            absent_days,
            overtime_hours,
        }
    }
}

/// The figures produced by a payroll calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollFigures {
    /// Deduction for absent days, pro-rated by the salary cycle.
    pub no_pay: Decimal,
    /// Salary plus allowances plus overtime pay.
    pub base_pay: Decimal,
    /// Base pay less no-pay and tax on base pay.
    pub gross_pay: Decimal,
}

impl PayrollFigures {
    /// Rounds every figure to cents, midpoint away from zero.
    pub fn rounded(&self) -> Self {
        Self {
            no_pay: round_money(self.no_pay),
            base_pay: round_money(self.base_pay),
            gross_pay: round_money(self.gross_pay),
        }
    }
}

/// Rounds an amount to [`MONEY_SCALE`] decimal places, midpoint away from zero.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Calculates no-pay, base pay and gross pay for one salary cycle.
///
/// ```text
/// no_pay    = (monthly_salary / cycle_days) * absent_days
/// base_pay  = monthly_salary + allowances + overtime_rate * overtime_hours
/// gross_pay = base_pay - (no_pay + base_pay * TAX_RATE)
/// ```
///
/// Figures are returned at full precision; use [`PayrollFigures::rounded`]
/// before recording.
///
/// # Examples
///
/// ```
/// use payroll_ledger::calculation::{PayrollInputs, SalaryCycle, calculate_payroll};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let inputs = PayrollInputs::new(
///     Decimal::from(5000),
///     Decimal::from(1000),
///     Decimal::from(15),
///     2,
///     10,
/// ).unwrap();
///
/// let figures = calculate_payroll(&inputs, SalaryCycle::new(30).unwrap()).rounded();
///
/// assert_eq!(figures.no_pay, Decimal::from_str("333.33").unwrap());
/// assert_eq!(figures.base_pay, Decimal::from(6150));
/// assert_eq!(figures.gross_pay, Decimal::from_str("4279.17").unwrap());
/// ```
pub fn calculate_payroll(inputs: &PayrollInputs, cycle: SalaryCycle) -> PayrollFigures {
    let daily_salary = inputs.monthly_salary / Decimal::from(cycle.days());
    let no_pay = daily_salary * Decimal::from(inputs.absent_days);

    let overtime_pay = inputs.overtime_rate * Decimal::from(inputs.overtime_hours);
    let base_pay = inputs.monthly_salary + inputs.allowances + overtime_pay;

    let gross_pay = base_pay - (no_pay + base_pay * TAX_RATE);

    PayrollFigures {
        no_pay,
        base_pay,
        gross_pay,
    }
}
