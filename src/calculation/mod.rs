//! Calculation logic for the payroll ledger.
//!
//! This module contains the salary cycle used to pro-rate absences and the
//! payroll formulas producing no-pay, base pay and gross pay.

mod payroll;
mod salary_cycle;

pub use payroll::{
    MONEY_SCALE, PayrollFigures, PayrollInputs, TAX_RATE, calculate_payroll, round_money,
};
pub use salary_cycle::SalaryCycle;
