//! Employee model and related types.
//!
//! This module defines the [`Employee`] record persisted by the employee store
//! and the [`EmployeeDraft`] field set supplied on registration and update.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// Represents a registered employee.
///
/// Pay parameters are whole currency units. The identifier is assigned by the
/// store on registration and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier assigned on creation.
    pub id: i64,
    /// The employee's display name.
    pub name: String,
    /// Monthly salary in currency units.
    pub monthly_salary: u32,
    /// Overtime pay per hour in currency units.
    pub overtime_rate: u32,
    /// Fixed monthly allowances in currency units.
    pub allowances: u32,
}

impl Employee {
    /// Builds an employee from a stored identifier and its draft fields.
    pub fn from_draft(id: i64, draft: EmployeeDraft) -> Self {
        Self {
            id,
            name: draft.name,
            monthly_salary: draft.monthly_salary,
            overtime_rate: draft.overtime_rate,
            allowances: draft.allowances,
        }
    }

    /// Returns the monthly salary as a decimal amount.
    pub fn monthly_salary_amount(&self) -> Decimal {
        Decimal::from(self.monthly_salary)
    }

    /// Returns the overtime hourly rate as a decimal amount.
    pub fn overtime_rate_amount(&self) -> Decimal {
        Decimal::from(self.overtime_rate)
    }

    /// Returns the fixed allowances as a decimal amount.
    pub fn allowances_amount(&self) -> Decimal {
        Decimal::from(self.allowances)
    }
}

/// The editable fields of an employee.
///
/// Registration creates a new employee from a draft; an update replaces every
/// field of an existing employee with the draft's values.
///
/// # Example
///
/// ```
/// use payroll_ledger::models::EmployeeDraft;
///
/// let draft = EmployeeDraft {
///     name: "John Doe".to_string(),
///     monthly_salary: 5000,
///     overtime_rate: 15,
///     allowances: 1000,
/// };
/// assert!(draft.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    /// The employee's display name.
    pub name: String,
    /// Monthly salary in currency units.
    pub monthly_salary: u32,
    /// Overtime pay per hour in currency units.
    pub overtime_rate: u32,
    /// Fixed monthly allowances in currency units.
    pub allowances: u32,
}

impl EmployeeDraft {
    /// Checks the draft before it reaches the store.
    ///
    /// Numeric fields are unsigned and therefore always valid; only the name
    /// can be rejected.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::Validation`] if the name is empty or blank.
    pub fn validate(&self) -> PayrollResult<()> {
        if self.name.trim().is_empty() {
            return Err(PayrollError::validation("name", "must not be empty"));
        }
        Ok(())
    }
}
