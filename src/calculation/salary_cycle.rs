//! Salary cycle functionality.
//!
//! The salary cycle is the day-count basis used to pro-rate the no-pay
//! deduction for absent days.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};
use crate::models::days_in_month;

/// A salary cycle length in days. Always greater than zero.
///
/// # Example
///
/// ```
/// use payroll_ledger::calculation::SalaryCycle;
/// use chrono::NaiveDate;
///
/// let cycle = SalaryCycle::new(30).unwrap();
/// assert_eq!(cycle.days(), 30);
///
/// let march = SalaryCycle::for_month(NaiveDate::from_ymd_opt(2023, 3, 5).unwrap());
/// assert_eq!(march.days(), 31);
///
/// assert!(SalaryCycle::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct SalaryCycle(u32);

impl SalaryCycle {
    /// Creates a cycle of `days` days.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::Validation`] if `days` is zero.
    pub fn new(days: u32) -> PayrollResult<Self> {
        if days == 0 {
            return Err(PayrollError::validation(
                "cycle_days",
                "salary cycle must be at least one day",
            ));
        }
        Ok(Self(days))
    }

    /// The cycle covering the whole calendar month containing `date`.
    pub fn for_month(date: NaiveDate) -> Self {
        Self(days_in_month(date))
    }

    /// Returns the cycle length in days.
    pub fn days(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for SalaryCycle {
    type Error = PayrollError;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        Self::new(days)
    }
}

impl From<SalaryCycle> for u32 {
    fn from(cycle: SalaryCycle) -> Self {
        cycle.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_day_cycle_rejected() {
        match SalaryCycle::new(0) {
            Err(PayrollError::Validation { field, .. }) => assert_eq!(field, "cycle_days"),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_one_day_cycle_accepted() {
        assert_eq!(SalaryCycle::new(1).unwrap().days(), 1);
    }

    #[test]
    fn test_for_month_uses_month_length() {
        let february = NaiveDate::from_ymd_opt(2023, 2, 14).unwrap();
        assert_eq!(SalaryCycle::for_month(february).days(), 28);

        let june = NaiveDate::from_ymd_opt(2023, 6, 30).unwrap();
        assert_eq!(SalaryCycle::for_month(june).days(), 30);
    }

    #[test]
    fn test_deserialize_rejects_zero() {
        assert!(serde_json::from_str::<SalaryCycle>("0").is_err());
        assert_eq!(serde_json::from_str::<SalaryCycle>("30").unwrap().days(), 30);
    }
}
