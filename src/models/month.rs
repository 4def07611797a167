//! Salaried month helpers.
//!
//! Ledger entries are attributed to a calendar month. A month is stored as a
//! [`NaiveDate`] pinned to an anchor day, so every entry of the same month
//! carries the same date and groups together in reports.

use chrono::{Datelike, NaiveDate};

use crate::error::{PayrollError, PayrollResult};

/// The anchor day used when none is configured.
///
/// Every month has a 28th, so normalization can never fail with this value.
pub const DEFAULT_ANCHOR_DAY: u32 = 28;

/// Returns the number of days in the month containing `date`.
///
/// # Example
///
/// ```
/// use payroll_ledger::models::days_in_month;
/// use chrono::NaiveDate;
///
/// assert_eq!(days_in_month(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()), 29);
/// assert_eq!(days_in_month(NaiveDate::from_ymd_opt(2023, 2, 10).unwrap()), 28);
/// assert_eq!(days_in_month(NaiveDate::from_ymd_opt(2023, 12, 1).unwrap()), 31);
/// ```
pub fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = (date.year(), date.month());
    let next_month_start = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    next_month_start
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(DEFAULT_ANCHOR_DAY)
}

/// Pins `date` to `anchor_day` of its month.
///
/// # Errors
///
/// Returns [`PayrollError::Validation`] if `anchor_day` does not exist in the
/// month (only possible for anchors above 28).
///
/// # Example
///
/// ```
/// use payroll_ledger::models::normalize_month;
/// use chrono::NaiveDate;
///
/// let recorded = NaiveDate::from_ymd_opt(2023, 5, 3).unwrap();
/// assert_eq!(
///     normalize_month(recorded, 28).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 5, 28).unwrap()
/// );
/// ```
pub fn normalize_month(date: NaiveDate, anchor_day: u32) -> PayrollResult<NaiveDate> {
    date.with_day(anchor_day).ok_or_else(|| {
        PayrollError::validation(
            "month_anchor_day",
            format!("day {} does not exist in {}", anchor_day, date.format("%Y-%m")),
        )
    })
}

/// Returns the first day of the month following the month of `date`.
pub fn next_month(date: NaiveDate) -> Option<NaiveDate> {
    let (year, month) = (date.year(), date.month());
    if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
}

/// A closed range of whole salaried months used by the range-restricted reports.
///
/// The bounds are widened to month boundaries: `start` moves to the first day
/// of its month and `end` to the last day of its month. Entries are stored on
/// the anchor day, so a range given as `2023-05-01..2023-05-01` still covers
/// May. A range whose start month is after its end month is valid and simply
/// matches nothing.
///
/// # Example
///
/// ```
/// use payroll_ledger::models::MonthRange;
/// use chrono::NaiveDate;
///
/// let may = NaiveDate::from_ymd_opt(2023, 5, 1).unwrap();
/// let range = MonthRange::new(may, may);
///
/// assert_eq!(range.start(), may);
/// assert_eq!(range.end(), NaiveDate::from_ymd_opt(2023, 5, 31).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl MonthRange {
    /// Creates a range covering every day of the months of `start` and `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: start.with_day(1).unwrap_or(start),
            end: end.with_day(days_in_month(end)).unwrap_or(end),
        }
    }

    /// First day included: the first of the start month.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day included: the last of the end month.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns true when the start month is after the end month.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_in_month_for_thirty_day_month() {
        assert_eq!(days_in_month(date(2023, 4, 15)), 30);
    }

    #[test]
    fn test_days_in_month_for_december() {
        assert_eq!(days_in_month(date(2023, 12, 31)), 31);
    }

    #[test]
    fn test_days_in_month_for_leap_february() {
        assert_eq!(days_in_month(date(2024, 2, 1)), 29);
    }

    #[test]
    fn test_normalize_month_keeps_year_and_month() {
        assert_eq!(normalize_month(date(2023, 1, 31), 28).unwrap(), date(2023, 1, 28));
        assert_eq!(normalize_month(date(2023, 1, 1), 28).unwrap(), date(2023, 1, 28));
    }

    #[test]
    fn test_normalize_month_rejects_missing_day() {
        let result = normalize_month(date(2023, 2, 10), 30);
        assert!(matches!(result, Err(PayrollError::Validation { .. })));
    }

    #[test]
    fn test_next_month_rolls_over_year() {
        assert_eq!(next_month(date(2023, 12, 28)), Some(date(2024, 1, 1)));
        assert_eq!(next_month(date(2023, 6, 28)), Some(date(2023, 7, 1)));
    }

    #[test]
    fn test_range_widens_to_whole_months() {
        let range = MonthRange::new(date(2023, 1, 28), date(2023, 3, 15));

        assert_eq!(range.start(), date(2023, 1, 1));
        assert_eq!(range.end(), date(2023, 3, 31));
    }

    #[test]
    fn test_single_day_range_covers_anchor_day() {
        let range = MonthRange::new(date(2023, 5, 1), date(2023, 5, 1));
        let anchored = normalize_month(date(2023, 5, 3), DEFAULT_ANCHOR_DAY).unwrap();

        assert!(!range.is_empty());
        assert!(range.start() <= anchored && anchored <= range.end());
    }

    #[test]
    fn test_range_end_respects_leap_february() {
        let range = MonthRange::new(date(2024, 2, 1), date(2024, 2, 1));
        assert_eq!(range.end(), date(2024, 2, 29));
    }

    #[test]
    fn test_reversed_range_is_empty() {
        let range = MonthRange::new(date(2023, 3, 28), date(2023, 1, 28));
        assert!(range.is_empty());
    }

    #[test]
    fn test_reversed_days_in_one_month_still_cover_it() {
        let range = MonthRange::new(date(2023, 5, 20), date(2023, 5, 3));
        assert!(!range.is_empty());
    }
}
