//! Report requests and their output file names.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};
use crate::models::MonthRange;

/// The three report shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// Every ledger entry of one employee.
    Monthly,
    /// One employee's per-month totals over a range.
    Summary,
    /// Every employee's entries over a range.
    Range,
}

/// A fully-specified report request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportRequest {
    /// Monthly salary report for one employee.
    Monthly {
        /// The employee to report on.
        employee_id: i64,
    },
    /// Overall salary summary for one employee over a month range.
    Summary {
        /// The employee to report on.
        employee_id: i64,
        /// The months to include.
        range: MonthRange,
    },
    /// Gross pay report for all employees over a month range.
    Range {
        /// The months to include.
        range: MonthRange,
    },
}

impl ReportRequest {
    /// Builds a request from loosely-supplied parameters.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::Validation`] when a parameter the report kind
    /// needs is missing: the employee id for monthly and summary reports, the
    /// start and end months for summary and range reports.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_ledger::report::{ReportKind, ReportRequest};
    ///
    /// let request = ReportRequest::from_parts(ReportKind::Monthly, Some(4), None, None).unwrap();
    /// assert_eq!(request.filename(), "emp_id_4_monthly_salary_report.xlsx");
    ///
    /// assert!(ReportRequest::from_parts(ReportKind::Monthly, None, None, None).is_err());
    /// ```
    pub fn from_parts(
        kind: ReportKind,
        employee_id: Option<i64>,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> PayrollResult<Self> {
        let require_employee = || {
            employee_id.ok_or_else(|| {
                PayrollError::validation("employee_id", "an employee id is required for this report")
            })
        };
        let require_range = || match (start, end) {
            (Some(start), Some(end)) => Ok(MonthRange::new(start, end)),
            (None, _) => Err(PayrollError::validation(
                "start_month",
                "a start month is required for this report",
            )),
            (_, None) => Err(PayrollError::validation(
                "end_month",
                "an end month is required for this report",
            )),
        };

        Ok(match kind {
            ReportKind::Monthly => Self::Monthly {
                employee_id: require_employee()?,
            },
            ReportKind::Summary => Self::Summary {
                employee_id: require_employee()?,
                range: require_range()?,
            },
            ReportKind::Range => Self::Range {
                range: require_range()?,
            },
        })
    }

    /// Returns the report kind.
    pub fn kind(&self) -> ReportKind {
        match self {
            Self::Monthly { .. } => ReportKind::Monthly,
            Self::Summary { .. } => ReportKind::Summary,
            Self::Range { .. } => ReportKind::Range,
        }
    }

    /// The file name the report is written to.
    ///
    /// Identical requests map to the same name, so a repeated request
    /// overwrites the earlier file.
    pub fn filename(&self) -> String {
        match self {
            Self::Monthly { employee_id } => {
                format!("emp_id_{}_monthly_salary_report.xlsx", employee_id)
            }
            Self::Summary { employee_id, range } => format!(
                "emp_id_{}_overall_salary_summary_{}_to_{}.xlsx",
                employee_id,
                range.start(),
                range.end()
            ),
            Self::Range { range } => {
                format!("gross_pay_report_{}_to_{}.xlsx", range.start(), range.end())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_summary_filename_includes_range() {
        let request = ReportRequest::from_parts(
            ReportKind::Summary,
            Some(7),
            Some(date(2023, 1, 28)),
            Some(date(2023, 6, 28)),
        )
        .unwrap();

        assert_eq!(
            request.filename(),
            "emp_id_7_overall_salary_summary_2023-01-01_to_2023-06-30.xlsx"
        );
    }

    #[test]
    fn test_range_filename_includes_range() {
        let request = ReportRequest::from_parts(
            ReportKind::Range,
            None,
            Some(date(2022, 1, 1)),
            Some(date(2022, 12, 31)),
        )
        .unwrap();

        assert_eq!(request.filename(), "gross_pay_report_2022-01-01_to_2022-12-31.xlsx");
    }

    #[test]
    fn test_range_bounds_widen_to_whole_months() {
        let request = ReportRequest::from_parts(
            ReportKind::Range,
            None,
            Some(date(2023, 5, 1)),
            Some(date(2023, 5, 1)),
        )
        .unwrap();

        assert_eq!(request.filename(), "gross_pay_report_2023-05-01_to_2023-05-31.xlsx");
    }

    #[test]
    fn test_range_ignores_employee_id() {
        let request = ReportRequest::from_parts(
            ReportKind::Range,
            Some(3),
            Some(date(2022, 1, 1)),
            Some(date(2022, 2, 1)),
        )
        .unwrap();

        assert_eq!(request.kind(), ReportKind::Range);
    }

    #[test]
    fn test_summary_requires_employee() {
        let result = ReportRequest::from_parts(
            ReportKind::Summary,
            None,
            Some(date(2022, 1, 1)),
            Some(date(2022, 2, 1)),
        );

        match result {
            Err(PayrollError::Validation { field, .. }) => assert_eq!(field, "employee_id"),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_range_requires_both_months() {
        let missing_start =
            ReportRequest::from_parts(ReportKind::Range, None, None, Some(date(2022, 2, 1)));
        let missing_end =
            ReportRequest::from_parts(ReportKind::Range, None, Some(date(2022, 1, 1)), None);

        assert!(matches!(
            missing_start,
            Err(PayrollError::Validation { ref field, .. }) if field == "start_month"
        ));
        assert!(matches!(
            missing_end,
            Err(PayrollError::Validation { ref field, .. }) if field == "end_month"
        ));
    }

    #[test]
    fn test_report_kind_serialization() {
        assert_eq!(serde_json::to_string(&ReportKind::Summary).unwrap(), "\"summary\"");
        let kind: ReportKind = serde_json::from_str("\"range\"").unwrap();
        assert_eq!(kind, ReportKind::Range);
    }
}
