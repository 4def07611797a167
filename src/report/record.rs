//! Tabular view of report rows.
//!
//! [`ReportRecord`] turns a query row into spreadsheet cells. The header row
//! is the row type's field names and cells follow the same order.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{MonthlyReportRow, RangeReportRow, SummaryReportRow};

/// A single spreadsheet cell value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportCell {
    /// An identifier or count.
    Integer(i64),
    /// A calendar date, written as `YYYY-MM-DD`.
    Date(NaiveDate),
    /// A money amount, written with two decimal places.
    Amount(Decimal),
}

/// A uniformly-shaped report row.
pub trait ReportRecord {
    /// Column headers, in cell order.
    fn field_names() -> &'static [&'static str];

    /// The row's values, in the same order as [`ReportRecord::field_names`].
    fn cells(&self) -> Vec<ReportCell>;
}

impl ReportRecord for MonthlyReportRow {
    fn field_names() -> &'static [&'static str] {
        &["salaried_month", "base_pay", "no_pay", "gross_pay"]
    }

    fn cells(&self) -> Vec<ReportCell> {
        vec![
            ReportCell::Date(self.salaried_month),
            ReportCell::Amount(self.base_pay),
            ReportCell::Amount(self.no_pay),
            ReportCell::Amount(self.gross_pay),
        ]
    }
}

impl ReportRecord for SummaryReportRow {
    fn field_names() -> &'static [&'static str] {
        &["salaried_month", "base_pay", "no_pay", "gross_pay"]
    }

    fn cells(&self) -> Vec<ReportCell> {
        vec![
            ReportCell::Date(self.salaried_month),
            ReportCell::Amount(self.base_pay),
            ReportCell::Amount(self.no_pay),
            ReportCell::Amount(self.gross_pay),
        ]
    }
}

impl ReportRecord for RangeReportRow {
    fn field_names() -> &'static [&'static str] {
        &["employee_id", "salaried_month", "no_pay", "base_pay", "gross_pay"]
    }

    fn cells(&self) -> Vec<ReportCell> {
        vec![
            ReportCell::Integer(self.employee_id),
            ReportCell::Date(self.salaried_month),
            ReportCell::Amount(self.no_pay),
            ReportCell::Amount(self.base_pay),
            ReportCell::Amount(self.gross_pay),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_range_row_cells_follow_field_order() {
        let row = RangeReportRow {
            employee_id: 3,
            salaried_month: NaiveDate::from_ymd_opt(2023, 5, 28).unwrap(),
            no_pay: dec("333.33"),
            base_pay: dec("6150"),
            gross_pay: dec("4279.17"),
        };

        let cells = row.cells();

        assert_eq!(cells.len(), RangeReportRow::field_names().len());
        assert_eq!(cells[0], ReportCell::Integer(3));
        assert_eq!(cells[2], ReportCell::Amount(dec("333.33")));
        assert_eq!(cells[3], ReportCell::Amount(dec("6150")));
    }

    #[test]
    fn test_monthly_row_lists_base_pay_before_no_pay() {
        let row = MonthlyReportRow {
            salaried_month: NaiveDate::from_ymd_opt(2023, 5, 28).unwrap(),
            base_pay: dec("6150"),
            no_pay: dec("333.33"),
            gross_pay: dec("4279.17"),
        };

        assert_eq!(
            MonthlyReportRow::field_names(),
            &["salaried_month", "base_pay", "no_pay", "gross_pay"]
        );
        assert_eq!(row.cells()[1], ReportCell::Amount(dec("6150")));
    }

    #[test]
    fn test_field_counts_match_cell_counts() {
        let summary = SummaryReportRow {
            salaried_month: NaiveDate::from_ymd_opt(2023, 5, 28).unwrap(),
            base_pay: dec("1"),
            no_pay: dec("0"),
            gross_pay: dec("0.75"),
        };

        assert_eq!(summary.cells().len(), SummaryReportRow::field_names().len());
    }
}
