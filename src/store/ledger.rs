//! Payroll ledger: append-only salary entries and the reporting queries.
//!
//! All reports are ordered by salaried month, most recent first, with the
//! employee identifier as the secondary key. Month ranges are closed and cover
//! whole months; a range whose start month is after its end month matches
//! nothing.

use chrono::{Datelike, NaiveDate};
use rusqlite::{Connection, params};
use tracing::{debug, info};

use super::{PayrollDb, amount_from_sql, amount_to_sql};
use crate::calculation::round_money;
use crate::error::PayrollResult;
use crate::models::{
    MonthRange, MonthlyReportRow, NewPayrollEntry, PayrollEntry, RangeReportRow, SummaryReportRow,
};

impl PayrollDb {
    /// Appends an entry to the ledger and returns it with its identifier.
    ///
    /// No uniqueness check is made: several entries for the same employee and
    /// month may coexist. The employee is not required to exist.
    pub fn record_payroll(&self, entry: NewPayrollEntry) -> PayrollResult<PayrollEntry> {
        let recorded = self.with_transaction(|tx| Self::insert_payroll(tx, entry))?;
        info!(
            entry_id = recorded.id,
            employee_id = recorded.employee_id,
            salaried_month = %recorded.salaried_month,
            gross_pay = %recorded.gross_pay,
            "payroll recorded"
        );
        Ok(recorded)
    }

    pub(crate) fn insert_payroll(
        conn: &Connection,
        entry: NewPayrollEntry,
    ) -> PayrollResult<PayrollEntry> {
        let entry = NewPayrollEntry {
            no_pay: round_money(entry.no_pay),
            base_pay: round_money(entry.base_pay),
            gross_pay: round_money(entry.gross_pay),
            ..entry
        };
        conn.execute(
            "INSERT INTO salary (employee_id, absent, holidays, overtime_hours,
                                 no_pay, base_pay, gross_pay, salaried_month)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                entry.employee_id,
                entry.absent,
                entry.holidays,
                entry.overtime_hours,
                amount_to_sql(entry.no_pay),
                amount_to_sql(entry.base_pay),
                amount_to_sql(entry.gross_pay),
                entry.salaried_month,
            ],
        )?;
        Ok(PayrollEntry::from_new(conn.last_insert_rowid(), entry))
    }

    /// Every ledger entry of one employee.
    pub fn monthly_report(&self, employee_id: i64) -> PayrollResult<Vec<MonthlyReportRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT salaried_month, base_pay, no_pay, gross_pay
                 FROM salary
                 WHERE employee_id = ?1
                 ORDER BY salaried_month DESC, employee_id, id",
            )?;
            let rows = stmt
                .query_map([employee_id], |row| {
                    Ok(MonthlyReportRow {
                        salaried_month: row.get(0)?,
                        base_pay: amount_from_sql(row, 1)?,
                        no_pay: amount_from_sql(row, 2)?,
                        gross_pay: amount_from_sql(row, 3)?,
                    })
                })?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    /// One employee's entries within `range`, summed per month.
    pub fn summary_report(
        &self,
        employee_id: i64,
        range: MonthRange,
    ) -> PayrollResult<Vec<SummaryReportRow>> {
        if range.is_empty() {
            debug!(employee_id, "reversed month range, skipping summary query");
            return Ok(Vec::new());
        }

        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT salaried_month, SUM(base_pay), SUM(no_pay), SUM(gross_pay)
                 FROM salary
                 WHERE employee_id = ?1 AND salaried_month >= ?2 AND salaried_month <= ?3
                 GROUP BY salaried_month
                 ORDER BY salaried_month DESC",
            )?;
            let rows = stmt
                .query_map(params![employee_id, range.start(), range.end()], |row| {
                    Ok(SummaryReportRow {
                        salaried_month: row.get(0)?,
                        base_pay: amount_from_sql(row, 1)?,
                        no_pay: amount_from_sql(row, 2)?,
                        gross_pay: amount_from_sql(row, 3)?,
                    })
                })?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    /// Every employee's entries within `range`, one row per entry.
    pub fn range_report(&self, range: MonthRange) -> PayrollResult<Vec<RangeReportRow>> {
        if range.is_empty() {
            debug!("reversed month range, skipping range query");
            return Ok(Vec::new());
        }

        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT employee_id, salaried_month, no_pay, base_pay, gross_pay
                 FROM salary
                 WHERE salaried_month >= ?1 AND salaried_month <= ?2
                 ORDER BY salaried_month DESC, employee_id, id",
            )?;
            let rows = stmt
                .query_map(params![range.start(), range.end()], |row| {
                    Ok(RangeReportRow {
                        employee_id: row.get(0)?,
                        salaried_month: row.get(1)?,
                        no_pay: amount_from_sql(row, 2)?,
                        base_pay: amount_from_sql(row, 3)?,
                        gross_pay: amount_from_sql(row, 4)?,
                    })
                })?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    pub(crate) fn payroll_exists(
        conn: &Connection,
        employee_id: i64,
        salaried_month: NaiveDate,
    ) -> PayrollResult<bool> {
        let mut stmt =
            conn.prepare("SELECT 1 FROM salary WHERE employee_id = ?1 AND salaried_month = ?2")?;
        Ok(stmt.exists(params![employee_id, salaried_month])?)
    }

    /// Returns true if the ledger holds an entry for the employee and month.
    pub fn entry_exists(&self, employee_id: i64, salaried_month: NaiveDate) -> PayrollResult<bool> {
        self.with_conn(|conn| Self::payroll_exists(conn, employee_id, salaried_month))
    }

    /// Sums the absent days recorded for an employee over the calendar year
    /// containing `salaried_month`.
    pub fn absent_days_in_year(&self, employee_id: i64, salaried_month: NaiveDate) -> PayrollResult<u32> {
        let year = MonthRange::new(
            salaried_month.with_month(1).unwrap_or(salaried_month),
            salaried_month.with_month(12).unwrap_or(salaried_month),
        );

        self.with_conn(|conn| {
            let total = conn.query_row(
                "SELECT COALESCE(SUM(absent), 0) FROM salary
                 WHERE employee_id = ?1 AND salaried_month >= ?2 AND salaried_month <= ?3",
                params![employee_id, year.start(), year.end()],
                |row| row.get(0),
            )?;
            Ok(total)
        })
    }

    /// Returns the number of ledger entries.
    pub fn count_entries(&self) -> PayrollResult<u64> {
        self.with_conn(|conn| {
            let count = conn.query_row("SELECT COUNT(*) FROM salary", [], |row| row.get(0))?;
            Ok(count)
        })
    }
}
