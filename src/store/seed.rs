//! Sample-data bootstrap.
//!
//! Seeds an empty database with sample employees and a history of ledger
//! entries so reports have something to show. This is an explicit step run by
//! the binary when `seed.enabled` is set, never a side effect of opening the
//! database.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::{debug, info};

use super::PayrollDb;
use crate::calculation::{PayrollInputs, SalaryCycle, calculate_payroll};
use crate::config::SeedConfig;
use crate::error::PayrollResult;
use crate::models::{Employee, EmployeeDraft, NewPayrollEntry, next_month, normalize_month};

/// Sample employees as (name, monthly salary, overtime rate, allowances).
pub const SAMPLE_EMPLOYEES: [(&str, u32, u32, u32); 15] = [
    ("John Doe", 5000, 15, 1000),
    ("Jane Smith", 4500, 12, 800),
    ("Michael Johnson", 6000, 20, 1500),
    ("Sarah Williams", 5500, 18, 1200),
    ("Robert Brown", 4000, 10, 600),
    ("Emily Davis", 4800, 14, 900),
    ("David Anderson", 5200, 16, 1100),
    ("Jennifer Wilson", 5100, 16, 1050),
    ("Daniel Thompson", 4700, 12, 850),
    ("Olivia Garcia", 5200, 15, 1050),
    ("Matthew Martinez", 6000, 20, 1500),
    ("Sophia Clark", 4500, 13, 800),
    ("James Rodriguez", 4900, 14, 950),
    ("Lily Lewis", 5100, 17, 1050),
    ("Benjamin Young", 5300, 17, 1150),
];

/// What a bootstrap run wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    /// Employees inserted.
    pub employees_inserted: usize,
    /// Ledger entries inserted.
    pub entries_inserted: usize,
    /// Employee/month pairs skipped because an entry already existed.
    pub duplicates_skipped: usize,
}

/// Seeds empty tables.
///
/// Employees are inserted only if the `employees` table is empty, and ledger
/// history only if the `salary` table is empty.
pub fn bootstrap(db: &PayrollDb, seed: &SeedConfig, anchor_day: u32) -> PayrollResult<SeedSummary> {
    let mut summary = SeedSummary::default();

    if db.count_employees()? == 0 {
        summary.employees_inserted = seed_sample_employees(db)?;
    }

    if db.count_entries()? == 0 {
        let generated = generate_salary_entries(db, seed.start_month, seed.end_month, anchor_day)?;
        summary.entries_inserted = generated.entries_inserted;
        summary.duplicates_skipped = generated.duplicates_skipped;
    }

    info!(
        employees_inserted = summary.employees_inserted,
        entries_inserted = summary.entries_inserted,
        duplicates_skipped = summary.duplicates_skipped,
        "sample data bootstrap finished"
    );
    Ok(summary)
}

/// Inserts [`SAMPLE_EMPLOYEES`] and returns how many were written.
pub fn seed_sample_employees(db: &PayrollDb) -> PayrollResult<usize> {
    db.with_transaction(|tx| {
        for (name, monthly_salary, overtime_rate, allowances) in SAMPLE_EMPLOYEES {
            PayrollDb::insert_employee(
                tx,
                EmployeeDraft {
                    name: name.to_string(),
                    monthly_salary,
                    overtime_rate,
                    allowances,
                },
            )?;
        }
        Ok(SAMPLE_EMPLOYEES.len())
    })
}

/// Generates one ledger entry per employee for every month from `start`
/// (inclusive) up to `end` (exclusive).
///
/// Attendance is derived from the employee id and month so runs are
/// reproducible; figures come from [`calculate_payroll`] over the month's
/// length. An employee/month pair that already has an entry is skipped.
pub fn generate_salary_entries(
    db: &PayrollDb,
    start: NaiveDate,
    end: NaiveDate,
    anchor_day: u32,
) -> PayrollResult<SeedSummary> {
    let employees = db.list_employees()?;

    db.with_transaction(|tx| {
        let mut summary = SeedSummary::default();
        let mut current = start.with_day(1).unwrap_or(start);

        while current < end {
            let salaried_month = normalize_month(current, anchor_day)?;
            let cycle = SalaryCycle::for_month(current);

            for employee in &employees {
                if PayrollDb::payroll_exists(tx, employee.id, salaried_month)? {
                    debug!(
                        employee_id = employee.id,
                        salaried_month = %salaried_month,
                        "entry already exists, skipping"
                    );
                    summary.duplicates_skipped += 1;
                    continue;
                }

                PayrollDb::insert_payroll(tx, sample_entry(employee, salaried_month, cycle))?;
                summary.entries_inserted += 1;
            }

            current = match next_month(current) {
                Some(next) => next,
                None => break,
            };
        }

        Ok(summary)
    })
}

fn sample_entry(employee: &Employee, salaried_month: NaiveDate, cycle: SalaryCycle) -> NewPayrollEntry {
    let month_index = (salaried_month.year() as i64) * 12 + salaried_month.month() as i64;
    let spread = |factor: i64, offset: i64, modulus: i64| {
        (employee.id * factor + month_index * offset).rem_euclid(modulus) as u32
    };

    let absent = spread(7, 3, 4);
    let holidays = spread(1, 1, 6);
    let overtime_hours = spread(5, 11, 21);

    let inputs = PayrollInputs::for_employee(employee, absent, overtime_hours);
    let figures = calculate_payroll(&inputs, cycle).rounded();

    NewPayrollEntry {
        employee_id: employee.id,
        absent,
        holidays,
        overtime_hours,
        no_pay: figures.no_pay,
        base_pay: figures.base_pay,
        gross_pay: figures.gross_pay,
        salaried_month,
    }
}
