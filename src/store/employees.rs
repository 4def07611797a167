//! Employee store: registration, search, update and deletion.

use rusqlite::{Connection, OptionalExtension, Row, params};
use tracing::info;

use super::PayrollDb;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, EmployeeDraft};

const EMPLOYEE_COLUMNS: &str = "id, name, monthly_salary, overtime_rate, allowances";

fn employee_from_row(row: &Row<'_>) -> rusqlite::Result<Employee> {
    Ok(Employee {
        id: row.get(0)?,
        name: row.get(1)?,
        monthly_salary: row.get(2)?,
        overtime_rate: row.get(3)?,
        allowances: row.get(4)?,
    })
}

impl PayrollDb {
    /// Registers a new employee and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns a validation error, before touching the database, if the draft
    /// has a blank name.
    pub fn register_employee(&self, draft: EmployeeDraft) -> PayrollResult<Employee> {
        draft.validate()?;

        let employee = self.with_transaction(|tx| Self::insert_employee(tx, draft))?;
        info!(employee_id = employee.id, name = %employee.name, "employee registered");
        Ok(employee)
    }

    pub(crate) fn insert_employee(conn: &Connection, draft: EmployeeDraft) -> PayrollResult<Employee> {
        conn.execute(
            "INSERT INTO employees (name, monthly_salary, overtime_rate, allowances)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                draft.name,
                draft.monthly_salary,
                draft.overtime_rate,
                draft.allowances
            ],
        )?;
        Ok(Employee::from_draft(conn.last_insert_rowid(), draft))
    }

    /// Replaces every field of an existing employee.
    ///
    /// # Errors
    ///
    /// - [`PayrollError::Validation`] if the draft has a blank name
    /// - [`PayrollError::EmployeeNotFound`] if no employee has `id`
    pub fn update_employee(&self, id: i64, draft: EmployeeDraft) -> PayrollResult<Employee> {
        draft.validate()?;

        let employee = self.with_transaction(|tx| {
            let changed = tx.execute(
                "UPDATE employees
                 SET name = ?1, monthly_salary = ?2, overtime_rate = ?3, allowances = ?4
                 WHERE id = ?5",
                params![
                    draft.name,
                    draft.monthly_salary,
                    draft.overtime_rate,
                    draft.allowances,
                    id
                ],
            )?;
            if changed == 0 {
                return Err(PayrollError::EmployeeNotFound { id });
            }
            Ok(Employee::from_draft(id, draft))
        })?;

        info!(employee_id = id, "employee updated");
        Ok(employee)
    }

    /// Deletes an employee. Their ledger entries are left in place.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::EmployeeNotFound`] if no employee has `id`.
    pub fn delete_employee(&self, id: i64) -> PayrollResult<()> {
        self.with_transaction(|tx| {
            let changed = tx.execute("DELETE FROM employees WHERE id = ?1", [id])?;
            if changed == 0 {
                return Err(PayrollError::EmployeeNotFound { id });
            }
            Ok(())
        })?;

        info!(employee_id = id, "employee deleted");
        Ok(())
    }

    /// Looks up an employee by identifier.
    pub fn find_employee(&self, id: i64) -> PayrollResult<Option<Employee>> {
        self.with_conn(|conn| {
            let sql = format!("SELECT {} FROM employees WHERE id = ?1", EMPLOYEE_COLUMNS);
            let employee = conn.query_row(&sql, [id], employee_from_row).optional()?;
            Ok(employee)
        })
    }

    /// Looks up an employee, treating absence as an error.
    pub fn get_employee(&self, id: i64) -> PayrollResult<Employee> {
        self.find_employee(id)?
            .ok_or(PayrollError::EmployeeNotFound { id })
    }

    /// Lists every employee ordered by identifier.
    pub fn list_employees(&self) -> PayrollResult<Vec<Employee>> {
        self.with_conn(|conn| {
            let sql = format!("SELECT {} FROM employees ORDER BY id", EMPLOYEE_COLUMNS);
            let mut stmt = conn.prepare(&sql)?;
            let employees = stmt
                .query_map([], employee_from_row)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(employees)
        })
    }

    /// Returns the number of registered employees.
    pub fn count_employees(&self) -> PayrollResult<u64> {
        self.with_conn(|conn| {
            let count = conn.query_row("SELECT COUNT(*) FROM employees", [], |row| row.get(0))?;
            Ok(count)
        })
    }
}
