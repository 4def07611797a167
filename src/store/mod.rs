//! SQLite persistence for employees and the payroll ledger.
//!
//! [`PayrollDb`] owns the single database connection for the process. Its
//! methods are spread over submodules by table: employee CRUD lives in
//! `employees`, the append-only salary ledger and its reporting queries in
//! `ledger`, and the sample-data bootstrap in [`seed`].
//!
//! Every mutating operation runs inside a transaction while the connection
//! mutex is held, so concurrent HTTP callers are serialized.

use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use rusqlite::types::Type;
use rusqlite::{Connection, Row, Transaction};
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use tracing::debug;

use crate::calculation::round_money;
use crate::error::{PayrollError, PayrollResult};

mod employees;
mod ledger;
pub mod seed;

/// Handle to the payroll database.
///
/// # Example
///
/// ```
/// use payroll_ledger::store::PayrollDb;
///
/// let db = PayrollDb::open_in_memory().unwrap();
/// db.initialize().unwrap();
/// assert_eq!(db.count_employees().unwrap(), 0);
/// ```
pub struct PayrollDb {
    conn: Mutex<Connection>,
}

impl PayrollDb {
    /// Opens (or creates) the database file at `path`.
    ///
    /// The schema is not touched until [`PayrollDb::initialize`] is called.
    pub fn open(path: impl AsRef<Path>) -> PayrollResult<Self> {
        let conn = Connection::open(path)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> PayrollResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Creates the `employees` and `salary` tables if they do not exist.
    ///
    /// Foreign keys are declared but SQLite enforcement stays off: ledger
    /// rows may reference employees that were deleted later.
    pub fn initialize(&self) -> PayrollResult<()> {
        self.with_transaction(|tx| {
            Self::create_employees_table(tx)?;
            Self::create_salary_table(tx)?;
            Ok(())
        })?;
        debug!("payroll database initialized");
        Ok(())
    }

    fn create_employees_table(conn: &Connection) -> PayrollResult<()> {
        let sql = "CREATE TABLE IF NOT EXISTS employees (
                id              INTEGER PRIMARY KEY AUTOINCREMENT,
                name            TEXT NOT NULL,
                monthly_salary  INTEGER NOT NULL,
                overtime_rate   INTEGER NOT NULL,
                allowances      INTEGER NOT NULL
            )";
        conn.execute(sql, ())?;
        Ok(())
    }

    fn create_salary_table(conn: &Connection) -> PayrollResult<()> {
        let sql = "CREATE TABLE IF NOT EXISTS salary (
                id              INTEGER PRIMARY KEY AUTOINCREMENT,
                employee_id     INTEGER NOT NULL,
                absent          INTEGER NOT NULL,
                holidays        INTEGER NOT NULL,
                overtime_hours  INTEGER NOT NULL,
                no_pay          REAL NOT NULL,
                base_pay        REAL NOT NULL,
                gross_pay       REAL NOT NULL,
                salaried_month  DATE NOT NULL,
                FOREIGN KEY (employee_id) REFERENCES employees (id)
            )";
        conn.execute(sql, ())?;
        conn.execute(
            "CREATE INDEX IF NOT EXISTS salary_month_idx ON salary (salaried_month, employee_id)",
            (),
        )?;
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, Connection> {
        // A panic mid-transaction drops the transaction, which rolls it back,
        // so the connection is still usable.
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs a read-only closure against the connection.
    pub(crate) fn with_conn<T>(
        &self,
        f: impl FnOnce(&Connection) -> PayrollResult<T>,
    ) -> PayrollResult<T> {
        let conn = self.lock();
        f(&conn)
    }

    /// Runs `f` inside a transaction, committing only if it succeeds.
    pub(crate) fn with_transaction<T>(
        &self,
        f: impl FnOnce(&Transaction<'_>) -> PayrollResult<T>,
    ) -> PayrollResult<T> {
        let mut conn = self.lock();
        let tx = conn.transaction()?;
        let value = f(&tx)?;
        tx.commit()?;
        Ok(value)
    }
}

/// Converts a money amount to the value stored in a REAL column.
pub(crate) fn amount_to_sql(amount: Decimal) -> f64 {
    round_money(amount).to_f64().unwrap_or_default()
}

/// Reads a money amount stored in column `idx`, rounded back to cents.
pub(crate) fn amount_from_sql(row: &Row<'_>, idx: usize) -> rusqlite::Result<Decimal> {
    let value: f64 = row.get(idx)?;
    Decimal::from_f64(value).map(round_money).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            Type::Real,
            format!("{} is not a valid amount", value).into(),
        )
    })
}
