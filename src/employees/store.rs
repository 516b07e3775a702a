//! Employee Storage
//! Mission: Persist employees in SQLite and answer paginated listing queries
//!
//! One connection behind a mutex; every call runs in its own short transaction.

use crate::employees::{
    models::{Employee, EmployeePage, NewEmployee},
    query::{casefold, EmployeeQuery},
};
use anyhow::{Context, Result};
use parking_lot::Mutex;
use rusqlite::{
    functions::FunctionFlags, params, params_from_iter, types::Value, Connection, OpenFlags, Row,
};
use std::path::Path;
use tracing::{debug, info, warn};

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS employees (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    role TEXT NOT NULL,
    date_joined TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_employees_name ON employees(name);
CREATE INDEX IF NOT EXISTS idx_employees_role ON employees(role);
"#;

const EMPLOYEE_COLUMNS: &str = "id, name, email, role, date_joined";

pub struct EmployeeStore {
    conn: Mutex<Connection>,
}

impl EmployeeStore {
    /// Open (or create) a file-backed store
    pub fn open(db_path: &Path) -> Result<Self> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_NO_MUTEX; // guarded by our own Mutex

        let conn = Connection::open_with_flags(db_path, flags)
            .with_context(|| format!("Failed to open database at {}", db_path.display()))?;

        let journal_mode: String = conn
            .query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))
            .unwrap_or_default();
        if !journal_mode.eq_ignore_ascii_case("wal") {
            warn!("WAL mode not active, journal_mode = {}", journal_mode);
        }

        let store = Self::init(conn)?;
        info!(
            "📇 Employee database ready at {} ({} records)",
            db_path.display(),
            store.count()?
        );
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Failed to open in-memory database")?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self> {
        // SQLite's own LIKE/lower() only fold ASCII.
        conn.create_scalar_function(
            "casefold",
            1,
            FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
            |ctx| Ok(casefold(&ctx.get::<String>(0)?)),
        )
        .context("Failed to register casefold()")?;

        conn.execute_batch(SCHEMA_SQL)
            .context("Failed to initialize database schema")?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Insert a new employee and return the stored row, id included
    pub fn add(&self, new: &NewEmployee) -> Result<Employee> {
        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;

        let employee = tx
            .query_row(
                &format!(
                    "INSERT INTO employees (name, email, role, date_joined)
                     VALUES (?1, ?2, ?3, ?4)
                     RETURNING {EMPLOYEE_COLUMNS}"
                ),
                params![new.name, new.email, new.role, new.date_joined],
                Self::row_to_employee,
            )
            .context("Failed to insert employee")?;

        tx.commit().context("Failed to commit employee insert")?;

        debug!("Inserted employee {} ({})", employee.id, employee.name);
        Ok(employee)
    }

    /// Count matches, then fetch one page ordered by id ascending
    pub fn list(&self, query: &EmployeeQuery) -> Result<EmployeePage> {
        let filter = query.filter();

        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;

        let total: i64 = tx
            .query_row(
                &format!("SELECT COUNT(*) FROM employees{}", filter.where_sql),
                params_from_iter(filter.args.iter()),
                |row| row.get(0),
            )
            .context("Failed to count employees")?;

        let mut page_args = filter.args;
        page_args.push(Value::Integer(query.limit() as i64));
        page_args.push(Value::Integer(query.offset()));

        let data = {
            let mut stmt = tx.prepare_cached(&format!(
                "SELECT {EMPLOYEE_COLUMNS} FROM employees{}
                 ORDER BY id ASC
                 LIMIT ? OFFSET ?",
                filter.where_sql
            ))?;

            let rows = stmt
                .query_map(params_from_iter(page_args.iter()), Self::row_to_employee)?
                .collect::<Result<Vec<_>, _>>()
                .context("Failed to read employees")?;
            rows
        };

        tx.commit()?;

        Ok(EmployeePage {
            data,
            total: total as u64,
            page: query.page(),
            limit: query.limit(),
        })
    }

    pub fn count(&self) -> Result<u64> {
        let conn = self.conn.lock();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM employees", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    fn row_to_employee(row: &Row<'_>) -> rusqlite::Result<Employee> {
        Ok(Employee {
            id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
            role: row.get(3)?,
            date_joined: row.get(4)?,
        })
    }
}
