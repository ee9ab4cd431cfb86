use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension};

/// Ensure that the `log` table exists; applied migrations are tracked there.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20260101_0001_create_employees",
        description: "Created employees table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS employees (
            id                 INTEGER PRIMARY KEY AUTOINCREMENT,
            name               TEXT NOT NULL,
            email              TEXT NOT NULL UNIQUE,
            role               TEXT NOT NULL DEFAULT '',
            weekly_ceiling     REAL NOT NULL DEFAULT 40.0,
            normal_day_hours   REAL NOT NULL DEFAULT 8.0,
            special_day_hours  REAL NOT NULL DEFAULT 6.0,
            weekly_days_off    INTEGER NOT NULL DEFAULT 2,
            is_manager         INTEGER NOT NULL DEFAULT 0,
            active             INTEGER NOT NULL DEFAULT 1,
            created_at         TEXT NOT NULL DEFAULT (datetime('now', 'localtime'))
        );
        "#,
    },
    Migration {
        version: "20260101_0002_create_punch_records",
        description: "Created punch_records table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS punch_records (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id     INTEGER NOT NULL REFERENCES employees(id),
            date            TEXT NOT NULL,
            entry_time      TEXT,
            lunch_out_time  TEXT,
            lunch_in_time   TEXT,
            exit_time       TEXT,
            hours           REAL NOT NULL DEFAULT 0,
            day_type        TEXT NOT NULL DEFAULT 'normal' CHECK(day_type IN ('normal','special')),
            status          TEXT NOT NULL DEFAULT 'in_progress' CHECK(status IN ('in_progress','complete')),
            note            TEXT NOT NULL DEFAULT '',
            edited_by       INTEGER REFERENCES employees(id),
            edited_at       TEXT,
            edit_reason     TEXT NOT NULL DEFAULT '',
            UNIQUE(employee_id, date)
        );

        CREATE INDEX IF NOT EXISTS idx_punch_records_date ON punch_records(date);
        "#,
    },
    Migration {
        version: "20260101_0003_create_justifications",
        description: "Created justifications table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS justifications (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id   INTEGER NOT NULL REFERENCES employees(id),
            start_date    TEXT NOT NULL,
            end_date      TEXT NOT NULL,
            kind          TEXT NOT NULL,
            description   TEXT NOT NULL DEFAULT '',
            attachment    TEXT,
            days          INTEGER NOT NULL DEFAULT 1,
            status        TEXT NOT NULL DEFAULT 'pending' CHECK(status IN ('pending','approved','rejected')),
            approved_by   INTEGER REFERENCES employees(id),
            resolved_at   TEXT,
            created_at    TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_justifications_range
            ON justifications(employee_id, start_date, end_date);
        "#,
    },
    Migration {
        version: "20260101_0004_create_holidays",
        description: "Created holidays table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS holidays (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            date         TEXT NOT NULL UNIQUE,
            description  TEXT NOT NULL DEFAULT ''
        );
        "#,
    },
];

fn is_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        conn.execute_batch(m.sql)
            .map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;

        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
            [m.version, m.description],
        )?;

        success(format!("Migration applied: {}", m.version));
    }

    Ok(())
}

/// Number of migrations recorded as applied.
pub fn applied_count(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row(
        "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
        [],
        |row| row.get(0),
    )?)
}
