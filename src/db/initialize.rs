use crate::db::log::audit;
use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension, params};

pub const DEFAULT_MANAGER_EMAIL: &str = "admin@rponto.local";

const NATIONAL_HOLIDAYS_2026: &[(&str, &str)] = &[
    ("2026-01-01", "Confraternização Universal"),
    ("2026-02-16", "Carnaval"),
    ("2026-02-17", "Carnaval"),
    ("2026-04-03", "Sexta-feira Santa"),
    ("2026-04-21", "Tiradentes"),
    ("2026-05-01", "Dia do Trabalho"),
    ("2026-06-04", "Corpus Christi"),
    ("2026-09-07", "Independência do Brasil"),
    ("2026-10-12", "Nossa Sra. Aparecida"),
    ("2026-11-02", "Finados"),
    ("2026-11-15", "Proclamação da República"),
    ("2026-12-25", "Natal"),
];

/// Initialize the database.
/// Delegates all schema creation / upgrades to the migration engine.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;
    Ok(())
}

/// Seed reference data: national holidays and a default manager.
/// Existing rows are left untouched, so this is safe to run repeatedly.
pub fn seed_defaults(conn: &Connection) -> AppResult<()> {
    let mut inserted = 0;
    for (date, description) in NATIONAL_HOLIDAYS_2026 {
        inserted += conn.execute(
            "INSERT OR IGNORE INTO holidays (date, description) VALUES (?1, ?2)",
            params![date, description],
        )?;
    }
    if inserted > 0 {
        audit(conn, "init", "holidays", &format!("seeded {inserted} holidays"))?;
    }

    let manager: Option<i64> = conn
        .query_row(
            "SELECT id FROM employees WHERE email = ?1",
            [DEFAULT_MANAGER_EMAIL],
            |row| row.get(0),
        )
        .optional()?;

    if manager.is_none() {
        conn.execute(
            "INSERT INTO employees (name, email, role, is_manager)
             VALUES ('Administrator', ?1, 'Manager', 1)",
            [DEFAULT_MANAGER_EMAIL],
        )?;
        audit(
            conn,
            "init",
            "employees",
            &format!("default manager {DEFAULT_MANAGER_EMAIL} created"),
        )?;
    }

    Ok(())
}
