use crate::core::store::JustificationFilter;
use crate::errors::{AppError, AppResult};
use crate::models::day_type::DayType;
use crate::models::employee::Employee;
use crate::models::holiday::Holiday;
use crate::models::justification::{Justification, JustificationKind, JustificationStatus};
use crate::models::punch::{PunchRecord, Punches};
use crate::ui::messages::warning;
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const DATE_FMT: &str = "%Y-%m-%d";
const TIME_FMT: &str = "%H:%M";

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

fn get_date(row: &Row, col: &str) -> Result<NaiveDate> {
    let s: String = row.get(col)?;
    let idx = row.as_ref().column_index(col)?;
    NaiveDate::parse_from_str(&s, DATE_FMT).map_err(|_| conversion_error(idx, AppError::InvalidDate(s)))
}

fn get_opt_time(row: &Row, col: &str) -> Result<Option<NaiveTime>> {
    let idx = row.as_ref().column_index(col)?;
    match row.get::<_, Option<String>>(col)? {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => NaiveTime::parse_from_str(s.trim(), TIME_FMT)
            .map(Some)
            .map_err(|_| conversion_error(idx, AppError::InvalidTime(s))),
    }
}

fn fmt_date(d: NaiveDate) -> String {
    d.format(DATE_FMT).to_string()
}

fn fmt_time(t: Option<NaiveTime>) -> Option<String> {
    t.map(|t| t.format(TIME_FMT).to_string())
}

// ---------------------------
// employees
// ---------------------------

pub fn map_employee(row: &Row) -> Result<Employee> {
    Ok(Employee {
        id: row.get("id")?,
        name: row.get("name")?,
        email: row.get("email")?,
        role: row.get("role")?,
        weekly_ceiling: row.get("weekly_ceiling")?,
        normal_day_hours: row.get("normal_day_hours")?,
        special_day_hours: row.get("special_day_hours")?,
        weekly_days_off: row.get::<_, i64>("weekly_days_off")?.max(0) as u32,
        is_manager: row.get::<_, i32>("is_manager")? == 1,
        active: row.get::<_, i32>("active")? == 1,
    })
}

pub fn insert_employee(conn: &Connection, e: &Employee) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO employees (name, email, role, weekly_ceiling, normal_day_hours,
                                special_day_hours, weekly_days_off, is_manager, active)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            e.name,
            e.email,
            e.role,
            e.weekly_ceiling,
            e.normal_day_hours,
            e.special_day_hours,
            e.weekly_days_off,
            e.is_manager as i32,
            e.active as i32,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_employee(conn: &Connection, e: &Employee) -> AppResult<()> {
    let n = conn.execute(
        "UPDATE employees
         SET name = ?1, email = ?2, role = ?3, weekly_ceiling = ?4,
             normal_day_hours = ?5, special_day_hours = ?6, weekly_days_off = ?7,
             is_manager = ?8, active = ?9
         WHERE id = ?10",
        params![
            e.name,
            e.email,
            e.role,
            e.weekly_ceiling,
            e.normal_day_hours,
            e.special_day_hours,
            e.weekly_days_off,
            e.is_manager as i32,
            e.active as i32,
            e.id,
        ],
    )?;
    if n == 0 {
        return Err(AppError::EmployeeNotFound(e.id));
    }
    Ok(())
}

pub fn load_employee(conn: &Connection, id: i64) -> AppResult<Option<Employee>> {
    let mut stmt = conn.prepare_cached("SELECT * FROM employees WHERE id = ?1")?;
    Ok(stmt.query_row([id], map_employee).optional()?)
}

pub fn find_employee_by_email(conn: &Connection, email: &str) -> AppResult<Option<Employee>> {
    let mut stmt = conn.prepare_cached("SELECT * FROM employees WHERE email = ?1")?;
    Ok(stmt.query_row([email], map_employee).optional()?)
}

pub fn load_employees(conn: &Connection, only_active: bool) -> AppResult<Vec<Employee>> {
    let mut stmt = conn.prepare_cached(
        "SELECT * FROM employees
         WHERE (?1 = 0 OR active = 1)
         ORDER BY name ASC, id ASC",
    )?;
    let rows = stmt.query_map([only_active as i32], map_employee)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_employees(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM employees", [], |row| row.get(0))?)
}

// ---------------------------
// punch_records
// ---------------------------

pub fn map_punch_record(row: &Row) -> Result<PunchRecord> {
    let date = get_date(row, "date")?;

    let entry = get_opt_time(row, "entry_time")?;
    let lunch_out = get_opt_time(row, "lunch_out_time")?;
    let lunch_in = get_opt_time(row, "lunch_in_time")?;
    let exit = get_opt_time(row, "exit_time")?;

    let punches = Punches::from_fields(entry, lunch_out, lunch_in, exit)
        .map_err(|e| conversion_error(0, e))?
        .ok_or_else(|| {
            conversion_error(
                0,
                AppError::InvalidTransition(format!("record on {date} has no entry punch")),
            )
        })?;

    let dt_str: String = row.get("day_type")?;
    let day_type = DayType::from_db_str(&dt_str).ok_or_else(|| {
        conversion_error(0, AppError::Other(format!("Invalid day type: {dt_str}")))
    })?;

    Ok(PunchRecord {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        date,
        punches,
        day_type,
        hours: row.get("hours")?,
        note: row.get("note")?,
        edited_by: row.get("edited_by")?,
        edited_at: row.get("edited_at")?,
        edit_reason: row.get("edit_reason")?,
    })
}

fn collect_records(
    stmt: &mut rusqlite::CachedStatement<'_>,
    params: impl rusqlite::Params,
) -> AppResult<Vec<PunchRecord>> {
    let rows = stmt.query_map(params, map_punch_record)?;
    let mut out = Vec::new();
    for r in rows {
        match r.map_err(AppError::from) {
            Ok(rec) => out.push(rec),
            // counts as zero hours; `correct` overwrites the row
            Err(e) if e.is_unreadable_row() => {
                warning(format!("Skipping unreadable punch record: {e}"));
            }
            Err(e) => return Err(e),
        }
    }
    Ok(out)
}

pub fn load_punch_record(
    conn: &Connection,
    employee_id: i64,
    date: NaiveDate,
) -> AppResult<Option<PunchRecord>> {
    let mut stmt =
        conn.prepare_cached("SELECT * FROM punch_records WHERE employee_id = ?1 AND date = ?2")?;
    Ok(stmt
        .query_row(params![employee_id, fmt_date(date)], map_punch_record)
        .optional()?)
}

pub fn load_punch_records(
    conn: &Connection,
    employee_id: i64,
    from: NaiveDate,
    to: NaiveDate,
) -> AppResult<Vec<PunchRecord>> {
    let mut stmt = conn.prepare_cached(
        "SELECT * FROM punch_records
         WHERE employee_id = ?1 AND date BETWEEN ?2 AND ?3
         ORDER BY date ASC",
    )?;
    collect_records(&mut stmt, params![employee_id, fmt_date(from), fmt_date(to)])
}

pub fn load_records_on(conn: &Connection, date: NaiveDate) -> AppResult<Vec<PunchRecord>> {
    let mut stmt = conn.prepare_cached(
        "SELECT * FROM punch_records
         WHERE date = ?1
         ORDER BY employee_id ASC",
    )?;
    collect_records(&mut stmt, params![fmt_date(date)])
}

/// Insert or update the record for (employee, date) and return its id.
pub fn upsert_punch_record(conn: &Connection, rec: &PunchRecord) -> AppResult<i64> {
    let [entry, lunch_out, lunch_in, exit] = rec.punches.fields();

    conn.execute(
        "INSERT INTO punch_records (employee_id, date, entry_time, lunch_out_time, lunch_in_time,
                                    exit_time, hours, day_type, status, note,
                                    edited_by, edited_at, edit_reason)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
         ON CONFLICT(employee_id, date) DO UPDATE SET
             entry_time = excluded.entry_time,
             lunch_out_time = excluded.lunch_out_time,
             lunch_in_time = excluded.lunch_in_time,
             exit_time = excluded.exit_time,
             hours = excluded.hours,
             day_type = excluded.day_type,
             status = excluded.status,
             note = excluded.note,
             edited_by = excluded.edited_by,
             edited_at = excluded.edited_at,
             edit_reason = excluded.edit_reason",
        params![
            rec.employee_id,
            rec.date_str(),
            fmt_time(entry),
            fmt_time(lunch_out),
            fmt_time(lunch_in),
            fmt_time(exit),
            rec.hours,
            rec.day_type.to_db_str(),
            rec.status().to_db_str(),
            rec.note,
            rec.edited_by,
            rec.edited_at,
            rec.edit_reason,
        ],
    )?;

    Ok(conn.query_row(
        "SELECT id FROM punch_records WHERE employee_id = ?1 AND date = ?2",
        params![rec.employee_id, rec.date_str()],
        |row| row.get(0),
    )?)
}

/// Untyped view of a punch row, used by the recalculation pass so that
/// rows with malformed times can still be reported.
#[derive(Debug, Clone)]
pub struct RawPunchRow {
    pub id: i64,
    pub employee_id: i64,
    pub date: String,
    pub entry: Option<String>,
    pub lunch_out: Option<String>,
    pub lunch_in: Option<String>,
    pub exit: Option<String>,
    pub hours: f64,
}

pub fn load_raw_punch_rows(conn: &Connection) -> AppResult<Vec<RawPunchRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, employee_id, date, entry_time, lunch_out_time, lunch_in_time, exit_time, hours
         FROM punch_records
         ORDER BY date ASC, employee_id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(RawPunchRow {
            id: row.get(0)?,
            employee_id: row.get(1)?,
            date: row.get(2)?,
            entry: row.get(3)?,
            lunch_out: row.get(4)?,
            lunch_in: row.get(5)?,
            exit: row.get(6)?,
            hours: row.get(7)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn update_stored_hours(conn: &Connection, id: i64, hours: f64) -> AppResult<()> {
    conn.execute(
        "UPDATE punch_records SET hours = ?1 WHERE id = ?2",
        params![hours, id],
    )?;
    Ok(())
}

// ---------------------------
// justifications
// ---------------------------

pub fn map_justification(row: &Row) -> Result<Justification> {
    let kind_str: String = row.get("kind")?;
    let kind = JustificationKind::from_db_str(&kind_str).ok_or_else(|| {
        conversion_error(0, AppError::Other(format!("Invalid justification kind: {kind_str}")))
    })?;

    let status_str: String = row.get("status")?;
    let status = JustificationStatus::from_db_str(&status_str).ok_or_else(|| {
        conversion_error(
            0,
            AppError::Other(format!("Invalid justification status: {status_str}")),
        )
    })?;

    Ok(Justification {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        start: get_date(row, "start_date")?,
        end: get_date(row, "end_date")?,
        kind,
        description: row.get("description")?,
        attachment: row.get("attachment")?,
        status,
        approved_by: row.get("approved_by")?,
        resolved_at: row.get("resolved_at")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_justification(conn: &Connection, j: &Justification) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO justifications (employee_id, start_date, end_date, kind, description,
                                     attachment, days, status, approved_by, resolved_at, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            j.employee_id,
            fmt_date(j.start),
            fmt_date(j.end),
            j.kind.to_db_str(),
            j.description,
            j.attachment,
            j.days(),
            j.status.to_db_str(),
            j.approved_by,
            j.resolved_at,
            j.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_justification(conn: &Connection, j: &Justification) -> AppResult<()> {
    let n = conn.execute(
        "UPDATE justifications
         SET status = ?1, approved_by = ?2, resolved_at = ?3, description = ?4, attachment = ?5
         WHERE id = ?6",
        params![
            j.status.to_db_str(),
            j.approved_by,
            j.resolved_at,
            j.description,
            j.attachment,
            j.id,
        ],
    )?;
    if n == 0 {
        return Err(AppError::JustificationNotFound(j.id));
    }
    Ok(())
}

pub fn load_justification(conn: &Connection, id: i64) -> AppResult<Option<Justification>> {
    let mut stmt = conn.prepare_cached("SELECT * FROM justifications WHERE id = ?1")?;
    Ok(stmt.query_row([id], map_justification).optional()?)
}

pub fn load_justifications(
    conn: &Connection,
    filter: &JustificationFilter,
) -> AppResult<Vec<Justification>> {
    let mut stmt = conn.prepare_cached(
        "SELECT * FROM justifications
         WHERE (?1 IS NULL OR employee_id = ?1)
           AND (?2 IS NULL OR status = ?2)
           AND (?3 IS NULL OR end_date >= ?3)
           AND (?4 IS NULL OR start_date <= ?4)
         ORDER BY start_date ASC, id ASC",
    )?;

    let (from, to) = match filter.overlapping {
        Some((from, to)) => (Some(fmt_date(from)), Some(fmt_date(to))),
        None => (None, None),
    };

    let rows = stmt.query_map(
        params![
            filter.employee_id,
            filter.status.map(|s| s.to_db_str()),
            from,
            to
        ],
        map_justification,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------
// holidays
// ---------------------------

/// Add a holiday, or replace the description of an existing one.
pub fn upsert_holiday(conn: &Connection, date: NaiveDate, description: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO holidays (date, description) VALUES (?1, ?2)
         ON CONFLICT(date) DO UPDATE SET description = excluded.description",
        params![fmt_date(date), description],
    )?;
    Ok(())
}

pub fn delete_holiday(conn: &Connection, date: NaiveDate) -> AppResult<()> {
    let n = conn.execute("DELETE FROM holidays WHERE date = ?1", [fmt_date(date)])?;
    if n == 0 {
        return Err(AppError::HolidayNotFound(date));
    }
    Ok(())
}

pub fn load_holidays(conn: &Connection, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<Holiday>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, description FROM holidays
         WHERE date BETWEEN ?1 AND ?2
         ORDER BY date ASC",
    )?;

    let rows = stmt.query_map(params![fmt_date(from), fmt_date(to)], |row| {
        Ok(Holiday {
            id: row.get("id")?,
            date: get_date(row, "date")?,
            description: row.get("description")?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::DbPool;
    use crate::db::migrate::run_pending_migrations;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn t(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    fn setup() -> DbPool {
        let pool = DbPool::in_memory().unwrap();
        run_pending_migrations(&pool.conn).unwrap();
        pool
    }

    #[test]
    fn upsert_keeps_one_row_per_day() {
        let pool = setup();
        let emp = insert_employee(&pool.conn, &Employee::new(0, "Ana", "ana@example.com")).unwrap();

        let mut rec = PunchRecord::new(emp, d("2026-03-02"), Punches::start(t("08:00")), DayType::Normal);
        let id1 = upsert_punch_record(&pool.conn, &rec).unwrap();

        rec.punches = rec.punches.apply(crate::models::punch::PunchKind::Exit, t("16:00")).unwrap();
        rec.hours = 8.0;
        let id2 = upsert_punch_record(&pool.conn, &rec).unwrap();

        assert_eq!(id1, id2);
        let loaded = load_punch_record(&pool.conn, emp, d("2026-03-02")).unwrap().unwrap();
        assert_eq!(loaded.punches.exit(), Some(t("16:00")));
        assert_eq!(loaded.hours, 8.0);
    }

    #[test]
    fn justification_filter_matches_overlap_and_status() {
        let pool = setup();
        let emp = insert_employee(&pool.conn, &Employee::new(0, "Ana", "ana@example.com")).unwrap();

        let mut j = Justification::new(emp, d("2026-03-02"), d("2026-03-04"), JustificationKind::Medical);
        insert_justification(&pool.conn, &j).unwrap();
        j.start = d("2026-03-20");
        j.end = d("2026-03-20");
        j.status = JustificationStatus::Approved;
        insert_justification(&pool.conn, &j).unwrap();

        let overlapping = load_justifications(
            &pool.conn,
            &JustificationFilter {
                employee_id: Some(emp),
                status: None,
                overlapping: Some((d("2026-03-04"), d("2026-03-10"))),
            },
        )
        .unwrap();
        assert_eq!(overlapping.len(), 1);
        assert_eq!(overlapping[0].start, d("2026-03-02"));

        let approved =
            load_justifications(&pool.conn, &JustificationFilter::approved_for(emp, d("2026-03-01"), d("2026-03-31")))
                .unwrap();
        assert_eq!(approved.len(), 1);
        assert_eq!(approved[0].start, d("2026-03-20"));
    }

    #[test]
    fn malformed_stored_time_fails_conversion() {
        let pool = setup();
        let emp = insert_employee(&pool.conn, &Employee::new(0, "Ana", "ana@example.com")).unwrap();
        pool.conn
            .execute(
                "INSERT INTO punch_records (employee_id, date, entry_time) VALUES (?1, '2026-03-02', '8h')",
                [emp],
            )
            .unwrap();

        let err = load_punch_record(&pool.conn, emp, d("2026-03-02")).unwrap_err();
        assert!(err.is_unreadable_row());
        let raw = load_raw_punch_rows(&pool.conn).unwrap();
        assert_eq!(raw[0].entry.as_deref(), Some("8h"));
    }

    #[test]
    fn range_loads_skip_unreadable_rows() {
        let pool = setup();
        let emp = insert_employee(&pool.conn, &Employee::new(0, "Ana", "ana@example.com")).unwrap();
        pool.conn
            .execute(
                "INSERT INTO punch_records (employee_id, date, entry_time, lunch_in_time, exit_time, hours)
                 VALUES (?1, '2026-03-02', '08:00', NULL, '16:00', 8.0),
                        (?1, '2026-03-03', '8h', NULL, NULL, 0),
                        (?1, '2026-03-04', '08:00', '13:00', NULL, 0)",
                [emp],
            )
            .unwrap();

        let records = load_punch_records(&pool.conn, emp, d("2026-03-01"), d("2026-03-31")).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date, d("2026-03-02"));

        assert!(load_records_on(&pool.conn, d("2026-03-03")).unwrap().is_empty());
        assert!(load_records_on(&pool.conn, d("2026-03-04")).unwrap().is_empty());
    }

    #[test]
    fn deleting_missing_holiday_is_an_error() {
        let pool = setup();
        upsert_holiday(&pool.conn, d("2026-12-25"), "Natal").unwrap();
        upsert_holiday(&pool.conn, d("2026-12-25"), "Christmas").unwrap();

        let h = load_holidays(&pool.conn, d("2026-12-01"), d("2026-12-31")).unwrap();
        assert_eq!(h.len(), 1);
        assert_eq!(h[0].description, "Christmas");

        delete_holiday(&pool.conn, d("2026-12-25")).unwrap();
        assert!(matches!(
            delete_holiday(&pool.conn, d("2026-12-25")),
            Err(AppError::HolidayNotFound(_))
        ));
    }
}
