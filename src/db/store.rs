use crate::core::store::{AttendanceStore, JustificationFilter};
use crate::db::initialize::init_db;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::employee::Employee;
use crate::models::holiday::{Holiday, HolidayCalendar};
use crate::models::justification::Justification;
use crate::models::punch::PunchRecord;
use chrono::NaiveDate;
use rusqlite::Connection;

/// `AttendanceStore` backed by the SQLite schema in `db::migrate`.
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    /// Open the database at `path`, applying pending migrations.
    pub fn open(path: &str) -> AppResult<Self> {
        Self::from_pool(DbPool::new(path)?)
    }

    pub fn in_memory() -> AppResult<Self> {
        Self::from_pool(DbPool::in_memory()?)
    }

    pub fn from_pool(pool: DbPool) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl AttendanceStore for SqliteStore {
    fn employee(&self, id: i64) -> AppResult<Option<Employee>> {
        queries::load_employee(self.conn(), id)
    }

    fn employee_by_email(&self, email: &str) -> AppResult<Option<Employee>> {
        queries::find_employee_by_email(self.conn(), email)
    }

    fn employees(&self, only_active: bool) -> AppResult<Vec<Employee>> {
        queries::load_employees(self.conn(), only_active)
    }

    fn insert_employee(&mut self, employee: &Employee) -> AppResult<i64> {
        queries::insert_employee(self.conn(), employee)
    }

    fn update_employee(&mut self, employee: &Employee) -> AppResult<()> {
        queries::update_employee(self.conn(), employee)
    }

    fn punch_record(&self, employee_id: i64, date: NaiveDate) -> AppResult<Option<PunchRecord>> {
        queries::load_punch_record(self.conn(), employee_id, date)
    }

    fn punch_records(
        &self,
        employee_id: i64,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<PunchRecord>> {
        queries::load_punch_records(self.conn(), employee_id, from, to)
    }

    fn records_on(&self, date: NaiveDate) -> AppResult<Vec<PunchRecord>> {
        queries::load_records_on(self.conn(), date)
    }

    fn save_punch_record(&mut self, record: &PunchRecord) -> AppResult<i64> {
        queries::upsert_punch_record(self.conn(), record)
    }

    fn justification(&self, id: i64) -> AppResult<Option<Justification>> {
        queries::load_justification(self.conn(), id)
    }

    fn justifications(&self, filter: &JustificationFilter) -> AppResult<Vec<Justification>> {
        queries::load_justifications(self.conn(), filter)
    }

    fn insert_justification(&mut self, justification: &Justification) -> AppResult<i64> {
        queries::insert_justification(self.conn(), justification)
    }

    fn update_justification(&mut self, justification: &Justification) -> AppResult<()> {
        queries::update_justification(self.conn(), justification)
    }

    fn holidays(&self, from: NaiveDate, to: NaiveDate) -> AppResult<HolidayCalendar> {
        Ok(queries::load_holidays(self.conn(), from, to)?
            .into_iter()
            .collect())
    }

    fn holiday_list(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<Holiday>> {
        queries::load_holidays(self.conn(), from, to)
    }

    fn save_holiday(&mut self, date: NaiveDate, description: &str) -> AppResult<()> {
        queries::upsert_holiday(self.conn(), date, description)
    }

    fn delete_holiday(&mut self, date: NaiveDate) -> AppResult<()> {
        queries::delete_holiday(self.conn(), date)
    }

    fn audit(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        audit(self.conn(), operation, target, message)
    }
}
