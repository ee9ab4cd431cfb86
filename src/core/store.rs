//! Storage contract consumed by the punch, justification and report logic.
//!
//! The calculators never see this trait; the logic layers fetch what they
//! need through it and hand plain values to the engine.

use crate::errors::AppResult;
use crate::models::employee::Employee;
use crate::models::holiday::{Holiday, HolidayCalendar};
use crate::models::justification::{Justification, JustificationStatus};
use crate::models::punch::PunchRecord;
use chrono::NaiveDate;

/// Filter for justification queries. `None` fields match everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct JustificationFilter {
    pub employee_id: Option<i64>,
    pub status: Option<JustificationStatus>,
    /// Keep only justifications overlapping this inclusive range.
    pub overlapping: Option<(NaiveDate, NaiveDate)>,
}

impl JustificationFilter {
    pub fn approved_for(employee_id: i64, from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            employee_id: Some(employee_id),
            status: Some(JustificationStatus::Approved),
            overlapping: Some((from, to)),
        }
    }
}

pub trait AttendanceStore {
    fn employee(&self, id: i64) -> AppResult<Option<Employee>>;

    fn employee_by_email(&self, email: &str) -> AppResult<Option<Employee>>;

    fn employees(&self, only_active: bool) -> AppResult<Vec<Employee>>;

    fn insert_employee(&mut self, employee: &Employee) -> AppResult<i64>;

    fn update_employee(&mut self, employee: &Employee) -> AppResult<()>;

    fn punch_record(&self, employee_id: i64, date: NaiveDate) -> AppResult<Option<PunchRecord>>;

    /// Records of one employee in `[from, to]`, ordered by date.
    fn punch_records(
        &self,
        employee_id: i64,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<PunchRecord>>;

    /// Records of every employee on `date`.
    fn records_on(&self, date: NaiveDate) -> AppResult<Vec<PunchRecord>>;

    /// Insert or update the record for (employee, date). Returns its id.
    fn save_punch_record(&mut self, record: &PunchRecord) -> AppResult<i64>;

    fn justification(&self, id: i64) -> AppResult<Option<Justification>>;

    fn justifications(&self, filter: &JustificationFilter) -> AppResult<Vec<Justification>>;

    fn insert_justification(&mut self, justification: &Justification) -> AppResult<i64>;

    fn update_justification(&mut self, justification: &Justification) -> AppResult<()>;

    fn holidays(&self, from: NaiveDate, to: NaiveDate) -> AppResult<HolidayCalendar>;

    fn holiday_list(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<Holiday>>;

    fn save_holiday(&mut self, date: NaiveDate, description: &str) -> AppResult<()>;

    fn delete_holiday(&mut self, date: NaiveDate) -> AppResult<()>;

    /// Append a line to the internal audit log.
    fn audit(&self, operation: &str, target: &str, message: &str) -> AppResult<()>;
}
