use crate::core::store::AttendanceStore;
use crate::errors::{AppError, AppResult};
use crate::models::holiday::Holiday;
use chrono::NaiveDate;

pub struct HolidayLogic;

impl HolidayLogic {
    pub fn add<S: AttendanceStore>(store: &mut S, date: NaiveDate, description: &str) -> AppResult<()> {
        store.save_holiday(date, description)?;
        store.audit("holiday_add", &date.to_string(), description)
    }

    pub fn delete<S: AttendanceStore>(store: &mut S, date: NaiveDate) -> AppResult<()> {
        store.delete_holiday(date)?;
        store.audit("holiday_del", &date.to_string(), "holiday removed")
    }

    /// Holidays of `year`, or every holiday when `None`.
    pub fn list<S: AttendanceStore>(store: &S, year: Option<i32>) -> AppResult<Vec<Holiday>> {
        // four-digit years keep the stored text dates comparable
        let (first, last) = year.map_or((1, 9999), |y| (y, y));
        let from = NaiveDate::from_ymd_opt(first, 1, 1);
        let to = NaiveDate::from_ymd_opt(last, 12, 31);
        match (from, to) {
            (Some(from), Some(to)) => store.holiday_list(from, to),
            _ => Err(AppError::InvalidDate(format!("year {first}"))),
        }
    }
}
