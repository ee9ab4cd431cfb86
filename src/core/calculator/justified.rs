use super::day::expected_hours;
use crate::errors::AppResult;
use crate::models::employee::Employee;
use crate::models::holiday::HolidayCalendar;
use crate::models::justification::Justification;
use crate::models::summary::JustifiedCredit;
use crate::utils::date::{date_range, ensure_range};
use crate::utils::time::round2;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Expected-hour credit for the days in `[window_start, window_end]` covered
/// by the employee's approved justifications.
///
/// A day covered by several overlapping justifications is credited once.
pub fn credited_hours(
    employee: &Employee,
    justifications: &[Justification],
    window_start: NaiveDate,
    window_end: NaiveDate,
    holidays: &HolidayCalendar,
) -> AppResult<JustifiedCredit> {
    ensure_range(window_start, window_end)?;

    let mut credited: BTreeSet<NaiveDate> = BTreeSet::new();
    let mut hours = 0.0;

    let approved = justifications
        .iter()
        .filter(|j| j.employee_id == employee.id && j.is_approved());

    for j in approved {
        let from = j.start.max(window_start);
        let to = j.end.min(window_end);

        for day in date_range(from, to) {
            if credited.insert(day) {
                hours += expected_hours(day, employee, holidays);
            }
        }
    }

    Ok(JustifiedCredit {
        hours: round2(hours),
        days: credited.len(),
    })
}
