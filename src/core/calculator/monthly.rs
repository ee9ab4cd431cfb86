use super::day::expected_hours;
use super::justified::credited_hours;
use super::weekly::{week_bounds, week_summary};
use crate::errors::AppResult;
use crate::models::employee::{DEFAULT_NORMAL_DAY_HOURS, Employee};
use crate::models::holiday::HolidayCalendar;
use crate::models::justification::Justification;
use crate::models::punch::PunchRecord;
use crate::models::summary::{MonthlyBalance, WeekReport};
use crate::utils::date::{date_range, ensure_range};
use crate::utils::time::round2;
use chrono::{Duration, NaiveDate};

/// Reconcile a month: worked, justified, weekly overtime, expected and banked hours.
///
/// `records` may include days outside the month: weeks straddling a month
/// boundary are evaluated with all their hours, while `worked_hours` only
/// counts the month itself. Days after `today` are left out of the
/// expected baseline but every week of the month is bucketed, so the
/// overtime of a future justified week does not depend on `today`.
pub fn monthly_balance(
    records: &[PunchRecord],
    justifications: &[Justification],
    employee: &Employee,
    holidays: &HolidayCalendar,
    month_start: NaiveDate,
    month_end: NaiveDate,
    today: NaiveDate,
) -> AppResult<MonthlyBalance> {
    ensure_range(month_start, month_end)?;

    let in_month = |d: NaiveDate| month_start <= d && d <= month_end;
    let month_records: Vec<&PunchRecord> = records.iter().filter(|r| in_month(r.date)).collect();

    let worked: f64 = month_records.iter().map(|r| r.hours).sum();
    let credit = credited_hours(employee, justifications, month_start, month_end, holidays)?;
    let counted_until = month_end.min(today);

    // Week buckets keyed by Monday: every week touching the month, elapsed or not.
    let last_monday = week_bounds(month_end).0;
    let mondays: Vec<NaiveDate> =
        std::iter::successors(Some(week_bounds(month_start).0), |m| Some(*m + Duration::days(7)))
            .take_while(|m| *m <= last_monday)
            .collect();

    let ceiling = employee.ceiling();
    let mut weeks = Vec::with_capacity(mondays.len());
    let mut overtime = 0.0;

    for start in mondays {
        let end = start + Duration::days(6);
        let week_records: Vec<&PunchRecord> = records
            .iter()
            .filter(|r| start <= r.date && r.date <= end)
            .collect();

        let justified = credited_hours(employee, justifications, start, end, holidays)?.hours;
        let summary = week_summary(week_records.iter().copied(), justified, ceiling);
        overtime += summary.overtime;

        weeks.push(WeekReport {
            start,
            end,
            worked: round2(week_records.iter().map(|r| r.hours).sum()),
            justified,
            summary,
        });
    }

    let expected = expected_baseline(employee, holidays, month_start, counted_until);

    Ok(MonthlyBalance {
        month_start,
        month_end,
        worked_hours: round2(worked),
        justified_hours: credit.hours,
        justified_days: credit.days,
        overtime_hours: round2(overtime),
        expected_hours: round2(expected),
        banked_balance: round2(worked + credit.hours - expected),
        days_worked: month_records.len(),
        weeks,
    })
}

/// Expected hours over `[from, to]` minus the estimated days off.
///
/// Days off are not looked up individually: `days_off * max(1, days / 7)`
/// days (rounded) are deducted at the average daily expectation of the range.
fn expected_baseline(
    employee: &Employee,
    holidays: &HolidayCalendar,
    from: NaiveDate,
    to: NaiveDate,
) -> f64 {
    let (total, days) = date_range(from, to).fold((0.0, 0usize), |(sum, n), d| {
        (sum + expected_hours(d, employee, holidays), n + 1)
    });

    let weeks = (days as f64 / 7.0).max(1.0);
    let days_off = (employee.days_off() as f64 * weeks).round();
    let average = if days > 0 {
        total / days as f64
    } else {
        DEFAULT_NORMAL_DAY_HOURS
    };

    (total - days_off * average).max(0.0)
}
