use crate::models::punch::PunchRecord;
use crate::models::summary::WeekSummary;
use crate::utils::time::round2;
use chrono::{Datelike, Duration, NaiveDate};

/// Monday and Sunday of the ISO week containing `date`.
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = date - Duration::days(date.weekday().num_days_from_monday() as i64);
    (start, start + Duration::days(6))
}

pub fn weekly_overtime(total: f64, ceiling: f64) -> f64 {
    if total > ceiling {
        round2(total - ceiling)
    } else {
        0.0
    }
}

/// Sum one week of records plus the justified credit, split at the ceiling.
pub fn week_summary<'a, I>(records: I, justified_hours: f64, ceiling: f64) -> WeekSummary
where
    I: IntoIterator<Item = &'a PunchRecord>,
{
    let (worked, days_worked) = records
        .into_iter()
        .fold((0.0, 0), |(sum, n), r| (sum + r.hours, n + 1));

    let total = worked + justified_hours;

    WeekSummary {
        total: round2(total),
        normal_portion: round2(total.min(ceiling)),
        overtime: weekly_overtime(total, ceiling),
        days_worked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::day_type::DayType;
    use crate::models::punch::Punches;
    use chrono::NaiveTime;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn record(date: &str, hours: f64) -> PunchRecord {
        let entry = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        let mut r = PunchRecord::new(1, d(date), Punches::start(entry), DayType::Normal);
        r.hours = hours;
        r
    }

    #[test]
    fn bounds_run_monday_to_sunday() {
        assert_eq!(week_bounds(d("2026-03-04")), (d("2026-03-02"), d("2026-03-08")));
        assert_eq!(week_bounds(d("2026-03-02")), (d("2026-03-02"), d("2026-03-08")));
        assert_eq!(week_bounds(d("2026-03-08")), (d("2026-03-02"), d("2026-03-08")));
        // spans a month boundary
        assert_eq!(week_bounds(d("2026-04-01")), (d("2026-03-30"), d("2026-04-05")));
    }

    #[test]
    fn justified_saturday_pushes_week_over_the_ceiling() {
        let records: Vec<_> = ["2026-03-02", "2026-03-03", "2026-03-04", "2026-03-05", "2026-03-06"]
            .iter()
            .map(|date| record(date, 8.0))
            .collect();

        let s = week_summary(&records, 6.0, 40.0);
        assert_eq!(s.total, 46.0);
        assert_eq!(s.overtime, 6.0);
        assert_eq!(s.normal_portion, 40.0);
        assert_eq!(s.days_worked, 5);
    }

    #[test]
    fn no_overtime_at_or_below_the_ceiling() {
        let records = vec![record("2026-03-02", 8.0), record("2026-03-03", 7.5)];
        let s = week_summary(&records, 0.0, 40.0);
        assert_eq!(s.total, 15.5);
        assert_eq!(s.overtime, 0.0);
        assert_eq!(s.normal_portion, 15.5);

        for total in [0.0, 12.25, 39.99, 40.0, 40.01, 55.5] {
            let ot = weekly_overtime(total, 40.0);
            if total <= 40.0 {
                assert_eq!(ot, 0.0);
            } else {
                assert_eq!(ot, round2(total - 40.0));
            }
        }
    }
}
