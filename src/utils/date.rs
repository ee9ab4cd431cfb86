use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Duration, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse a mandatory `YYYY-MM-DD` argument.
pub fn require_date(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// Optional `--date` argument, defaulting to today.
pub fn date_or_today(s: Option<&String>) -> AppResult<NaiveDate> {
    match s {
        Some(v) => require_date(v),
        None => Ok(today()),
    }
}

/// First and last day of the month containing `date`.
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = date.with_day(1).unwrap_or(date);
    let next = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };
    let end = next.map(|n| n - Duration::days(1)).unwrap_or(start);
    (start, end)
}

/// Parse `YYYY-MM` into the month's first and last day.
pub fn parse_month(s: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidMonth(s.to_string()))?;
    Ok(month_bounds(first))
}

/// Every date in `[from, to]`; empty when `from > to`.
pub fn date_range(from: NaiveDate, to: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    from.iter_days().take_while(move |d| *d <= to)
}

pub fn ensure_range(start: NaiveDate, end: NaiveDate) -> AppResult<()> {
    if end < start {
        return Err(AppError::InvalidRange { start, end });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_bounds_handles_december_and_leap_years() {
        let (s, e) = month_bounds(NaiveDate::from_ymd_opt(2026, 12, 15).unwrap());
        assert_eq!(s, NaiveDate::from_ymd_opt(2026, 12, 1).unwrap());
        assert_eq!(e, NaiveDate::from_ymd_opt(2026, 12, 31).unwrap());

        let (_, e) = parse_month("2028-02").unwrap();
        assert_eq!(e, NaiveDate::from_ymd_opt(2028, 2, 29).unwrap());
    }

    #[test]
    fn bad_month_is_rejected() {
        assert!(matches!(parse_month("2026-13"), Err(AppError::InvalidMonth(_))));
        assert!(matches!(parse_month("march"), Err(AppError::InvalidMonth(_))));
    }

    #[test]
    fn date_range_is_inclusive_and_empty_when_reversed() {
        let a = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let b = NaiveDate::from_ymd_opt(2026, 3, 3).unwrap();
        assert_eq!(date_range(a, b).count(), 3);
        assert_eq!(date_range(b, a).count(), 0);
        assert!(ensure_range(b, a).is_err());
    }
}
