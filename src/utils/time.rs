//! Time utilities: parsing HH:MM, minute arithmetic, rounding.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// Optional `--at` argument, defaulting to the current local time.
pub fn time_or_now(input: Option<&String>) -> AppResult<NaiveTime> {
    Ok(parse_optional_time(input)?.unwrap_or_else(now))
}

/// Current local time truncated to the minute, the resolution punches are stored at.
pub fn now() -> NaiveTime {
    truncate_to_minute(chrono::Local::now().time())
}

pub fn truncate_to_minute(t: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(t.hour(), t.minute(), 0).unwrap_or(t)
}

pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    (end - start).num_minutes()
}

pub fn fmt_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

pub fn fmt_opt_time(t: Option<NaiveTime>) -> String {
    t.map(fmt_time).unwrap_or_else(|| "--:--".to_string())
}

/// Round to two decimals, the precision every hour figure is reported at.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
