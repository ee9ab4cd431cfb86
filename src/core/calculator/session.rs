//! Worked hours for a single day of punches, plus the lunch-return policy.

use crate::models::day_type::DayType;
use crate::models::punch::Punches;
use crate::utils::time::{minutes_between, parse_time, round2, truncate_to_minute};
use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_LUNCH_NORMAL: i64 = 60;
pub const DEFAULT_MIN_LUNCH_SPECIAL: i64 = 30;

/// Worked hours from the four punches of one day.
///
/// Without an exit the session is in progress and `now` closes it. If the
/// employee is at lunch (lunch-out without lunch-in) the time since leaving
/// does not count. At most one lunch interval is subtracted and the result
/// is clamped at zero.
pub fn compute_hours(
    entry: Option<NaiveTime>,
    lunch_out: Option<NaiveTime>,
    lunch_in: Option<NaiveTime>,
    exit: Option<NaiveTime>,
    now: NaiveTime,
) -> f64 {
    let Some(entry) = entry else {
        return 0.0;
    };

    let now = truncate_to_minute(now);
    let end = exit.unwrap_or(now);
    let mut minutes = minutes_between(entry, end);

    match (lunch_out, lunch_in) {
        (Some(out), Some(back)) => minutes -= minutes_between(out, back),
        (Some(out), None) if exit.is_none() => minutes -= minutes_between(out, now),
        _ => {}
    }

    round2((minutes as f64 / 60.0).max(0.0))
}

/// Hours for a typed day of punches.
pub fn punches_hours(punches: &Punches, now: NaiveTime) -> f64 {
    let [entry, lunch_out, lunch_in, exit] = punches.fields();
    compute_hours(entry, lunch_out, lunch_in, exit, now)
}

/// Result of computing hours from textual (`HH:MM`) punches.
#[derive(Debug, Clone, PartialEq)]
pub enum HoursOutcome {
    Hours(f64),
    /// One of the punches could not be parsed. Counts as zero hours.
    MalformedTime(String),
}

impl HoursOutcome {
    pub fn hours(&self) -> f64 {
        match self {
            HoursOutcome::Hours(h) => *h,
            HoursOutcome::MalformedTime(_) => 0.0,
        }
    }
}

/// Same as [`compute_hours`] over persisted text values.
/// Empty strings count as missing punches.
pub fn compute_hours_str(
    entry: Option<&str>,
    lunch_out: Option<&str>,
    lunch_in: Option<&str>,
    exit: Option<&str>,
    now: NaiveTime,
) -> HoursOutcome {
    let mut parsed = [None; 4];
    for (slot, raw) in parsed.iter_mut().zip([entry, lunch_out, lunch_in, exit]) {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            None => {}
            Some(s) => match parse_time(s) {
                Some(t) => *slot = Some(t),
                None => return HoursOutcome::MalformedTime(s.to_string()),
            },
        }
    }

    let [entry, lunch_out, lunch_in, exit] = parsed;
    HoursOutcome::Hours(compute_hours(entry, lunch_out, lunch_in, exit, now))
}

/// Minimum lunch length before a lunch-return punch is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunchPolicy {
    pub normal_minutes: i64,
    pub special_minutes: i64,
}

impl Default for LunchPolicy {
    fn default() -> Self {
        Self {
            normal_minutes: DEFAULT_MIN_LUNCH_NORMAL,
            special_minutes: DEFAULT_MIN_LUNCH_SPECIAL,
        }
    }
}

impl LunchPolicy {
    pub fn minimum(&self, day: DayType) -> i64 {
        match day {
            DayType::Normal => self.normal_minutes,
            DayType::Special => self.special_minutes,
        }
    }

    pub fn earliest_return(&self, lunch_out: NaiveTime, day: DayType) -> NaiveTime {
        lunch_out + Duration::minutes(self.minimum(day))
    }

    /// Minutes still missing before returning at `at` is allowed,
    /// or `None` when the minimum has elapsed.
    pub fn remaining(&self, lunch_out: NaiveTime, at: NaiveTime, day: DayType) -> Option<i64> {
        let minimum = self.minimum(day);
        let elapsed = minutes_between(lunch_out, truncate_to_minute(at));
        (elapsed < minimum).then(|| minimum - elapsed)
    }
}
