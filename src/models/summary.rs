use super::day_type::DayType;
use super::punch::{PunchKind, PunchStage, Punches};
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// Totals for one Monday–Sunday week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct WeekSummary {
    pub total: f64,
    pub normal_portion: f64,
    pub overtime: f64,
    pub days_worked: usize,
}

/// A week bucket as shown in reports, keyed by its Monday.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekReport {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub worked: f64,
    pub justified: f64,
    pub summary: WeekSummary,
}

/// Expected-hour credit granted by approved justifications in a window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JustifiedCredit {
    pub hours: f64,
    pub days: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyBalance {
    pub month_start: NaiveDate,
    pub month_end: NaiveDate,
    pub worked_hours: f64,
    pub justified_hours: f64,
    pub justified_days: usize,
    pub overtime_hours: f64,
    pub expected_hours: f64,
    pub banked_balance: f64,
    pub days_worked: usize,
    pub weeks: Vec<WeekReport>,
}

/// Live view of one employee-day.
#[derive(Debug, Clone, Serialize)]
pub struct DayStatus {
    pub date: NaiveDate,
    pub day_type: DayType,
    pub holiday: Option<String>,
    pub punches: Option<Punches>,
    pub stage: PunchStage,
    pub next: Option<PunchKind>,
    pub hours: f64,
    pub expected: f64,
    pub min_lunch_minutes: i64,
    pub earliest_lunch_return: Option<NaiveTime>,
}
