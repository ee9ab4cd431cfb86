use crate::core::report::MonthlyReport;
use crate::models::punch::PunchRecord;
use crate::models::summary::WeekReport;
use crate::utils::time::fmt_opt_time;
use chrono::NaiveDate;
use serde::Serialize;

/// Flat row per punch record, shared by CSV and JSON.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    pub date: String,
    pub day_type: String,
    pub entry: String,
    pub lunch_out: String,
    pub lunch_in: String,
    pub exit: String,
    pub hours: f64,
    pub status: String,
    pub note: String,
}

impl From<&PunchRecord> for RecordExport {
    fn from(r: &PunchRecord) -> Self {
        let [entry, lunch_out, lunch_in, exit] = r.punches.fields();
        Self {
            date: r.date_str(),
            day_type: r.day_type.to_db_str().to_string(),
            entry: fmt_opt_time(entry),
            lunch_out: fmt_opt_time(lunch_out),
            lunch_in: fmt_opt_time(lunch_in),
            exit: fmt_opt_time(exit),
            hours: r.hours,
            status: r.status().to_db_str().to_string(),
            note: r.note.clone(),
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct MonthTotals {
    pub worked_hours: f64,
    pub justified_hours: f64,
    pub justified_days: usize,
    pub overtime_hours: f64,
    pub expected_hours: f64,
    pub banked_balance: f64,
    pub days_worked: usize,
}

/// Whole monthly report for one employee.
#[derive(Serialize, Clone, Debug)]
pub struct MonthExport {
    pub company: String,
    pub employee_id: i64,
    pub employee: String,
    pub email: String,
    pub month_start: NaiveDate,
    pub month_end: NaiveDate,
    pub records: Vec<RecordExport>,
    pub weeks: Vec<WeekReport>,
    pub totals: MonthTotals,
}

impl MonthExport {
    pub fn from_report(report: &MonthlyReport, company: &str) -> Self {
        let b = &report.balance;
        Self {
            company: company.to_string(),
            employee_id: report.employee.id,
            employee: report.employee.name.clone(),
            email: report.employee.email.clone(),
            month_start: b.month_start,
            month_end: b.month_end,
            records: report.records.iter().map(RecordExport::from).collect(),
            weeks: b.weeks.clone(),
            totals: MonthTotals {
                worked_hours: b.worked_hours,
                justified_hours: b.justified_hours,
                justified_days: b.justified_days,
                overtime_hours: b.overtime_hours,
                expected_hours: b.expected_hours,
                banked_balance: b.banked_balance,
                days_worked: b.days_worked,
            },
        }
    }

    /// `(label, value)` pairs written after the CSV record rows.
    pub(crate) fn totals_rows(&self) -> Vec<(&'static str, String)> {
        let t = &self.totals;
        vec![
            ("worked_hours", format!("{:.2}", t.worked_hours)),
            ("justified_hours", format!("{:.2}", t.justified_hours)),
            ("justified_days", t.justified_days.to_string()),
            ("overtime_hours", format!("{:.2}", t.overtime_hours)),
            ("expected_hours", format!("{:.2}", t.expected_hours)),
            ("banked_balance", format!("{:.2}", t.banked_balance)),
            ("days_worked", t.days_worked.to_string()),
        ]
    }
}
