use crate::core::calculator::{credited_hours, monthly_balance, week_bounds, week_summary};
use crate::core::store::{AttendanceStore, JustificationFilter};
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::justification::{Justification, JustificationStatus};
use crate::models::punch::PunchRecord;
use crate::models::summary::{MonthlyBalance, WeekReport, WeekSummary};
use crate::utils::date::{ensure_range, month_bounds};
use crate::utils::time::round2;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Serialize)]
pub struct WeeklyReport {
    pub employee: Employee,
    pub records: Vec<PunchRecord>,
    pub week: WeekReport,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlyReport {
    pub employee: Employee,
    /// Records inside the month only.
    pub records: Vec<PunchRecord>,
    /// Justifications of any status overlapping the month.
    pub justifications: Vec<Justification>,
    pub balance: MonthlyBalance,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardRow {
    pub employee: Employee,
    pub week: WeekSummary,
    pub month: MonthlyBalance,
    pub today: Option<PunchRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub date: NaiveDate,
    pub rows: Vec<DashboardRow>,
    pub pending: Vec<Justification>,
    /// Active non-manager employees with no record and no approved justification on `date`.
    pub absentees: Vec<Employee>,
}

pub struct ReportLogic;

impl ReportLogic {
    /// The Monday–Sunday week containing `date`.
    pub fn week<S: AttendanceStore>(
        store: &S,
        employee_id: i64,
        date: NaiveDate,
    ) -> AppResult<WeeklyReport> {
        let employee = load_employee(store, employee_id)?;
        let (start, end) = week_bounds(date);

        let records = store.punch_records(employee_id, start, end)?;
        let justifications =
            store.justifications(&JustificationFilter::approved_for(employee_id, start, end))?;
        let holidays = store.holidays(start, end)?;

        let justified = credited_hours(&employee, &justifications, start, end, &holidays)?.hours;
        let summary = week_summary(&records, justified, employee.ceiling());

        let week = WeekReport {
            start,
            end,
            worked: round2(records.iter().map(|r| r.hours).sum()),
            justified,
            summary,
        };

        Ok(WeeklyReport {
            employee,
            records,
            week,
        })
    }

    /// Month `[month_start, month_end]` as seen on `today`.
    pub fn month<S: AttendanceStore>(
        store: &S,
        employee_id: i64,
        month_start: NaiveDate,
        month_end: NaiveDate,
        today: NaiveDate,
    ) -> AppResult<MonthlyReport> {
        let employee = load_employee(store, employee_id)?;
        month_report(store, employee, month_start, month_end, today)
    }

    /// Manager overview for `date`: every active employee's week and month,
    /// pending justifications, and who is missing.
    pub fn dashboard<S: AttendanceStore>(store: &S, date: NaiveDate) -> AppResult<Dashboard> {
        let employees = store.employees(true)?;
        let (month_start, month_end) = month_bounds(date);
        let (week_start, _) = week_bounds(date);

        let records_today = store.records_on(date)?;
        let present: HashSet<i64> = records_today.iter().map(|r| r.employee_id).collect();

        let covered: HashSet<i64> = store
            .justifications(&JustificationFilter {
                employee_id: None,
                status: Some(JustificationStatus::Approved),
                overlapping: Some((date, date)),
            })?
            .iter()
            .map(|j| j.employee_id)
            .collect();

        let mut rows = Vec::with_capacity(employees.len());
        let mut absentees = Vec::new();

        for employee in employees {
            if !employee.is_manager
                && !present.contains(&employee.id)
                && !covered.contains(&employee.id)
            {
                absentees.push(employee.clone());
            }

            let report = month_report(store, employee, month_start, month_end, date)?;
            let week = report
                .balance
                .weeks
                .iter()
                .find(|w| w.start == week_start)
                .map(|w| w.summary)
                .unwrap_or_default();

            let today = records_today
                .iter()
                .find(|r| r.employee_id == report.employee.id)
                .cloned();

            rows.push(DashboardRow {
                employee: report.employee,
                week,
                month: report.balance,
                today,
            });
        }

        let pending = store.justifications(&JustificationFilter {
            status: Some(JustificationStatus::Pending),
            ..Default::default()
        })?;

        Ok(Dashboard {
            date,
            rows,
            pending,
            absentees,
        })
    }
}

fn load_employee<S: AttendanceStore>(store: &S, employee_id: i64) -> AppResult<Employee> {
    store
        .employee(employee_id)?
        .ok_or(AppError::EmployeeNotFound(employee_id))
}

fn month_report<S: AttendanceStore>(
    store: &S,
    employee: Employee,
    month_start: NaiveDate,
    month_end: NaiveDate,
    today: NaiveDate,
) -> AppResult<MonthlyReport> {
    ensure_range(month_start, month_end)?;

    // Whole weeks around the month, so straddling weeks keep all their hours.
    let (from, _) = week_bounds(month_start);
    let (_, to) = week_bounds(month_end);

    let records = store.punch_records(employee.id, from, to)?;
    let approved = store.justifications(&JustificationFilter::approved_for(employee.id, from, to))?;
    let holidays = store.holidays(from, to)?;

    let balance = monthly_balance(
        &records,
        &approved,
        &employee,
        &holidays,
        month_start,
        month_end,
        today,
    )?;

    let justifications = store.justifications(&JustificationFilter {
        employee_id: Some(employee.id),
        status: None,
        overlapping: Some((month_start, month_end)),
    })?;

    let records = records
        .into_iter()
        .filter(|r| month_start <= r.date && r.date <= month_end)
        .collect();

    Ok(MonthlyReport {
        employee,
        records,
        justifications,
        balance,
    })
}
