use crate::core::calculator::{LunchPolicy, classify, punches_hours};
use crate::core::store::AttendanceStore;
use crate::errors::{AppError, AppResult};
use crate::models::day_type::DayType;
use crate::models::punch::{PunchKind, PunchRecord, PunchStage, Punches};
use crate::models::summary::DayStatus;
use crate::utils::time::{fmt_opt_time, fmt_time};
use chrono::{Local, NaiveDate, NaiveTime};
use std::fmt;

/// Why a punch was refused. Informational: nothing was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    DayComplete,
    LunchTooShort {
        minimum: i64,
        remaining: i64,
        earliest: NaiveTime,
    },
    OutOfOrder {
        stage: PunchStage,
        requested: PunchKind,
    },
    BeforePrevious {
        previous: NaiveTime,
        requested: NaiveTime,
    },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::DayComplete => write!(f, "All punches for the day are already registered."),
            Advisory::LunchTooShort {
                minimum,
                remaining,
                earliest,
            } => write!(
                f,
                "Minimum lunch break: {minimum} minutes. {remaining} min left, return allowed from {}.",
                fmt_time(*earliest)
            ),
            Advisory::OutOfOrder { stage, requested } => write!(
                f,
                "Cannot register '{}' while the day is '{}'.",
                requested.as_str(),
                stage.label()
            ),
            Advisory::BeforePrevious {
                previous,
                requested,
            } => write!(
                f,
                "Punch at {} is earlier than the previous punch ({}).",
                fmt_time(*requested),
                fmt_time(*previous)
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub enum PunchOutcome {
    Recorded {
        kind: PunchKind,
        at: NaiveTime,
        record: PunchRecord,
    },
    Refused(Advisory),
}

/// Punch registration, manager corrections and the live day view.
pub struct PunchLogic;

impl PunchLogic {
    /// Register a punch for `employee_id` on `date` at `at`.
    ///
    /// Without `kind` the next punch of the natural sequence is used.
    pub fn register<S: AttendanceStore>(
        store: &mut S,
        policy: &LunchPolicy,
        employee_id: i64,
        date: NaiveDate,
        at: NaiveTime,
        kind: Option<PunchKind>,
    ) -> AppResult<PunchOutcome> {
        store
            .employee(employee_id)?
            .ok_or(AppError::EmployeeNotFound(employee_id))?;

        let existing = store.punch_record(employee_id, date)?;
        let stage = PunchStage::of(existing.as_ref().map(|r| &r.punches));

        if stage == PunchStage::Complete {
            return Ok(PunchOutcome::Refused(Advisory::DayComplete));
        }
        let Some(kind) = kind.or_else(|| stage.next_kind()) else {
            return Ok(PunchOutcome::Refused(Advisory::DayComplete));
        };

        let mut record = match existing {
            Some(record) => record,
            None => {
                let holidays = store.holidays(date, date)?;
                let day_type = classify(date, &holidays);
                PunchRecord::new(employee_id, date, Punches::start(at), day_type)
            }
        };

        let punches = if stage == PunchStage::NoRecord {
            if kind != PunchKind::Entry {
                return Ok(PunchOutcome::Refused(Advisory::OutOfOrder {
                    stage,
                    requested: kind,
                }));
            }
            record.punches
        } else {
            let previous = record.punches.last_time();
            if at < previous {
                return Ok(PunchOutcome::Refused(Advisory::BeforePrevious {
                    previous,
                    requested: at,
                }));
            }

            if kind == PunchKind::LunchIn
                && let Some(lunch_out) = record.punches.lunch_out()
                && let Some(remaining) = policy.remaining(lunch_out, at, record.day_type)
            {
                return Ok(PunchOutcome::Refused(Advisory::LunchTooShort {
                    minimum: policy.minimum(record.day_type),
                    remaining,
                    earliest: policy.earliest_return(lunch_out, record.day_type),
                }));
            }

            match record.punches.apply(kind, at) {
                Some(p) => p,
                None => {
                    return Ok(PunchOutcome::Refused(Advisory::OutOfOrder {
                        stage,
                        requested: kind,
                    }));
                }
            }
        };

        record.punches = punches;
        record.hours = punches_hours(&punches, at);
        record.id = store.save_punch_record(&record)?;

        store.audit(
            "punch",
            &format!("employee {employee_id}"),
            &format!(
                "{} at {} on {} ({:.2}h)",
                kind.label(),
                fmt_time(at),
                record.date_str(),
                record.hours
            ),
        )?;

        Ok(PunchOutcome::Recorded { kind, at, record })
    }

    /// Manager correction: overwrite the four punches of a day.
    ///
    /// Creates the record when the day has none or its stored punches cannot
    /// be read. Stored hours are recomputed, using `now` to close an
    /// in-progress day.
    #[allow(clippy::too_many_arguments)]
    pub fn correct<S: AttendanceStore>(
        store: &mut S,
        employee_id: i64,
        date: NaiveDate,
        fields: [Option<NaiveTime>; 4],
        editor_id: i64,
        reason: &str,
        note: Option<&str>,
        now: NaiveTime,
    ) -> AppResult<PunchRecord> {
        store
            .employee(employee_id)?
            .ok_or(AppError::EmployeeNotFound(employee_id))?;

        let [entry, lunch_out, lunch_in, exit] = fields;
        let punches = Punches::from_fields(entry, lunch_out, lunch_in, exit)?.ok_or_else(|| {
            AppError::InvalidTransition("a record needs at least an entry punch".into())
        })?;

        let (existing, before) = match store.punch_record(employee_id, date) {
            Ok(Some(r)) => {
                let before = describe(&r.punches);
                (Some(r), before)
            }
            Ok(None) => (None, "no record".to_string()),
            // the correction replaces the undecodable row
            Err(e) if e.is_unreadable_row() => (None, "unreadable record".to_string()),
            Err(e) => return Err(e),
        };

        let mut record = match existing {
            Some(record) => record,
            None => {
                let holidays = store.holidays(date, date)?;
                PunchRecord::new(employee_id, date, punches, classify(date, &holidays))
            }
        };

        record.punches = punches;
        record.hours = punches_hours(&punches, now);
        record.edited_by = Some(editor_id);
        record.edited_at = Some(Local::now().to_rfc3339());
        record.edit_reason = reason.to_string();
        if let Some(n) = note {
            record.note = n.to_string();
        }
        record.id = store.save_punch_record(&record)?;

        store.audit(
            "edit",
            &format!("employee {employee_id} {}", record.date_str()),
            &format!(
                "by {editor_id}: {before} => {} ({:.2}h) reason: {reason}",
                describe(&punches),
                record.hours
            ),
        )?;

        Ok(record)
    }

    /// Punches, next expected punch, lunch window and live hours for one day.
    pub fn day_status<S: AttendanceStore>(
        store: &S,
        policy: &LunchPolicy,
        employee_id: i64,
        date: NaiveDate,
        now: NaiveTime,
    ) -> AppResult<DayStatus> {
        let employee = store
            .employee(employee_id)?
            .ok_or(AppError::EmployeeNotFound(employee_id))?;

        let holidays = store.holidays(date, date)?;
        let record = store.punch_record(employee_id, date)?;

        // the stored tag wins: it was fixed when the day was opened
        let day_type = record
            .as_ref()
            .map(|r| r.day_type)
            .unwrap_or_else(|| classify(date, &holidays));

        let punches = record.map(|r| r.punches);
        let stage = PunchStage::of(punches.as_ref());

        let earliest_lunch_return = match punches {
            Some(Punches::AtLunch { lunch_out, .. }) => {
                Some(policy.earliest_return(lunch_out, day_type))
            }
            _ => None,
        };

        Ok(DayStatus {
            date,
            day_type,
            holiday: holidays.description(date).map(str::to_string),
            punches,
            stage,
            next: stage.next_kind(),
            hours: punches.as_ref().map_or(0.0, |p| punches_hours(p, now)),
            expected: match day_type {
                DayType::Special => employee.special_hours(),
                DayType::Normal => employee.normal_hours(),
            },
            min_lunch_minutes: policy.minimum(day_type),
            earliest_lunch_return,
        })
    }
}

fn describe(p: &Punches) -> String {
    p.fields()
        .iter()
        .map(|t| fmt_opt_time(*t))
        .collect::<Vec<_>>()
        .join(" / ")
}
