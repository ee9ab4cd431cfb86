use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::employee::EmployeeLogic;
use crate::core::punch::PunchLogic;
use crate::core::store::AttendanceStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::date::{require_date, today};
use crate::utils::time::{fmt_opt_time, now, parse_time};
use chrono::NaiveTime;

/// `None`: keep the stored value. `Some(None)`: clear it.
fn parse_override(input: Option<&String>) -> AppResult<Option<Option<NaiveTime>>> {
    match input.map(|s| s.trim()) {
        None => Ok(None),
        Some(s) if s.eq_ignore_ascii_case("none") || s == "-" => Ok(Some(None)),
        Some(s) => parse_time(s)
            .map(|t| Some(Some(t)))
            .ok_or_else(|| AppError::InvalidTime(s.to_string())),
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Correct {
        employee,
        date,
        entry,
        lunch_out,
        lunch_in,
        exit,
        by,
        reason,
        note,
    } = cmd
    {
        let mut store = open_store(cfg)?;
        let employee = EmployeeLogic::resolve(&store, employee)?;
        let manager = EmployeeLogic::require_manager(&store, by)?;
        let date = require_date(date)?;

        let mut fields = match store.punch_record(employee.id, date) {
            Ok(record) => record.map(|r| r.punches.fields()).unwrap_or([None; 4]),
            Err(e) if e.is_unreadable_row() => {
                warning(format!("Stored punches unreadable ({e}), replacing them."));
                [None; 4]
            }
            Err(e) => return Err(e),
        };

        let overrides = [
            parse_override(entry.as_ref())?,
            parse_override(lunch_out.as_ref())?,
            parse_override(lunch_in.as_ref())?,
            parse_override(exit.as_ref())?,
        ];
        for (slot, o) in fields.iter_mut().zip(overrides) {
            if let Some(v) = o {
                *slot = v;
            }
        }

        // a past day still open is measured up to its last punch
        let until = if date == today() {
            now()
        } else {
            fields.iter().flatten().max().copied().unwrap_or(NaiveTime::MIN)
        };

        let record = PunchLogic::correct(
            &mut store,
            employee.id,
            date,
            fields,
            manager.id,
            reason,
            note.as_deref(),
            until,
        )?;

        let shown: Vec<String> = record.punches.fields().iter().map(|t| fmt_opt_time(*t)).collect();
        success(format!(
            "Record of {} on {} corrected by {}: {} ({:.2}h).",
            employee.name,
            record.date_str(),
            manager.name,
            shown.join(" / "),
            record.hours
        ));
    }
    Ok(())
}
