use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::employee::EmployeeLogic;
use crate::core::punch::{PunchLogic, PunchOutcome};
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::date::date_or_today;
use crate::utils::formatting::hours2readable;
use crate::utils::time::{fmt_time, time_or_now};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch {
        employee,
        kind,
        date,
        at,
    } = cmd
    {
        let mut store = open_store(cfg)?;
        let employee = EmployeeLogic::resolve(&store, employee)?;

        let date = date_or_today(date.as_ref())?;
        let at = time_or_now(at.as_ref())?;

        let outcome = PunchLogic::register(
            &mut store,
            &cfg.lunch_policy(),
            employee.id,
            date,
            at,
            *kind,
        )?;

        match outcome {
            PunchOutcome::Recorded { kind, at, record } => {
                success(format!(
                    "{} registered at {} for {} on {}.",
                    kind.label(),
                    fmt_time(at),
                    employee.name,
                    record.date_str()
                ));
                println!(
                    "   Worked so far: {} ({:.2}h)",
                    hours2readable(record.hours, false),
                    record.hours
                );
                if let Some(next) = record.punches.stage().next_kind() {
                    println!("   Next punch: {}", next.label());
                }
            }
            PunchOutcome::Refused(advisory) => {
                warning(advisory);
            }
        }
    }
    Ok(())
}
