use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::employee::EmployeeLogic;
use crate::core::punch::PunchLogic;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, RESET, color_for_day_type, colorize_optional};
use crate::utils::date::date_or_today;
use crate::utils::formatting::hours2readable;
use crate::utils::time::{fmt_opt_time, fmt_time, time_or_now};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { employee, date, at } = cmd {
        let store = open_store(cfg)?;
        let employee = EmployeeLogic::resolve(&store, employee)?;

        let date = date_or_today(date.as_ref())?;
        let now = time_or_now(at.as_ref())?;

        let s = PunchLogic::day_status(&store, &cfg.lunch_policy(), employee.id, date, now)?;

        let dt_color = color_for_day_type(s.day_type.is_special());
        print!(
            "{CYAN}{}{RESET}  {}  {dt_color}{}{RESET}",
            employee.name,
            s.date.format("%Y-%m-%d %a"),
            s.day_type.to_db_str()
        );
        if let Some(h) = &s.holiday {
            print!(" ({h})");
        }
        println!();

        let fields = s.punches.map(|p| p.fields()).unwrap_or([None; 4]);
        for (label, t) in ["Entry", "Lunch out", "Lunch return", "Exit"]
            .iter()
            .zip(fields)
        {
            println!("  {:<13} {}", label, colorize_optional(&fmt_opt_time(t)));
        }

        println!("  Stage:        {}", s.stage.label());
        if let Some(next) = s.next {
            println!("  Next punch:   {}", next.label());
        }
        if let Some(earliest) = s.earliest_lunch_return {
            println!(
                "  Lunch return allowed from {} (minimum {} min)",
                fmt_time(earliest),
                s.min_lunch_minutes
            );
        }
        println!(
            "  Worked:       {} ({:.2}h) of {:.2}h expected",
            hours2readable(s.hours, false),
            s.hours,
            s.expected
        );
    }
    Ok(())
}
