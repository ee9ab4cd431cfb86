use crate::cli::commands::open_store;
use crate::cli::parser::{Commands, HolidayAction};
use crate::config::Config;
use crate::core::holiday::HolidayLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::date::require_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Holiday { action } = cmd else {
        return Ok(());
    };

    let mut store = open_store(cfg)?;

    match action {
        HolidayAction::Add { date, description } => {
            let d = require_date(date)?;
            HolidayLogic::add(&mut store, d, description)?;
            success(format!("Holiday {d} ({description}) saved."));
        }
        HolidayAction::Del { date } => {
            let d = require_date(date)?;
            HolidayLogic::delete(&mut store, d)?;
            success(format!("Holiday {d} removed."));
        }
        HolidayAction::List { year } => {
            let holidays = HolidayLogic::list(&store, *year)?;
            if holidays.is_empty() {
                info("No holidays registered.");
            }
            for h in holidays {
                println!("{}  {}  {}", h.date, h.date.format("%a"), h.description);
            }
        }
    }

    Ok(())
}
