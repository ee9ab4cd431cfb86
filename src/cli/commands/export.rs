use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::employee::EmployeeLogic;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::date::{date_or_today, month_bounds, parse_month, today};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        employee,
        month,
        today: ref_day,
        format,
        file,
        force,
    } = cmd
    {
        let store = open_store(cfg)?;
        let employee = EmployeeLogic::resolve(&store, employee)?;

        let (start, end) = match month {
            Some(m) => parse_month(m)?,
            None => month_bounds(today()),
        };
        let reference = date_or_today(ref_day.as_ref())?;

        ExportLogic::export_month(
            &store,
            employee.id,
            start,
            end,
            reference,
            &cfg.company_name,
            *format,
            file,
            *force,
        )?;
    }
    Ok(())
}
