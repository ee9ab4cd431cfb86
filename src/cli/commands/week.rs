use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::employee::EmployeeLogic;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use crate::models::punch::PunchRecord;
use crate::ui::messages::header;
use crate::utils::colors::{RESET, YELLOW, color_for_day_type, colorize_optional};
use crate::utils::date::date_or_today;
use crate::utils::formatting::hours2readable;
use crate::utils::time::fmt_opt_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Week { employee, date } = cmd {
        let store = open_store(cfg)?;
        let employee = EmployeeLogic::resolve(&store, employee)?;
        let date = date_or_today(date.as_ref())?;

        let report = ReportLogic::week(&store, employee.id, date)?;
        let w = &report.week;

        header(format!("{} · week {} → {}", report.employee.name, w.start, w.end));
        print_records(&report.records);

        println!();
        println!("  Worked:     {:>7.2}h  ({})", w.worked, hours2readable(w.worked, false));
        println!("  Justified:  {:>7.2}h", w.justified);
        println!("  Total:      {:>7.2}h", w.summary.total);
        println!(
            "  Normal:     {:>7.2}h  of {:.2}h ceiling",
            w.summary.normal_portion,
            report.employee.ceiling()
        );
        let ot_color = if w.summary.overtime > 0.0 { YELLOW } else { RESET };
        println!("  Overtime:   {ot_color}{:>7.2}h{RESET}", w.summary.overtime);
        println!("  Days worked: {}", w.summary.days_worked);
    }
    Ok(())
}

/// One line per punch record; shared with the monthly report.
pub(crate) fn print_records(records: &[PunchRecord]) {
    if records.is_empty() {
        println!("  (no punch records)");
        return;
    }

    println!(
        "  {:<14} {:<8} {:>5}  {:>5}  {:>5}  {:>5}  {:>6}  {}",
        "DATE", "DAY", "IN", "L.OUT", "L.IN", "OUT", "HOURS", "STATUS"
    );

    for r in records {
        let [entry, lunch_out, lunch_in, exit] = r.punches.fields();
        let dt_color = color_for_day_type(r.day_type.is_special());
        println!(
            "  {:<14} {dt_color}{:<8}{RESET} {:>5}  {:>5}  {:>5}  {:>5}  {:>6.2}  {}{}",
            r.date.format("%Y-%m-%d %a"),
            r.day_type.to_db_str(),
            colorize_optional(&fmt_opt_time(entry)),
            colorize_optional(&fmt_opt_time(lunch_out)),
            colorize_optional(&fmt_opt_time(lunch_in)),
            colorize_optional(&fmt_opt_time(exit)),
            r.hours,
            r.status().to_db_str(),
            if r.edited_by.is_some() { " (edited)" } else { "" }
        );
    }
}
