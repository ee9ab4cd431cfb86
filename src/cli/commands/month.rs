use crate::cli::commands::justify::print_justification;
use crate::cli::commands::open_store;
use crate::cli::commands::week::print_records;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::employee::EmployeeLogic;
use crate::core::report::{MonthlyReport, ReportLogic};
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_balance};
use crate::utils::date::{date_or_today, month_bounds, parse_month, today};
use crate::utils::formatting::hours2readable;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Month {
        employee,
        month,
        today: ref_day,
    } = cmd
    {
        let store = open_store(cfg)?;
        let employee = EmployeeLogic::resolve(&store, employee)?;

        let (start, end) = match month {
            Some(m) => parse_month(m)?,
            None => month_bounds(today()),
        };
        let reference = date_or_today(ref_day.as_ref())?;

        let report = ReportLogic::month(&store, employee.id, start, end, reference)?;
        print_month(&report);
    }
    Ok(())
}

fn print_month(report: &MonthlyReport) {
    let b = &report.balance;

    header(format!(
        "{} · {} → {}",
        report.employee.name, b.month_start, b.month_end
    ));
    print_records(&report.records);

    println!();
    println!("  {:<25} {:>8} {:>9} {:>8} {:>8}", "WEEK", "WORKED", "JUSTIFIED", "TOTAL", "OVERTIME");
    for w in &b.weeks {
        println!(
            "  {:<25} {:>8.2} {:>9.2} {:>8.2} {:>8.2}",
            format!("{} → {}", w.start, w.end),
            w.worked,
            w.justified,
            w.summary.total,
            w.summary.overtime
        );
    }

    if !report.justifications.is_empty() {
        println!();
        println!("  Justifications:");
        for j in &report.justifications {
            print!("  ");
            print_justification(j);
        }
    }

    let bal_color = color_for_balance(b.banked_balance);
    println!();
    println!("  Worked:       {:>8.2}h  ({} days)", b.worked_hours, b.days_worked);
    println!(
        "  Justified:    {:>8.2}h  ({} days)",
        b.justified_hours, b.justified_days
    );
    println!("  Expected:     {:>8.2}h", b.expected_hours);
    println!("  Overtime:     {:>8.2}h", b.overtime_hours);
    println!(
        "  Hour bank:    {bal_color}{:>+8.2}h  ({}){RESET}",
        b.banked_balance,
        hours2readable(b.banked_balance, true)
    );
}
