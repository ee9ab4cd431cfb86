use crate::cli::commands::justify::print_justification;
use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{Dashboard, ReportLogic};
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RED, RESET, color_for_balance};
use crate::utils::date::date_or_today;
use crate::utils::formatting::pad_right;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard { date } = cmd {
        let store = open_store(cfg)?;
        let date = date_or_today(date.as_ref())?;

        let dashboard = ReportLogic::dashboard(&store, date)?;
        print_dashboard(&dashboard, &cfg.company_name);
    }
    Ok(())
}

fn print_dashboard(d: &Dashboard, company: &str) {
    if company.is_empty() {
        header(format!("Dashboard · {}", d.date));
    } else {
        header(format!("{company} · dashboard · {}", d.date));
    }

    if d.rows.is_empty() {
        info("No active employees.");
        return;
    }

    let name_w = d
        .rows
        .iter()
        .map(|r| r.employee.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    println!(
        "  {}  {:>8} {:>8} {:>9} {:>9} {:>9} {:>9}  {}",
        pad_right("NAME", name_w),
        "WEEK",
        "WEEK OT",
        "MONTH",
        "MONTH OT",
        "JUSTIFIED",
        "BANK",
        "TODAY"
    );

    for row in &d.rows {
        let today = row
            .today
            .as_ref()
            .map(|r| r.punches.stage().label())
            .unwrap_or("-");
        let bank = row.month.banked_balance;
        println!(
            "  {}  {:>8.2} {:>8.2} {:>9.2} {:>9.2} {:>9.2} {}{:>+9.2}{}  {}",
            pad_right(&row.employee.name, name_w),
            row.week.total,
            row.week.overtime,
            row.month.worked_hours,
            row.month.overtime_hours,
            row.month.justified_hours,
            color_for_balance(bank),
            bank,
            RESET,
            today
        );
    }

    println!();
    if d.pending.is_empty() {
        println!("  No pending justifications.");
    } else {
        println!("  Pending justifications ({}):", d.pending.len());
        for j in &d.pending {
            print!("  ");
            print_justification(j);
        }
    }

    println!();
    if d.absentees.is_empty() {
        println!("  No absentees.");
    } else {
        println!("  {RED}Absent on {}:{RESET}", d.date);
        for e in &d.absentees {
            println!("    #{} {} <{}>", e.id, e.name, e.email);
        }
    }
}
