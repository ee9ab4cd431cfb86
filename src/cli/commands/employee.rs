use crate::cli::commands::open_store;
use crate::cli::parser::{Commands, EmployeeAction};
use crate::config::Config;
use crate::core::employee::{EmployeeChanges, EmployeeLogic};
use crate::core::store::AttendanceStore;
use crate::errors::AppResult;
use crate::models::employee::Employee;
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::{GREY, RESET};
use crate::utils::formatting::pad_right;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Employee { action } = cmd else {
        return Ok(());
    };

    let mut store = open_store(cfg)?;

    match action {
        EmployeeAction::Add {
            name,
            email,
            role,
            ceiling,
            normal_hours,
            special_hours,
            days_off,
            manager,
        } => {
            let mut e = cfg.new_employee(name, email);
            e.role = role.clone();
            e.is_manager = *manager;
            if let Some(v) = ceiling {
                e.weekly_ceiling = *v;
            }
            if let Some(v) = normal_hours {
                e.normal_day_hours = *v;
            }
            if let Some(v) = special_hours {
                e.special_day_hours = *v;
            }
            if let Some(v) = days_off {
                e.weekly_days_off = *v;
            }

            let e = EmployeeLogic::add(&mut store, e)?;
            success(format!("Employee #{} {} <{}> added.", e.id, e.name, e.email));
        }

        EmployeeAction::List { all } => {
            let employees = store.employees(!*all)?;
            if employees.is_empty() {
                info("No employees registered.");
                return Ok(());
            }
            print_employees(&employees);
        }

        EmployeeAction::Edit {
            employee,
            name,
            email,
            role,
            ceiling,
            normal_hours,
            special_hours,
            days_off,
            manager,
            active,
        } => {
            let target = EmployeeLogic::resolve(&store, employee)?;
            let changes = EmployeeChanges {
                name: name.clone(),
                email: email.clone(),
                role: role.clone(),
                weekly_ceiling: *ceiling,
                normal_day_hours: *normal_hours,
                special_day_hours: *special_hours,
                weekly_days_off: *days_off,
                is_manager: *manager,
                active: *active,
            };

            if changes.is_empty() {
                warning("Nothing to change.");
                return Ok(());
            }

            let e = EmployeeLogic::edit(&mut store, target.id, changes)?;
            success(format!("Employee #{} {} updated.", e.id, e.name));
        }
    }

    Ok(())
}

fn print_employees(employees: &[Employee]) {
    let name_w = employees.iter().map(|e| e.name.chars().count()).max().unwrap_or(4).max(4);
    let email_w = employees.iter().map(|e| e.email.len()).max().unwrap_or(5).max(5);

    println!(
        "{:>4}  {}  {}  {:>7}  {:>6}  {:>7}  {:>4}  {}",
        "ID",
        pad_right("NAME", name_w),
        pad_right("EMAIL", email_w),
        "CEILING",
        "NORMAL",
        "SPECIAL",
        "OFF",
        "FLAGS"
    );

    for e in employees {
        let mut flags = Vec::new();
        if e.is_manager {
            flags.push("manager");
        }
        if !e.active {
            flags.push("inactive");
        }

        let line = format!(
            "{:>4}  {}  {}  {:>7.2}  {:>6.2}  {:>7.2}  {:>4}  {}",
            e.id,
            pad_right(&e.name, name_w),
            pad_right(&e.email, email_w),
            e.ceiling(),
            e.normal_hours(),
            e.special_hours(),
            e.days_off(),
            flags.join(",")
        );

        if e.active {
            println!("{line}");
        } else {
            println!("{GREY}{line}{RESET}");
        }
    }
}
