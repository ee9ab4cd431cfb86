use crate::cli::commands::open_store;
use crate::cli::parser::{Commands, JustifyAction};
use crate::config::Config;
use crate::core::employee::EmployeeLogic;
use crate::core::justify::JustifyLogic;
use crate::core::store::{AttendanceStore, JustificationFilter};
use crate::errors::AppResult;
use crate::models::justification::{Justification, JustificationStatus};
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::{GREEN, RED, RESET, YELLOW};
use crate::utils::date::require_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Justify { action } = cmd else {
        return Ok(());
    };

    let mut store = open_store(cfg)?;

    match action {
        JustifyAction::Add {
            employee,
            start,
            end,
            kind,
            description,
            attachment,
            by,
        } => {
            let employee = EmployeeLogic::resolve(&store, employee)?;
            let creator = match by {
                Some(key) => Some(EmployeeLogic::resolve(&store, key)?.id),
                None => None,
            };

            let j = JustifyLogic::create(
                &mut store,
                employee.id,
                require_date(start)?,
                require_date(end)?,
                *kind,
                description,
                attachment.as_deref(),
                creator,
            )?;

            match j.status {
                JustificationStatus::Approved => success(format!(
                    "Justification #{} for {} approved ({} days).",
                    j.id,
                    employee.name,
                    j.days()
                )),
                _ => info(format!(
                    "Justification #{} for {} filed, waiting for approval.",
                    j.id, employee.name
                )),
            }
        }

        JustifyAction::Approve { id, by } => {
            let manager = EmployeeLogic::require_manager(&store, by)?;
            let j = JustifyLogic::resolve(&mut store, *id, true, manager.id)?;
            success(format!("Justification #{} approved by {}.", j.id, manager.name));
        }

        JustifyAction::Reject { id, by } => {
            let manager = EmployeeLogic::require_manager(&store, by)?;
            let j = JustifyLogic::resolve(&mut store, *id, false, manager.id)?;
            warning(format!("Justification #{} rejected by {}.", j.id, manager.name));
        }

        JustifyAction::List { status, employee } => {
            let employee_id = match employee {
                Some(key) => Some(EmployeeLogic::resolve(&store, key)?.id),
                None => None,
            };
            let list = store.justifications(&JustificationFilter {
                employee_id,
                status: *status,
                overlapping: None,
            })?;

            if list.is_empty() {
                info("No justifications found.");
                return Ok(());
            }
            for j in &list {
                print_justification(j);
            }
        }
    }

    Ok(())
}

pub(crate) fn print_justification(j: &Justification) {
    let color = match j.status {
        JustificationStatus::Pending => YELLOW,
        JustificationStatus::Approved => GREEN,
        JustificationStatus::Rejected => RED,
    };
    println!(
        "#{:<4} emp {:<4} {} → {} ({:>2}d)  {:<8} {}{:<8}{}  {}",
        j.id,
        j.employee_id,
        j.start,
        j.end,
        j.days(),
        j.kind.to_db_str(),
        color,
        j.status.to_db_str(),
        RESET,
        j.description
    );
}
