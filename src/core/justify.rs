use crate::core::store::AttendanceStore;
use crate::errors::{AppError, AppResult};
use crate::models::justification::{Justification, JustificationKind, JustificationStatus};
use crate::utils::date::ensure_range;
use chrono::{Local, NaiveDate};

/// Lifecycle of absence justifications: pending → approved | rejected.
pub struct JustifyLogic;

impl JustifyLogic {
    /// Create a justification. It starts pending, unless `created_by`
    /// is a manager, in which case it is approved on the spot.
    #[allow(clippy::too_many_arguments)]
    pub fn create<S: AttendanceStore>(
        store: &mut S,
        employee_id: i64,
        start: NaiveDate,
        end: NaiveDate,
        kind: JustificationKind,
        description: &str,
        attachment: Option<&str>,
        created_by: Option<i64>,
    ) -> AppResult<Justification> {
        ensure_range(start, end)?;
        store
            .employee(employee_id)?
            .ok_or(AppError::EmployeeNotFound(employee_id))?;

        let mut j = Justification::new(employee_id, start, end, kind);
        j.description = description.to_string();
        j.attachment = attachment.map(str::to_string);

        if let Some(by) = created_by {
            let creator = store.employee(by)?.ok_or(AppError::EmployeeNotFound(by))?;
            if creator.is_manager {
                j.status = JustificationStatus::Approved;
                j.approved_by = Some(by);
                j.resolved_at = Some(Local::now().to_rfc3339());
            }
        }

        j.id = store.insert_justification(&j)?;

        store.audit(
            "justify",
            &format!("employee {employee_id}"),
            &format!(
                "#{} {} {}..{} ({} days) {}",
                j.id,
                kind.to_db_str(),
                start,
                end,
                j.days(),
                j.status.to_db_str()
            ),
        )?;

        Ok(j)
    }

    /// Approve (`approve = true`) or reject a pending justification.
    pub fn resolve<S: AttendanceStore>(
        store: &mut S,
        id: i64,
        approve: bool,
        by: i64,
    ) -> AppResult<Justification> {
        let mut j = store
            .justification(id)?
            .ok_or(AppError::JustificationNotFound(id))?;

        j.resolve(approve, by, Local::now().to_rfc3339())?;
        store.update_justification(&j)?;

        store.audit(
            if approve { "approve" } else { "reject" },
            &format!("justification {id}"),
            &format!("employee {} {}..{} by {by}", j.employee_id, j.start, j.end),
        )?;

        Ok(j)
    }
}
