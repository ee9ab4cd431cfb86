use crate::core::store::AttendanceStore;
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;

/// Optional field updates for `EmployeeLogic::edit`.
#[derive(Debug, Clone, Default)]
pub struct EmployeeChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub weekly_ceiling: Option<f64>,
    pub normal_day_hours: Option<f64>,
    pub special_day_hours: Option<f64>,
    pub weekly_days_off: Option<u32>,
    pub is_manager: Option<bool>,
    pub active: Option<bool>,
}

impl EmployeeChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.role.is_none()
            && self.weekly_ceiling.is_none()
            && self.normal_day_hours.is_none()
            && self.special_day_hours.is_none()
            && self.weekly_days_off.is_none()
            && self.is_manager.is_none()
            && self.active.is_none()
    }

    fn apply_to(self, e: &mut Employee) {
        if let Some(v) = self.name {
            e.name = v;
        }
        if let Some(v) = self.email {
            e.email = v;
        }
        if let Some(v) = self.role {
            e.role = v;
        }
        if let Some(v) = self.weekly_ceiling {
            e.weekly_ceiling = v;
        }
        if let Some(v) = self.normal_day_hours {
            e.normal_day_hours = v;
        }
        if let Some(v) = self.special_day_hours {
            e.special_day_hours = v;
        }
        if let Some(v) = self.weekly_days_off {
            e.weekly_days_off = v;
        }
        if let Some(v) = self.is_manager {
            e.is_manager = v;
        }
        if let Some(v) = self.active {
            e.active = v;
        }
    }
}

pub struct EmployeeLogic;

impl EmployeeLogic {
    /// Find an employee by numeric id or by email.
    pub fn resolve<S: AttendanceStore>(store: &S, key: &str) -> AppResult<Employee> {
        let key = key.trim();
        if let Ok(id) = key.parse::<i64>() {
            return store.employee(id)?.ok_or(AppError::EmployeeNotFound(id));
        }
        store
            .employee_by_email(key)?
            .ok_or_else(|| AppError::EmployeeEmailNotFound(key.to_string()))
    }

    pub fn add<S: AttendanceStore>(store: &mut S, mut employee: Employee) -> AppResult<Employee> {
        validate(&employee)?;
        if store.employee_by_email(&employee.email)?.is_some() {
            return Err(AppError::DuplicateEmail(employee.email.clone()));
        }

        employee.id = store.insert_employee(&employee)?;
        store.audit(
            "employee_add",
            &format!("employee {}", employee.id),
            &format!(
                "{} <{}>{}",
                employee.name,
                employee.email,
                if employee.is_manager { " manager" } else { "" }
            ),
        )?;
        Ok(employee)
    }

    pub fn edit<S: AttendanceStore>(
        store: &mut S,
        id: i64,
        changes: EmployeeChanges,
    ) -> AppResult<Employee> {
        let mut employee = store.employee(id)?.ok_or(AppError::EmployeeNotFound(id))?;
        changes.apply_to(&mut employee);
        validate(&employee)?;

        if let Some(other) = store.employee_by_email(&employee.email)?
            && other.id != id
        {
            return Err(AppError::DuplicateEmail(employee.email.clone()));
        }

        store.update_employee(&employee)?;
        store.audit(
            "employee_edit",
            &format!("employee {id}"),
            &format!(
                "{} <{}> ceiling={} normal={} special={} days_off={} manager={} active={}",
                employee.name,
                employee.email,
                employee.weekly_ceiling,
                employee.normal_day_hours,
                employee.special_day_hours,
                employee.weekly_days_off,
                employee.is_manager,
                employee.active
            ),
        )?;
        Ok(employee)
    }

    /// The employee identified by `key`, required to be a manager.
    pub fn require_manager<S: AttendanceStore>(store: &S, key: &str) -> AppResult<Employee> {
        let e = Self::resolve(store, key)?;
        if !e.is_manager {
            return Err(AppError::NotAManager(e.name));
        }
        Ok(e)
    }
}

fn validate(e: &Employee) -> AppResult<()> {
    if e.name.trim().is_empty() {
        return Err(AppError::InvalidEmployee("name cannot be empty".into()));
    }
    if !e.email.contains('@') {
        return Err(AppError::InvalidEmployee(format!("bad email '{}'", e.email)));
    }
    if e.weekly_ceiling < 0.0 || e.normal_day_hours < 0.0 || e.special_day_hours < 0.0 {
        return Err(AppError::InvalidEmployee("hour targets cannot be negative".into()));
    }
    if e.weekly_days_off > 7 {
        return Err(AppError::InvalidEmployee("a week has at most 7 days off".into()));
    }
    Ok(())
}
