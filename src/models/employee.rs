use serde::Serialize;

pub const DEFAULT_WEEKLY_CEILING: f64 = 40.0;
pub const DEFAULT_NORMAL_DAY_HOURS: f64 = 8.0;
pub const DEFAULT_SPECIAL_DAY_HOURS: f64 = 6.0;
pub const DEFAULT_WEEKLY_DAYS_OFF: u32 = 2;

#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub weekly_ceiling: f64,    // ⇔ employees.weekly_ceiling
    pub normal_day_hours: f64,  // ⇔ employees.normal_day_hours
    pub special_day_hours: f64, // ⇔ employees.special_day_hours
    pub weekly_days_off: u32,   // ⇔ employees.weekly_days_off
    pub is_manager: bool,
    pub active: bool,
}

impl Employee {
    /// New active, non-manager employee with the default targets.
    pub fn new(id: i64, name: &str, email: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role: String::new(),
            weekly_ceiling: DEFAULT_WEEKLY_CEILING,
            normal_day_hours: DEFAULT_NORMAL_DAY_HOURS,
            special_day_hours: DEFAULT_SPECIAL_DAY_HOURS,
            weekly_days_off: DEFAULT_WEEKLY_DAYS_OFF,
            is_manager: false,
            active: true,
        }
    }

    // The effective getters treat an unset (zero) target as "use the default".

    pub fn ceiling(&self) -> f64 {
        positive_or(self.weekly_ceiling, DEFAULT_WEEKLY_CEILING)
    }

    pub fn normal_hours(&self) -> f64 {
        positive_or(self.normal_day_hours, DEFAULT_NORMAL_DAY_HOURS)
    }

    pub fn special_hours(&self) -> f64 {
        positive_or(self.special_day_hours, DEFAULT_SPECIAL_DAY_HOURS)
    }

    pub fn days_off(&self) -> u32 {
        if self.weekly_days_off == 0 {
            DEFAULT_WEEKLY_DAYS_OFF
        } else {
            self.weekly_days_off
        }
    }
}

fn positive_or(value: f64, fallback: f64) -> f64 {
    if value > 0.0 { value } else { fallback }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_targets_fall_back_to_defaults() {
        let mut e = Employee::new(1, "Ana", "ana@example.com");
        e.normal_day_hours = 0.0;
        e.special_day_hours = 0.0;
        e.weekly_ceiling = 0.0;
        e.weekly_days_off = 0;

        assert_eq!(e.normal_hours(), 8.0);
        assert_eq!(e.special_hours(), 6.0);
        assert_eq!(e.ceiling(), 40.0);
        assert_eq!(e.days_off(), 2);
    }

    #[test]
    fn configured_targets_win() {
        let mut e = Employee::new(1, "Ana", "ana@example.com");
        e.normal_day_hours = 7.5;
        e.weekly_ceiling = 44.0;
        assert_eq!(e.normal_hours(), 7.5);
        assert_eq!(e.ceiling(), 44.0);
    }
}
