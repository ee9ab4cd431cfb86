use serde::Serialize;

/// Day classification used for expected hours and the lunch policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayType {
    Normal,
    /// Sunday or holiday.
    Special,
}

impl DayType {
    pub fn is_special(&self) -> bool {
        matches!(self, DayType::Special)
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            DayType::Normal => "normal",
            DayType::Special => "special",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "normal" => Some(DayType::Normal),
            "special" => Some(DayType::Special),
            _ => None,
        }
    }
}
