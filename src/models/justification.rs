use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum JustificationStatus {
    Pending,
    Approved,
    Rejected,
}

impl JustificationStatus {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            JustificationStatus::Pending => "pending",
            JustificationStatus::Approved => "approved",
            JustificationStatus::Rejected => "rejected",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(JustificationStatus::Pending),
            "approved" => Some(JustificationStatus::Approved),
            "rejected" => Some(JustificationStatus::Rejected),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum JustificationKind {
    /// Medical certificate
    Medical,
    Absence,
    Leave,
    Other,
}

impl JustificationKind {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            JustificationKind::Medical => "medical",
            JustificationKind::Absence => "absence",
            JustificationKind::Leave => "leave",
            JustificationKind::Other => "other",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "medical" => Some(JustificationKind::Medical),
            "absence" => Some(JustificationKind::Absence),
            "leave" => Some(JustificationKind::Leave),
            "other" => Some(JustificationKind::Other),
            _ => None,
        }
    }
}

/// Absence record covering the inclusive range `[start, end]`.
#[derive(Debug, Clone, Serialize)]
pub struct Justification {
    pub id: i64,
    pub employee_id: i64,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub kind: JustificationKind,
    pub description: String,
    pub attachment: Option<String>,
    pub status: JustificationStatus,
    pub approved_by: Option<i64>,
    pub resolved_at: Option<String>,
    pub created_at: String,
}

impl Justification {
    pub fn new(employee_id: i64, start: NaiveDate, end: NaiveDate, kind: JustificationKind) -> Self {
        Self {
            id: 0,
            employee_id,
            start,
            end,
            kind,
            description: String::new(),
            attachment: None,
            status: JustificationStatus::Pending,
            approved_by: None,
            resolved_at: None,
            created_at: chrono::Local::now().to_rfc3339(),
        }
    }

    pub fn is_approved(&self) -> bool {
        self.status == JustificationStatus::Approved
    }

    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn overlaps(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.start <= to && self.end >= from
    }

    /// Number of calendar days in the range.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Move a pending justification to approved or rejected.
    /// Resolved justifications never change status again.
    pub fn resolve(&mut self, approve: bool, by: i64, at: String) -> AppResult<()> {
        if self.status != JustificationStatus::Pending {
            return Err(AppError::InvalidTransition(format!(
                "justification {} is already {}",
                self.id,
                self.status.to_db_str()
            )));
        }

        self.status = if approve {
            JustificationStatus::Approved
        } else {
            JustificationStatus::Rejected
        };
        self.approved_by = Some(by);
        self.resolved_at = Some(at);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn resolve_only_from_pending() {
        let mut j = Justification::new(1, d("2026-03-02"), d("2026-03-04"), JustificationKind::Medical);
        j.resolve(true, 9, "2026-03-05T10:00:00-03:00".into()).unwrap();
        assert!(j.is_approved());
        assert_eq!(j.approved_by, Some(9));

        let err = j.resolve(false, 9, "2026-03-06T10:00:00-03:00".into());
        assert!(matches!(err, Err(AppError::InvalidTransition(_))));
        assert!(j.is_approved());
    }

    #[test]
    fn range_helpers_are_inclusive() {
        let j = Justification::new(1, d("2026-03-02"), d("2026-03-04"), JustificationKind::Leave);
        assert_eq!(j.days(), 3);
        assert!(j.covers(d("2026-03-04")));
        assert!(!j.covers(d("2026-03-05")));
        assert!(j.overlaps(d("2026-03-04"), d("2026-03-10")));
        assert!(!j.overlaps(d("2026-03-05"), d("2026-03-10")));
    }
}
