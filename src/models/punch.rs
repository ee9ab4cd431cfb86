use super::day_type::DayType;
use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveTime};
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PunchKind {
    Entry,
    LunchOut,
    LunchIn,
    Exit,
}

impl PunchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PunchKind::Entry => "entry",
            PunchKind::LunchOut => "lunch-out",
            PunchKind::LunchIn => "lunch-in",
            PunchKind::Exit => "exit",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PunchKind::Entry => "Entry",
            PunchKind::LunchOut => "Lunch out",
            PunchKind::LunchIn => "Lunch return",
            PunchKind::Exit => "Exit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LunchBreak {
    pub out: NaiveTime,
    pub back: NaiveTime,
}

/// Punches recorded for one day.
///
/// Each variant carries exactly the punches its stage allows, so an exit
/// without an entry or a lunch return without a lunch-out cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum Punches {
    Entered {
        entry: NaiveTime,
    },
    AtLunch {
        entry: NaiveTime,
        lunch_out: NaiveTime,
    },
    BackFromLunch {
        entry: NaiveTime,
        lunch: LunchBreak,
    },
    Complete {
        entry: NaiveTime,
        lunch: Option<LunchBreak>,
        exit: NaiveTime,
    },
}

/// Where a day stands in the punch sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PunchStage {
    NoRecord,
    Entered,
    AtLunch,
    BackFromLunch,
    Complete,
}

impl PunchStage {
    pub fn of(punches: Option<&Punches>) -> Self {
        punches.map_or(PunchStage::NoRecord, Punches::stage)
    }

    /// The punch that naturally follows this stage.
    /// From `Entered` both lunch-out and exit are valid; lunch-out is the default.
    pub fn next_kind(&self) -> Option<PunchKind> {
        match self {
            PunchStage::NoRecord => Some(PunchKind::Entry),
            PunchStage::Entered => Some(PunchKind::LunchOut),
            PunchStage::AtLunch => Some(PunchKind::LunchIn),
            PunchStage::BackFromLunch => Some(PunchKind::Exit),
            PunchStage::Complete => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PunchStage::NoRecord => "no record",
            PunchStage::Entered => "working",
            PunchStage::AtLunch => "at lunch",
            PunchStage::BackFromLunch => "back from lunch",
            PunchStage::Complete => "complete",
        }
    }
}

impl Punches {
    pub fn start(entry: NaiveTime) -> Self {
        Punches::Entered { entry }
    }

    pub fn stage(&self) -> PunchStage {
        match self {
            Punches::Entered { .. } => PunchStage::Entered,
            Punches::AtLunch { .. } => PunchStage::AtLunch,
            Punches::BackFromLunch { .. } => PunchStage::BackFromLunch,
            Punches::Complete { .. } => PunchStage::Complete,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Punches::Complete { .. })
    }

    /// Apply the next punch. Returns `None` when `kind` is not a valid
    /// transition from the current stage.
    pub fn apply(self, kind: PunchKind, at: NaiveTime) -> Option<Punches> {
        match (self, kind) {
            (Punches::Entered { entry }, PunchKind::LunchOut) => Some(Punches::AtLunch {
                entry,
                lunch_out: at,
            }),
            (Punches::Entered { entry }, PunchKind::Exit) => Some(Punches::Complete {
                entry,
                lunch: None,
                exit: at,
            }),
            (Punches::AtLunch { entry, lunch_out }, PunchKind::LunchIn) => {
                Some(Punches::BackFromLunch {
                    entry,
                    lunch: LunchBreak {
                        out: lunch_out,
                        back: at,
                    },
                })
            }
            (Punches::BackFromLunch { entry, lunch }, PunchKind::Exit) => Some(Punches::Complete {
                entry,
                lunch: Some(lunch),
                exit: at,
            }),
            _ => None,
        }
    }

    pub fn entry(&self) -> NaiveTime {
        match *self {
            Punches::Entered { entry }
            | Punches::AtLunch { entry, .. }
            | Punches::BackFromLunch { entry, .. }
            | Punches::Complete { entry, .. } => entry,
        }
    }

    pub fn lunch_out(&self) -> Option<NaiveTime> {
        match *self {
            Punches::Entered { .. } => None,
            Punches::AtLunch { lunch_out, .. } => Some(lunch_out),
            Punches::BackFromLunch { lunch, .. } => Some(lunch.out),
            Punches::Complete { lunch, .. } => lunch.map(|l| l.out),
        }
    }

    pub fn lunch_in(&self) -> Option<NaiveTime> {
        match *self {
            Punches::BackFromLunch { lunch, .. } => Some(lunch.back),
            Punches::Complete { lunch, .. } => lunch.map(|l| l.back),
            _ => None,
        }
    }

    pub fn exit(&self) -> Option<NaiveTime> {
        match *self {
            Punches::Complete { exit, .. } => Some(exit),
            _ => None,
        }
    }

    /// Time of the most recent punch.
    pub fn last_time(&self) -> NaiveTime {
        self.exit()
            .or_else(|| self.lunch_in())
            .or_else(|| self.lunch_out())
            .unwrap_or_else(|| self.entry())
    }

    /// `[entry, lunch_out, lunch_in, exit]`, the persisted column order.
    pub fn fields(&self) -> [Option<NaiveTime>; 4] {
        [
            Some(self.entry()),
            self.lunch_out(),
            self.lunch_in(),
            self.exit(),
        ]
    }

    /// Rebuild the typed state from the four nullable columns.
    ///
    /// `Ok(None)` means no punch at all. Combinations that skip a punch
    /// (exit without entry, lunch return without lunch-out, a lunch-out
    /// left open on a completed day) are rejected.
    pub fn from_fields(
        entry: Option<NaiveTime>,
        lunch_out: Option<NaiveTime>,
        lunch_in: Option<NaiveTime>,
        exit: Option<NaiveTime>,
    ) -> AppResult<Option<Punches>> {
        let punches = match (entry, lunch_out, lunch_in, exit) {
            (None, None, None, None) => return Ok(None),
            (Some(entry), None, None, None) => Punches::Entered { entry },
            (Some(entry), Some(lunch_out), None, None) => Punches::AtLunch { entry, lunch_out },
            (Some(entry), Some(out), Some(back), None) => Punches::BackFromLunch {
                entry,
                lunch: LunchBreak { out, back },
            },
            (Some(entry), None, None, Some(exit)) => Punches::Complete {
                entry,
                lunch: None,
                exit,
            },
            (Some(entry), Some(out), Some(back), Some(exit)) => Punches::Complete {
                entry,
                lunch: Some(LunchBreak { out, back }),
                exit,
            },
            _ => {
                return Err(AppError::InvalidTransition(format!(
                    "inconsistent punch sequence: entry={} lunch_out={} lunch_in={} exit={}",
                    fmt_opt(entry),
                    fmt_opt(lunch_out),
                    fmt_opt(lunch_in),
                    fmt_opt(exit)
                )));
            }
        };
        Ok(Some(punches))
    }
}

fn fmt_opt(t: Option<NaiveTime>) -> String {
    t.map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    InProgress,
    Complete,
}

impl RecordStatus {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            RecordStatus::InProgress => "in_progress",
            RecordStatus::Complete => "complete",
        }
    }
}

/// One employee-day of punches, as persisted in `punch_records`.
#[derive(Debug, Clone, Serialize)]
pub struct PunchRecord {
    pub id: i64,
    pub employee_id: i64,
    pub date: NaiveDate,
    pub punches: Punches,
    pub day_type: DayType,
    pub hours: f64, // ⇔ punch_records.hours (stored worked hours)
    pub note: String,
    pub edited_by: Option<i64>,
    pub edited_at: Option<String>,
    pub edit_reason: String,
}

impl PunchRecord {
    pub fn new(employee_id: i64, date: NaiveDate, punches: Punches, day_type: DayType) -> Self {
        Self {
            id: 0,
            employee_id,
            date,
            punches,
            day_type,
            hours: 0.0,
            note: String::new(),
            edited_by: None,
            edited_at: None,
            edit_reason: String::new(),
        }
    }

    pub fn status(&self) -> RecordStatus {
        if self.punches.is_complete() {
            RecordStatus::Complete
        } else {
            RecordStatus::InProgress
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    #[test]
    fn full_day_walks_every_stage() {
        let p = Punches::start(t("08:00"));
        assert_eq!(p.stage(), PunchStage::Entered);

        let p = p.apply(PunchKind::LunchOut, t("12:00")).unwrap();
        assert_eq!(p.stage(), PunchStage::AtLunch);

        let p = p.apply(PunchKind::LunchIn, t("13:00")).unwrap();
        assert_eq!(p.stage(), PunchStage::BackFromLunch);

        let p = p.apply(PunchKind::Exit, t("17:00")).unwrap();
        assert!(p.is_complete());
        assert_eq!(
            p.fields(),
            [Some(t("08:00")), Some(t("12:00")), Some(t("13:00")), Some(t("17:00"))]
        );
        assert_eq!(p.last_time(), t("17:00"));
    }

    #[test]
    fn exit_straight_after_entry_is_allowed() {
        let p = Punches::start(t("08:00"))
            .apply(PunchKind::Exit, t("12:00"))
            .unwrap();
        assert_eq!(p.lunch_out(), None);
        assert_eq!(p.exit(), Some(t("12:00")));
    }

    #[test]
    fn out_of_order_punches_are_rejected() {
        let p = Punches::start(t("08:00"));
        assert!(p.apply(PunchKind::LunchIn, t("12:00")).is_none());
        assert!(p.apply(PunchKind::Entry, t("12:00")).is_none());

        let at_lunch = p.apply(PunchKind::LunchOut, t("12:00")).unwrap();
        assert!(at_lunch.apply(PunchKind::Exit, t("17:00")).is_none());

        let done = Punches::start(t("08:00"))
            .apply(PunchKind::Exit, t("17:00"))
            .unwrap();
        assert!(done.apply(PunchKind::Exit, t("18:00")).is_none());
    }

    #[test]
    fn from_fields_rejects_gaps() {
        assert!(Punches::from_fields(None, None, None, None).unwrap().is_none());
        assert!(Punches::from_fields(None, None, None, Some(t("17:00"))).is_err());
        assert!(Punches::from_fields(Some(t("08:00")), None, Some(t("13:00")), None).is_err());
        assert!(
            Punches::from_fields(Some(t("08:00")), Some(t("12:00")), None, Some(t("17:00")))
                .is_err()
        );

        let p = Punches::from_fields(Some(t("08:00")), None, None, Some(t("17:00")))
            .unwrap()
            .unwrap();
        assert!(p.is_complete());
    }

    #[test]
    fn next_kind_follows_natural_sequence() {
        assert_eq!(PunchStage::of(None).next_kind(), Some(PunchKind::Entry));
        assert_eq!(PunchStage::Entered.next_kind(), Some(PunchKind::LunchOut));
        assert_eq!(PunchStage::AtLunch.next_kind(), Some(PunchKind::LunchIn));
        assert_eq!(PunchStage::BackFromLunch.next_kind(), Some(PunchKind::Exit));
        assert_eq!(PunchStage::Complete.next_kind(), None);
    }
}
