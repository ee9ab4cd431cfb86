use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct Holiday {
    pub id: i64,
    pub date: NaiveDate,
    pub description: String,
}

/// Holiday lookup keyed by date.
#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    days: BTreeMap<NaiveDate, String>,
}

impl HolidayCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, date: NaiveDate, description: impl Into<String>) {
        self.days.insert(date, description.into());
    }

    pub fn description(&self, date: NaiveDate) -> Option<&str> {
        self.days.get(&date).map(String::as_str)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days.contains_key(&date)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(NaiveDate, S)> for HolidayCalendar {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, S)>>(iter: I) -> Self {
        let mut cal = HolidayCalendar::new();
        for (date, desc) in iter {
            cal.insert(date, desc);
        }
        cal
    }
}

impl FromIterator<Holiday> for HolidayCalendar {
    fn from_iter<I: IntoIterator<Item = Holiday>>(iter: I) -> Self {
        iter.into_iter().map(|h| (h.date, h.description)).collect()
    }
}
