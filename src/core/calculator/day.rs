use crate::models::day_type::DayType;
use crate::models::employee::Employee;
use crate::models::holiday::HolidayCalendar;
use chrono::{Datelike, NaiveDate, Weekday};

/// Sunday or holiday → Special, anything else → Normal.
pub fn classify(date: NaiveDate, holidays: &HolidayCalendar) -> DayType {
    if date.weekday() == Weekday::Sun || holidays.contains(date) {
        DayType::Special
    } else {
        DayType::Normal
    }
}

/// Hours the employee is expected to work (or be credited) on `date`.
pub fn expected_hours(date: NaiveDate, employee: &Employee, holidays: &HolidayCalendar) -> f64 {
    match classify(date, holidays) {
        DayType::Special => employee.special_hours(),
        DayType::Normal => employee.normal_hours(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn sunday_and_holidays_are_special() {
        let holidays: HolidayCalendar = [(d("2026-04-21"), "Tiradentes")].into_iter().collect();

        assert_eq!(classify(d("2026-03-01"), &holidays), DayType::Special); // Sunday
        assert_eq!(classify(d("2026-04-21"), &holidays), DayType::Special); // Tuesday holiday
        assert_eq!(classify(d("2026-03-07"), &holidays), DayType::Normal); // Saturday
        assert_eq!(classify(d("2026-03-02"), &holidays), DayType::Normal);
    }

    #[test]
    fn expected_hours_follow_the_classification() {
        let holidays = HolidayCalendar::new();
        let mut e = Employee::new(1, "Ana", "ana@example.com");
        e.normal_day_hours = 7.0;
        e.special_day_hours = 4.0;

        assert_eq!(expected_hours(d("2026-03-02"), &e, &holidays), 7.0);
        assert_eq!(expected_hours(d("2026-03-01"), &e, &holidays), 4.0);

        e.special_day_hours = 0.0;
        assert_eq!(expected_hours(d("2026-03-01"), &e, &holidays), 6.0);
    }
}
