//! Israel calendar.
//!
//! Weekend days are Friday and Saturday; the work week runs Sunday to
//! Thursday. Holidays follow the Hebrew calendar, so their Gregorian dates
//! move every year and are tabulated explicitly below. Most major holidays
//! also treat their eve (ערב חג) as a non-working day.
//!
//! The table covers 2024–2027. Dates outside it are never holidays; deployments
//! that run past 2027 must supply an extended table through
//! [`CalendarConfig`](crate::config::CalendarConfig).

use crate::calendar::BusinessCalendar;
use crate::date::Date;
use crate::holiday::{HolidayDefinition, HolidayTable};
use crate::weekend::WeekendSet;

/// Display name of the built-in calendar.
pub const NAME: &str = "Israel";

/// Statutory holidays, 2024–2027. The flag marks holidays whose eve is
/// also a day off.
pub static HOLIDAYS: [HolidayDefinition; 44] = [
    // 2024
    HolidayDefinition::fixed(Date::ymd(2024, 4, 23), "Passover 1", "פסח א", true),
    HolidayDefinition::fixed(Date::ymd(2024, 4, 24), "Passover 2", "פסח ב", false),
    HolidayDefinition::fixed(Date::ymd(2024, 4, 29), "Passover 7", "פסח ז", false),
    HolidayDefinition::fixed(Date::ymd(2024, 4, 30), "Passover 8", "פסח ח", false),
    HolidayDefinition::fixed(Date::ymd(2024, 5, 14), "Independence Day", "יום העצמאות", true),
    HolidayDefinition::fixed(Date::ymd(2024, 6, 12), "Shavuot", "שבועות", true),
    HolidayDefinition::fixed(Date::ymd(2024, 10, 3), "Rosh Hashanah 1", "ראש השנה א", true),
    HolidayDefinition::fixed(Date::ymd(2024, 10, 4), "Rosh Hashanah 2", "ראש השנה ב", false),
    HolidayDefinition::fixed(Date::ymd(2024, 10, 12), "Yom Kippur", "יום כיפור", true),
    HolidayDefinition::fixed(Date::ymd(2024, 10, 17), "Sukkot 1", "סוכות א", true),
    HolidayDefinition::fixed(Date::ymd(2024, 10, 24), "Simchat Torah", "שמחת תורה", true),
    // 2025
    HolidayDefinition::fixed(Date::ymd(2025, 4, 13), "Passover 1", "פסח א", true),
    HolidayDefinition::fixed(Date::ymd(2025, 4, 14), "Passover 2", "פסח ב", false),
    HolidayDefinition::fixed(Date::ymd(2025, 4, 19), "Passover 7", "פסח ז", false),
    HolidayDefinition::fixed(Date::ymd(2025, 4, 20), "Passover 8", "פסח ח", false),
    HolidayDefinition::fixed(Date::ymd(2025, 5, 2), "Independence Day", "יום העצמאות", true),
    HolidayDefinition::fixed(Date::ymd(2025, 6, 2), "Shavuot", "שבועות", true),
    HolidayDefinition::fixed(Date::ymd(2025, 9, 23), "Rosh Hashanah 1", "ראש השנה א", true),
    HolidayDefinition::fixed(Date::ymd(2025, 9, 24), "Rosh Hashanah 2", "ראש השנה ב", false),
    HolidayDefinition::fixed(Date::ymd(2025, 10, 2), "Yom Kippur", "יום כיפור", true),
    HolidayDefinition::fixed(Date::ymd(2025, 10, 7), "Sukkot 1", "סוכות א", true),
    HolidayDefinition::fixed(Date::ymd(2025, 10, 14), "Simchat Torah", "שמחת תורה", true),
    // 2026
    HolidayDefinition::fixed(Date::ymd(2026, 4, 2), "Passover 1", "פסח א", true),
    HolidayDefinition::fixed(Date::ymd(2026, 4, 3), "Passover 2", "פסח ב", false),
    HolidayDefinition::fixed(Date::ymd(2026, 4, 8), "Passover 7", "פסח ז", false),
    HolidayDefinition::fixed(Date::ymd(2026, 4, 9), "Passover 8", "פסח ח", false),
    HolidayDefinition::fixed(Date::ymd(2026, 4, 22), "Independence Day", "יום העצמאות", true),
    HolidayDefinition::fixed(Date::ymd(2026, 5, 22), "Shavuot", "שבועות", true),
    HolidayDefinition::fixed(Date::ymd(2026, 9, 12), "Rosh Hashanah 1", "ראש השנה א", true),
    HolidayDefinition::fixed(Date::ymd(2026, 9, 13), "Rosh Hashanah 2", "ראש השנה ב", false),
    HolidayDefinition::fixed(Date::ymd(2026, 9, 21), "Yom Kippur", "יום כיפור", true),
    HolidayDefinition::fixed(Date::ymd(2026, 9, 26), "Sukkot 1", "סוכות א", true),
    HolidayDefinition::fixed(Date::ymd(2026, 10, 3), "Simchat Torah", "שמחת תורה", true),
    // 2027
    HolidayDefinition::fixed(Date::ymd(2027, 4, 22), "Passover 1", "פסח א", true),
    HolidayDefinition::fixed(Date::ymd(2027, 4, 23), "Passover 2", "פסח ב", false),
    HolidayDefinition::fixed(Date::ymd(2027, 4, 28), "Passover 7", "פסח ז", false),
    HolidayDefinition::fixed(Date::ymd(2027, 4, 29), "Passover 8", "פסח ח", false),
    HolidayDefinition::fixed(Date::ymd(2027, 5, 12), "Independence Day", "יום העצמאות", true),
    HolidayDefinition::fixed(Date::ymd(2027, 6, 11), "Shavuot", "שבועות", true),
    HolidayDefinition::fixed(Date::ymd(2027, 10, 2), "Rosh Hashanah 1", "ראש השנה א", true),
    HolidayDefinition::fixed(Date::ymd(2027, 10, 3), "Rosh Hashanah 2", "ראש השנה ב", false),
    HolidayDefinition::fixed(Date::ymd(2027, 10, 11), "Yom Kippur", "יום כיפור", true),
    HolidayDefinition::fixed(Date::ymd(2027, 10, 16), "Sukkot 1", "סוכות א", true),
    HolidayDefinition::fixed(Date::ymd(2027, 10, 23), "Simchat Torah", "שמחת תורה", true),
];

/// The built-in holiday table.
pub fn holidays() -> HolidayTable {
    HolidayTable::from_static(&HOLIDAYS)
}

/// The Israeli business calendar: Friday/Saturday weekend, built-in holidays,
/// eves counted as non-working.
pub fn calendar() -> BusinessCalendar {
    BusinessCalendar::new(NAME, WeekendSet::FRIDAY_SATURDAY, holidays())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Calendar;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn friday_is_weekend() {
        let cal = calendar();
        // 2023-06-16 is a Friday
        assert!(!cal.is_working_day(date(2023, 6, 16)));
    }

    #[test]
    fn saturday_is_weekend() {
        let cal = calendar();
        // 2023-06-17 is a Saturday
        assert!(!cal.is_working_day(date(2023, 6, 17)));
    }

    #[test]
    fn sunday_is_working_day() {
        let cal = calendar();
        // 2023-06-18 is a Sunday
        assert!(cal.is_working_day(date(2023, 6, 18)));
    }

    #[test]
    fn table_covers_2024_to_2027() {
        let t = holidays();
        assert_eq!(t.len(), HOLIDAYS.len());
        assert_eq!(t.covered_years(), Some(2024..=2027));
    }

    #[test]
    fn every_year_has_the_same_holidays() {
        for year in 2024..=2027 {
            let names: Vec<_> = HOLIDAYS
                .iter()
                .filter(|h| h.date.year() == year)
                .map(|h| &*h.name)
                .collect();
            assert_eq!(names.len(), 11, "{year}");
            assert!(names.contains(&"Rosh Hashanah 1"), "{year}");
            assert!(names.contains(&"Yom Kippur"), "{year}");
        }
    }

    #[test]
    fn yom_kippur_eve() {
        let cal = calendar();
        // Yom Kippur 2025 fell on a Thursday; Wednesday was its eve.
        assert!(cal.is_holiday(date(2025, 10, 2), false));
        assert!(cal.is_holiday(date(2025, 10, 1), true));
        assert!(!cal.is_holiday(date(2025, 10, 1), false));
        assert!(!cal.is_working_day(date(2025, 10, 1)));
    }

    #[test]
    fn second_day_of_passover_has_no_eve_of_its_own() {
        let cal = calendar();
        // Passover 1 is both a holiday and the day before Passover 2.
        let info = cal.holiday_info(date(2026, 4, 2)).unwrap();
        assert_eq!(info.definition.name, "Passover 1");
        assert!(cal.eve_of(date(2026, 4, 2)).is_none());
    }
}
