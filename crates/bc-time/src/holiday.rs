//! Holiday definitions and the immutable table a calendar is built from.
//!
//! Religious and lunar holidays do not recur on a fixed Gregorian month/day,
//! so a table is a list of absolute dates, one entry per holiday per year.
//! A date outside the years the table covers is never a holiday; callers
//! that care can ask [`HolidayTable::covers`].

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use bc_core::errors::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::date::Date;

/// A named non-working civil date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayDefinition {
    /// The holiday itself.
    pub date: Date,
    /// English name.
    pub name: Cow<'static, str>,
    /// Display name in the locale's language.
    pub name_local: Cow<'static, str>,
    /// Whether the preceding civil day is also non-working.
    #[serde(default)]
    pub has_eve: bool,
}

impl HolidayDefinition {
    /// Const constructor for compiled-in tables.
    pub const fn fixed(date: Date, name: &'static str, name_local: &'static str, has_eve: bool) -> Self {
        Self {
            date,
            name: Cow::Borrowed(name),
            name_local: Cow::Borrowed(name_local),
            has_eve,
        }
    }

    /// Month of the holiday (1–12).
    pub fn month(&self) -> u8 {
        self.date.month()
    }

    /// Day of the month of the holiday (1–31).
    pub fn day(&self) -> u8 {
        self.date.day_of_month()
    }
}

/// A holiday matched against a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayInfo<'a> {
    /// The table entry.
    pub definition: &'a HolidayDefinition,
    /// `true` when the queried date was the eve rather than the holiday.
    pub is_eve: bool,
}

/// An immutable set of holidays keyed by date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayTable {
    entries: BTreeMap<Date, HolidayDefinition>,
}

impl HolidayTable {
    /// Build a table, rejecting two entries on the same date.
    pub fn new(definitions: impl IntoIterator<Item = HolidayDefinition>) -> Result<Self> {
        let mut entries: BTreeMap<Date, HolidayDefinition> = BTreeMap::new();
        for def in definitions {
            if let Some(prev) = entries.get(&def.date) {
                return Err(Error::Config(format!(
                    "holidays {:?} and {:?} share the date {}",
                    prev.name, def.name, def.date
                )));
            }
            entries.insert(def.date, def);
        }
        Ok(Self { entries })
    }

    /// Build a table from a compiled-in list.
    pub fn from_static(definitions: &'static [HolidayDefinition]) -> Self {
        Self {
            entries: definitions.iter().map(|h| (h.date, h.clone())).collect(),
        }
    }

    /// A table with no holidays.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of holidays in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if the table has no holidays.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry for `date` itself.
    pub fn get(&self, date: Date) -> Option<&HolidayDefinition> {
        self.entries.get(&date)
    }

    /// The holiday whose eve falls on `date`, if that holiday observes one.
    pub fn eve_of(&self, date: Date) -> Option<&HolidayDefinition> {
        let next = date.succ().ok()?;
        self.entries.get(&next).filter(|h| h.has_eve)
    }

    /// Holidays in `[from, to]`, in date order.
    pub fn between(&self, from: Date, to: Date) -> impl Iterator<Item = &HolidayDefinition> {
        let range = if from <= to {
            Some(self.entries.range(from..=to))
        } else {
            None
        };
        range.into_iter().flatten().map(|(_, h)| h)
    }

    /// All holidays, in date order.
    pub fn iter(&self) -> impl Iterator<Item = &HolidayDefinition> {
        self.entries.values()
    }

    /// First and last year with at least one entry.
    pub fn covered_years(&self) -> Option<RangeInclusive<u16>> {
        let first = self.entries.keys().next()?;
        let last = self.entries.keys().next_back()?;
        Some(first.year()..=last.year())
    }

    /// `true` if the table has at least one entry in `date`'s year.
    pub fn covers(&self, date: Date) -> bool {
        let year = date.year();
        match (Date::from_ymd(year, 1, 1), Date::from_ymd(year, 12, 31)) {
            (Ok(first), Ok(last)) => self.entries.range(first..=last).next().is_some(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn sample() -> HolidayTable {
        HolidayTable::new([
            HolidayDefinition::fixed(date(2030, 3, 10), "A", "א", true),
            HolidayDefinition::fixed(date(2030, 3, 11), "B", "ב", false),
            HolidayDefinition::fixed(date(2031, 1, 1), "C", "ג", true),
        ])
        .unwrap()
    }

    #[test]
    fn lookup_and_eve() {
        let t = sample();
        assert_eq!(t.len(), 3);
        assert_eq!(t.get(date(2030, 3, 10)).unwrap().name, "A");
        assert!(t.get(date(2030, 3, 9)).is_none());
        assert_eq!(t.eve_of(date(2030, 3, 9)).unwrap().name, "A");
        // B has no eve, so its preceding day (A) is not an eve of anything.
        assert!(t.eve_of(date(2030, 3, 10)).is_none());
        // The eve of a January 1 holiday falls in the previous year.
        assert_eq!(t.eve_of(date(2030, 12, 31)).unwrap().name, "C");
    }

    #[test]
    fn duplicate_dates_rejected() {
        let err = HolidayTable::new([
            HolidayDefinition::fixed(date(2030, 3, 10), "A", "א", false),
            HolidayDefinition::fixed(date(2030, 3, 10), "B", "ב", false),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn coverage() {
        let t = sample();
        assert_eq!(t.covered_years(), Some(2030..=2031));
        assert!(t.covers(date(2031, 12, 31)));
        assert!(!t.covers(date(2029, 12, 31)));
        assert!(!HolidayTable::empty().covers(date(2030, 1, 1)));

        let gapped = HolidayTable::new([
            HolidayDefinition::fixed(date(2030, 3, 10), "A", "א", false),
            HolidayDefinition::fixed(date(2032, 3, 10), "B", "ב", false),
        ])
        .unwrap();
        assert_eq!(gapped.covered_years(), Some(2030..=2032));
        assert!(gapped.covers(date(2030, 1, 1)));
        assert!(!gapped.covers(date(2031, 6, 1)));
        assert!(gapped.covers(date(2032, 12, 31)));
    }

    #[test]
    fn between_is_inclusive_and_ordered() {
        let t = sample();
        let names: Vec<_> = t
            .between(date(2030, 3, 11), date(2031, 1, 1))
            .map(|h| &*h.name)
            .collect();
        assert_eq!(names, ["B", "C"]);
        assert_eq!(t.between(date(2031, 1, 1), date(2030, 1, 1)).count(), 0);
    }

    #[test]
    fn month_and_day_accessors() {
        let h = HolidayDefinition::fixed(date(2026, 9, 12), "Rosh Hashanah 1", "ראש השנה א", true);
        assert_eq!((h.month(), h.day()), (9, 12));
    }

    #[test]
    fn deserializes_without_eve_flag() {
        let h: HolidayDefinition = serde_json::from_str(
            r#"{"date":"2026-04-22","name":"Independence Day","name_local":"יום העצמאות"}"#,
        )
        .unwrap();
        assert_eq!(h.date, date(2026, 4, 22));
        assert!(!h.has_eve);
    }
}
