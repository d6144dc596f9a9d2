//! `WeekendSet` — which weekdays a locale rests on.

use bc_core::ensure;
use bc_core::errors::Result;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::weekday::Weekday;

/// A set of weekend weekdays, stored as a 7-bit mask.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekendSet(u8);

impl WeekendSet {
    /// The Israeli work week rests on Friday and Saturday.
    pub const FRIDAY_SATURDAY: WeekendSet = WeekendSet(
        1 << (Weekday::Friday as u8 - 1) | 1 << (Weekday::Saturday as u8 - 1),
    );

    /// The Western convention: Saturday and Sunday.
    pub const SATURDAY_SUNDAY: WeekendSet = WeekendSet(
        1 << (Weekday::Saturday as u8 - 1) | 1 << (Weekday::Sunday as u8 - 1),
    );

    /// No weekend at all.
    pub const NONE: WeekendSet = WeekendSet(0);

    /// Build a set from a list of days.
    ///
    /// At least one day must remain a working day, otherwise forward
    /// projection could never terminate.
    pub fn new(days: impl IntoIterator<Item = Weekday>) -> Result<Self> {
        let mask = days.into_iter().fold(0u8, |m, d| m | d.mask());
        ensure!(mask != 0x7f, "a weekend cannot cover all seven days");
        Ok(WeekendSet(mask))
    }

    /// Return `true` if `day` is a weekend day.
    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & day.mask() != 0
    }

    /// The weekend days, Monday first.
    pub fn days(&self) -> impl Iterator<Item = Weekday> + '_ {
        Weekday::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

impl Default for WeekendSet {
    fn default() -> Self {
        Self::FRIDAY_SATURDAY
    }
}

impl std::fmt::Debug for WeekendSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.days()).finish()
    }
}

impl Serialize for WeekendSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.days())
    }
}

impl<'de> Deserialize<'de> for WeekendSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let days = Vec::<Weekday>::deserialize(deserializer)?;
        WeekendSet::new(days).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bc_core::errors::Error;

    #[test]
    fn israeli_weekend() {
        let w = WeekendSet::default();
        assert!(w.contains(Weekday::Friday));
        assert!(w.contains(Weekday::Saturday));
        assert!(!w.contains(Weekday::Sunday));
        assert!(!w.contains(Weekday::Thursday));
        assert_eq!(
            w.days().collect::<Vec<_>>(),
            vec![Weekday::Friday, Weekday::Saturday]
        );
    }

    #[test]
    fn new_matches_constants() {
        let w = WeekendSet::new([Weekday::Sunday, Weekday::Saturday]).unwrap();
        assert_eq!(w, WeekendSet::SATURDAY_SUNDAY);
        assert_eq!(WeekendSet::new([]).unwrap(), WeekendSet::NONE);
    }

    #[test]
    fn full_week_rejected() {
        let err = WeekendSet::new(Weekday::ALL).unwrap_err();
        assert!(matches!(err, Error::Precondition(_)), "{err}");
    }

    #[test]
    fn full_week_rejected_when_deserializing() {
        let all = r#"["Monday","Tuesday","Wednesday","Thursday","Friday","Saturday","Sunday"]"#;
        let err = serde_json::from_str::<WeekendSet>(all).unwrap_err();
        assert!(err.to_string().contains("seven days"), "{err}");
    }

    #[test]
    fn serde_as_day_names() {
        let json = serde_json::to_string(&WeekendSet::FRIDAY_SATURDAY).unwrap();
        assert_eq!(json, r#"["Friday","Saturday"]"#);
        let back: WeekendSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, WeekendSet::FRIDAY_SATURDAY);
    }
}
