//! Calendar configuration loaded at deployment time.
//!
//! Holiday tables need extending every few years. Rather than recompiling,
//! a deployment can describe its calendar in JSON and build a
//! [`BusinessCalendar`](crate::calendar::BusinessCalendar) from it:
//!
//! ```
//! use bc_time::{BusinessCalendar, Calendar, Date};
//!
//! let cal = BusinessCalendar::from_json(r#"{
//!     "name": "Israel 2028",
//!     "holidays": [
//!         { "date": "2028-04-11", "name": "Passover 1", "name_local": "פסח א", "has_eve": true }
//!     ]
//! }"#).unwrap();
//!
//! assert!(!cal.is_working_day(Date::from_ymd(2028, 4, 10).unwrap()));
//! ```

use bc_core::errors::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::day_counter::DEFAULT_WARNING_THRESHOLD;
use crate::holiday::HolidayDefinition;
use crate::weekend::WeekendSet;

/// Serializable description of a business calendar.
///
/// Only `holidays` is required; the rest defaults to the Israeli
/// conventions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarConfig {
    /// Display name.
    #[serde(default = "default_name")]
    pub name: String,
    /// Weekend days, e.g. `["Friday", "Saturday"]`.
    #[serde(default)]
    pub weekend: WeekendSet,
    /// Whether eves of `has_eve` holidays are non-working.
    #[serde(default = "default_include_eves")]
    pub include_eves: bool,
    /// Remaining working days at or below which a counter is due soon.
    #[serde(default = "default_warning_threshold")]
    pub warning_threshold: i32,
    /// The holiday table, one entry per holiday per year.
    pub holidays: Vec<HolidayDefinition>,
}

fn default_name() -> String {
    "Custom".to_string()
}

fn default_include_eves() -> bool {
    true
}

fn default_warning_threshold() -> i32 {
    DEFAULT_WARNING_THRESHOLD
}

impl CalendarConfig {
    /// Parse from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// The configuration equivalent of the built-in Israel calendar, a
    /// starting point for extending the table.
    pub fn israel() -> Self {
        use crate::calendars::israel;
        Self {
            name: israel::NAME.to_string(),
            weekend: WeekendSet::FRIDAY_SATURDAY,
            include_eves: true,
            warning_threshold: DEFAULT_WARNING_THRESHOLD,
            holidays: israel::HOLIDAYS.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;

    #[test]
    fn defaults_apply() {
        let cfg = CalendarConfig::from_json(r#"{ "holidays": [] }"#).unwrap();
        assert_eq!(cfg.name, "Custom");
        assert_eq!(cfg.weekend, WeekendSet::FRIDAY_SATURDAY);
        assert!(cfg.include_eves);
        assert_eq!(cfg.warning_threshold, 5);
    }

    #[test]
    fn explicit_fields() {
        let cfg = CalendarConfig::from_json(
            r#"{
                "name": "Dubai",
                "weekend": ["Saturday", "Sunday"],
                "include_eves": false,
                "warning_threshold": 2,
                "holidays": [
                    { "date": "2026-12-02", "name": "National Day", "name_local": "اليوم الوطني" }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.name, "Dubai");
        assert!(cfg.weekend.contains(Weekday::Sunday));
        assert!(!cfg.weekend.contains(Weekday::Friday));
        assert!(!cfg.include_eves);
        assert_eq!(cfg.holidays.len(), 1);
    }

    #[test]
    fn missing_holidays_rejected() {
        assert!(matches!(
            CalendarConfig::from_json(r#"{ "name": "x" }"#),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn unknown_field_rejected() {
        assert!(CalendarConfig::from_json(r#"{ "holidays": [], "timezone": "UTC" }"#).is_err());
    }

    #[test]
    fn full_week_weekend_is_config_error() {
        let err = CalendarConfig::from_json(
            r#"{
                "weekend": ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"],
                "holidays": []
            }"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)), "{err}");
    }

    #[test]
    fn bad_date_rejected() {
        let err = CalendarConfig::from_json(
            r#"{ "holidays": [ { "date": "2026-02-30", "name": "x", "name_local": "x" } ] }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("2026-02-30"));
    }

    #[test]
    fn israel_roundtrips_through_json() {
        let cfg = CalendarConfig::israel();
        let back = CalendarConfig::from_json(&cfg.to_json().unwrap()).unwrap();
        assert_eq!(back, cfg);
    }
}
