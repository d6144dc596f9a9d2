//! # bc-time
//!
//! Civil dates, weekend conventions, holiday tables, and the working-day
//! arithmetic built on them: day counters, deadline projection, countdowns,
//! and urgency classification.
//!
//! ```
//! use bc_time::{BusinessCalendar, Calendar, Date, Severity};
//!
//! let cal = BusinessCalendar::israel();
//! let start = Date::from_ymd(2026, 2, 22).unwrap(); // Sunday
//! let end = Date::from_ymd(2026, 2, 26).unwrap(); // Thursday
//!
//! let counter = cal.compute_range(start, end, Some(3));
//! assert_eq!(counter.working_days, 5);
//! assert_eq!(counter.to_string(), "5 י״ע");
//! assert_eq!(cal.severity(&counter), Severity::Overdue);
//!
//! let due = cal.project_target_date(start, 1).unwrap();
//! assert_eq!(due, Date::from_ymd(2026, 2, 23).unwrap());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar trait and the table-driven business calendar.
pub mod calendar;

/// Concrete calendars (country specific).
pub mod calendars;

/// Deployment-time calendar configuration.
pub mod config;

/// `Date` type and text parsing.
pub mod date;

/// Day counters, countdowns, and severity classification.
pub mod day_counter;

/// Holiday definitions and tables.
pub mod holiday;

/// `Weekday` — day of the week.
pub mod weekday;

/// `WeekendSet` — which weekdays are weekend days.
pub mod weekend;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{BusinessCalendar, Calendar};
pub use config::CalendarConfig;
pub use date::{parse_date, Date, DateInput};
pub use day_counter::{
    classify_severity, classify_severity_with, format_counter, Countdown, DayCounterResult,
    Severity, Urgency, DEFAULT_WARNING_THRESHOLD,
};
pub use holiday::{HolidayDefinition, HolidayInfo, HolidayTable};
pub use weekday::Weekday;
pub use weekend::WeekendSet;
