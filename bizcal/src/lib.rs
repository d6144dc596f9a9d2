//! # bizcal
//!
//! Working-day calendar arithmetic: weekend conventions, holiday tables with
//! eve handling, SLA-style day counters, deadline projection, and urgency
//! classification.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than on `bc-core` / `bc-time` directly.
//!
//! ## Quick start
//!
//! ```rust
//! use bizcal::time::{BusinessCalendar, Calendar, Severity};
//!
//! let cal = BusinessCalendar::israel();
//! let counter = cal
//!     .day_counter("2026-02-22T09:00:00+02:00", Some("2026-02-26".into()), Some(3))
//!     .unwrap();
//!
//! assert_eq!(counter.working_days, 5);
//! assert_eq!(format!("{counter:#}"), "5 ימי עבודה (5 סה״כ)");
//! assert_eq!(cal.severity(&counter), Severity::Overdue);
//! assert!(cal.is_holiday("2026-09-11".parse().unwrap(), true));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions.
pub use bc_core as core;

/// Dates, calendars, holiday tables, and day counters.
pub use bc_time as time;

pub use bc_core::{Error, Result};
pub use bc_time::{
    BusinessCalendar, Calendar, CalendarConfig, Countdown, Date, DayCounterResult, Severity,
};
