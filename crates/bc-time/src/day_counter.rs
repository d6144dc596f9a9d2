//! Day counters: working/weekend/holiday tallies over a date range, progress
//! against a working-day target, and the urgency classification used to
//! colour deadline badges.
//!
//! The structures here are plain results; the counting itself lives on
//! [`Calendar`](crate::calendar::Calendar).

use serde::{Deserialize, Serialize};

use crate::date::Date;

/// Remaining working days at or below which a counter is "due soon".
pub const DEFAULT_WARNING_THRESHOLD: i32 = 5;

/// Outcome of counting the civil days in a range.
///
/// `working_days + weekend_days + holiday_days == total_days` always holds;
/// a holiday that falls on a weekend is counted once, as a holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCounterResult {
    /// First day of the range.
    pub from: Date,
    /// Last day of the range (inclusive).
    pub to: Date,
    /// Civil days in the range; 0 when `to < from`.
    pub total_days: u32,
    /// Days that are neither weekend nor holiday.
    pub working_days: u32,
    /// Weekend days that are not holidays.
    pub weekend_days: u32,
    /// Holidays and counted holiday eves.
    pub holiday_days: u32,
    /// The working-day budget, when one was supplied.
    pub target_working_days: Option<u32>,
    /// Working days elapsed, when a target was supplied.
    pub current_working_day: Option<u32>,
    /// `target - elapsed`; negative once the budget is exceeded.
    pub days_remaining: Option<i32>,
    /// `days_remaining < 0`.
    pub is_overdue: bool,
    /// Civil days after `to` until the remaining budget is used up.
    ///
    /// `None` without a target, once overdue, or if the walk would leave the
    /// representable date range.
    pub calendar_days_remaining: Option<u32>,
}

impl DayCounterResult {
    /// A result with every count at zero.
    pub(crate) fn empty(from: Date, to: Date) -> Self {
        Self {
            from,
            to,
            total_days: 0,
            working_days: 0,
            weekend_days: 0,
            holiday_days: 0,
            target_working_days: None,
            current_working_day: None,
            days_remaining: None,
            is_overdue: false,
            calendar_days_remaining: None,
        }
    }
}

/// Progress from `today` towards a fixed deadline date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Countdown {
    /// The reference day.
    pub today: Date,
    /// The deadline.
    pub deadline: Date,
    /// `deadline - today` in civil days; negative once past.
    pub calendar_days_remaining: i32,
    /// Working days in `(today, deadline]`; 0 once past.
    pub working_days_remaining: u32,
    /// `true` once `today` is after `deadline`.
    pub is_overdue: bool,
}

/// Anything that can be classified by [`classify_severity`].
pub trait Urgency {
    /// `true` if the deadline has passed.
    fn is_overdue(&self) -> bool;

    /// Working days left, if the measure has a target at all.
    fn days_remaining(&self) -> Option<i32>;
}

impl Urgency for DayCounterResult {
    fn is_overdue(&self) -> bool {
        self.is_overdue
    }

    fn days_remaining(&self) -> Option<i32> {
        self.days_remaining
    }
}

impl Urgency for Countdown {
    fn is_overdue(&self) -> bool {
        self.is_overdue
    }

    fn days_remaining(&self) -> Option<i32> {
        Some(i32::try_from(self.working_days_remaining).unwrap_or(i32::MAX))
    }
}

/// Three-tier urgency label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    /// Past the deadline.
    Overdue,
    /// Within the warning threshold.
    DueSoon,
    /// Neither.
    Default,
}

impl Severity {
    /// Stable string form: `"overdue"`, `"due-soon"`, or `"default"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Overdue => "overdue",
            Severity::DueSoon => "due-soon",
            Severity::Default => "default",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify with the default threshold of
/// [`DEFAULT_WARNING_THRESHOLD`] working days.
pub fn classify_severity<U: Urgency + ?Sized>(measure: &U) -> Severity {
    classify_severity_with(measure, DEFAULT_WARNING_THRESHOLD)
}

/// Overdue beats due-soon; due-soon needs a known remainder at or below
/// `threshold`.
pub fn classify_severity_with<U: Urgency + ?Sized>(measure: &U, threshold: i32) -> Severity {
    if measure.is_overdue() {
        return Severity::Overdue;
    }
    match measure.days_remaining() {
        Some(left) if left <= threshold => Severity::DueSoon,
        _ => Severity::Default,
    }
}

/// Working-days abbreviation (ימי עבודה).
const WORKING_DAYS_SHORT: &str = "י״ע";
const WORKING_DAYS_LONG: &str = "ימי עבודה";
const TOTAL: &str = "סה״כ";

/// Render a counter for display.
///
/// The short form is `"<working> י״ע"`; the verbose form extends it with the
/// total civil-day span: `"<working> ימי עבודה (<total> סה״כ)"`.
pub fn format_counter(result: &DayCounterResult, verbose: bool) -> String {
    if verbose {
        format!(
            "{} {WORKING_DAYS_LONG} ({} {TOTAL})",
            result.working_days, result.total_days
        )
    } else {
        format!("{} {WORKING_DAYS_SHORT}", result.working_days)
    }
}

/// `{}` renders the short form, `{:#}` the verbose one.
impl std::fmt::Display for DayCounterResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_counter(self, f.alternate()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(working: u32, total: u32, remaining: Option<i32>) -> DayCounterResult {
        let d = Date::from_ymd(2026, 2, 22).unwrap();
        DayCounterResult {
            total_days: total,
            working_days: working,
            weekend_days: total - working,
            days_remaining: remaining,
            is_overdue: remaining.is_some_and(|r| r < 0),
            ..DayCounterResult::empty(d, d)
        }
    }

    #[test]
    fn short_and_verbose_forms() {
        let r = result(5, 7, None);
        assert_eq!(format_counter(&r, false), "5 י״ע");
        assert_eq!(format_counter(&r, true), "5 ימי עבודה (7 סה״כ)");
        assert_eq!(r.to_string(), "5 י״ע");
        assert_eq!(format!("{r:#}"), "5 ימי עבודה (7 סה״כ)");
    }

    #[test]
    fn severity_tiers() {
        assert_eq!(classify_severity(&result(5, 5, Some(-2))), Severity::Overdue);
        assert_eq!(classify_severity(&result(5, 5, Some(0))), Severity::DueSoon);
        assert_eq!(classify_severity(&result(5, 5, Some(5))), Severity::DueSoon);
        assert_eq!(classify_severity(&result(5, 5, Some(6))), Severity::Default);
        assert_eq!(classify_severity(&result(5, 5, None)), Severity::Default);
    }

    #[test]
    fn custom_threshold() {
        let r = result(5, 5, Some(8));
        assert_eq!(classify_severity_with(&r, 10), Severity::DueSoon);
        assert_eq!(classify_severity_with(&r, 3), Severity::Default);
    }

    #[test]
    fn countdown_urgency() {
        let d = Date::from_ymd(2026, 2, 22).unwrap();
        let c = Countdown {
            today: d,
            deadline: d,
            calendar_days_remaining: 0,
            working_days_remaining: 0,
            is_overdue: false,
        };
        assert_eq!(classify_severity(&c), Severity::DueSoon);
    }

    #[test]
    fn severity_strings() {
        assert_eq!(Severity::DueSoon.to_string(), "due-soon");
        assert_eq!(
            serde_json::to_string(&Severity::DueSoon).unwrap(),
            r#""due-soon""#
        );
    }
}
