//! `Calendar` trait and the table-driven [`BusinessCalendar`].
//!
//! A calendar knows which dates are weekends and holidays. Everything else
//! (working-day counting, deadline projection, countdowns) is provided on
//! top of those predicates by the trait's default methods.

use bc_core::errors::{Error, Result};
use tracing::{debug, warn};

use crate::config::CalendarConfig;
use crate::date::{parse_date, Date, DateInput};
use crate::day_counter::{
    classify_severity_with, Countdown, DayCounterResult, Severity, Urgency,
    DEFAULT_WARNING_THRESHOLD,
};
use crate::holiday::{HolidayDefinition, HolidayInfo, HolidayTable};
use crate::weekend::WeekendSet;

/// A working-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Israel"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` falls on a weekend day.
    fn is_weekend(&self, date: Date) -> bool;

    /// The holiday falling on `date` itself. Never reports an eve, so
    /// `is_eve` is always `false`.
    fn holiday_info(&self, date: Date) -> Option<HolidayInfo<'_>>;

    /// The holiday whose eve is `date`, if that holiday observes one.
    fn eve_of(&self, date: Date) -> Option<&HolidayDefinition>;

    /// Whether holiday eves are non-working days. Defaults to `true`.
    fn counts_eves(&self) -> bool {
        true
    }

    /// Whether the holiday data is authoritative for `date`. Dates outside
    /// it are still answered, just never as holidays.
    fn covers(&self, _date: Date) -> bool {
        true
    }

    /// Years touched by `[start, end]` that the holiday data does not cover.
    fn uncovered_years(&self, start: Date, end: Date) -> Vec<u16> {
        (start.year()..=end.year())
            .filter(|&year| {
                Date::from_ymd(year, 1, 1).is_ok_and(|first| !self.covers(first))
            })
            .collect()
    }

    /// Return `true` if `date` is a holiday, or, with `include_eve`, the eve
    /// of one that observes it.
    fn is_holiday(&self, date: Date, include_eve: bool) -> bool {
        self.holiday_info(date).is_some() || (include_eve && self.eve_of(date).is_some())
    }

    /// Neither weekend nor holiday (eves included per [`counts_eves`]).
    ///
    /// [`counts_eves`]: Calendar::counts_eves
    fn is_working_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date, self.counts_eves())
    }

    /// Tally every civil day in `[start, end]`.
    ///
    /// Each day lands in exactly one bucket: holiday first, then weekend,
    /// then working. An `end` before `start` yields an empty range.
    ///
    /// With `target_working_days`, the result also reports elapsed working
    /// days against the budget.
    fn compute_range(
        &self,
        start: Date,
        end: Date,
        target_working_days: Option<u32>,
    ) -> DayCounterResult {
        let uncovered = self.uncovered_years(start, end);
        if !uncovered.is_empty() {
            warn!(
                calendar = self.name(),
                %start,
                %end,
                ?uncovered,
                "range extends outside the holiday table; uncovered days count as non-holidays"
            );
        }

        let mut result = DayCounterResult::empty(start, end);
        for day in start.iter_to(end) {
            if self.is_holiday(day, self.counts_eves()) {
                result.holiday_days += 1;
            } else if self.is_weekend(day) {
                result.weekend_days += 1;
            } else {
                result.working_days += 1;
            }
            result.total_days += 1;
        }

        if let Some(target) = target_working_days {
            let remaining = i64::from(target) - i64::from(result.working_days);
            let remaining = i32::try_from(remaining)
                .unwrap_or(if remaining < 0 { i32::MIN } else { i32::MAX });
            result.target_working_days = Some(target);
            result.current_working_day = Some(result.working_days);
            result.days_remaining = Some(remaining);
            result.is_overdue = remaining < 0;
            result.calendar_days_remaining = u32::try_from(remaining)
                .ok()
                .and_then(|budget| walk_working_days(self, end, budget).ok())
                .map(|(_, steps)| steps);
        }

        debug!(
            calendar = self.name(),
            %start,
            %end,
            working = result.working_days,
            weekend = result.weekend_days,
            holiday = result.holiday_days,
            total = result.total_days,
            days_remaining = ?result.days_remaining,
            "computed day counter"
        );
        result
    }

    /// The date `working_days` working days after `start`.
    ///
    /// `start` itself never counts, and `0` returns `start` unchanged. For a
    /// positive budget the result is always a working day.
    fn project_target_date(&self, start: Date, working_days: u32) -> Result<Date> {
        let (target, _) = walk_working_days(self, start, working_days)?;
        debug!(calendar = self.name(), %start, working_days, %target, "projected target date");
        Ok(target)
    }

    /// Holidays in `[from, to]`, in date order. Eves are not listed.
    fn holidays_between(&self, from: Date, to: Date) -> Vec<HolidayInfo<'_>> {
        from.iter_to(to)
            .filter_map(|d| self.holiday_info(d))
            .collect()
    }

    /// Progress from `today` towards `deadline`.
    fn countdown(&self, today: Date, deadline: Date) -> Countdown {
        let calendar_days_remaining = today.days_between(deadline);
        let working_days_remaining = if calendar_days_remaining > 0 {
            today
                .iter_to(deadline)
                .skip(1)
                .filter(|d| self.is_working_day(*d))
                .count() as u32
        } else {
            0
        };
        Countdown {
            today,
            deadline,
            calendar_days_remaining,
            working_days_remaining,
            is_overdue: calendar_days_remaining < 0,
        }
    }
}

/// Advance from `start` until `budget` working days have been passed.
/// Returns the landing date and the number of civil days walked.
fn walk_working_days<C: Calendar + ?Sized>(cal: &C, start: Date, budget: u32) -> Result<(Date, u32)> {
    let mut date = start;
    let mut remaining = budget;
    let mut steps = 0u32;
    while remaining > 0 {
        date = date.succ()?;
        steps += 1;
        if cal.is_working_day(date) {
            remaining -= 1;
        }
    }
    Ok((date, steps))
}

// ── BusinessCalendar ──────────────────────────────────────────────────────────

/// A calendar built from an explicit weekend set and holiday table.
///
/// Immutable once constructed; share it freely across threads.
#[derive(Debug, Clone)]
pub struct BusinessCalendar {
    name: String,
    weekend: WeekendSet,
    holidays: HolidayTable,
    include_eves: bool,
    warning_threshold: i32,
}

impl BusinessCalendar {
    /// Build a calendar that counts holiday eves and warns at
    /// [`DEFAULT_WARNING_THRESHOLD`] remaining working days.
    pub fn new(name: impl Into<String>, weekend: WeekendSet, holidays: HolidayTable) -> Self {
        Self {
            name: name.into(),
            weekend,
            holidays,
            include_eves: true,
            warning_threshold: DEFAULT_WARNING_THRESHOLD,
        }
    }

    /// The built-in Israel calendar.
    pub fn israel() -> Self {
        crate::calendars::israel::calendar()
    }

    /// Build from a deserialized configuration.
    pub fn from_config(config: CalendarConfig) -> Result<Self> {
        if config.warning_threshold < 0 {
            return Err(Error::Config(format!(
                "warning_threshold must be non-negative, got {}",
                config.warning_threshold
            )));
        }
        let holidays = HolidayTable::new(config.holidays)?;
        debug!(
            calendar = %config.name,
            holidays = holidays.len(),
            years = ?holidays.covered_years(),
            "loaded calendar configuration"
        );
        Ok(Self::new(config.name, config.weekend, holidays)
            .with_include_eves(config.include_eves)
            .with_warning_threshold(config.warning_threshold))
    }

    /// Parse a JSON configuration and build from it.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_config(CalendarConfig::from_json(json)?)
    }

    /// Choose whether holiday eves are non-working days.
    pub fn with_include_eves(mut self, include_eves: bool) -> Self {
        self.include_eves = include_eves;
        self
    }

    /// Set the remaining-days threshold for [`Severity::DueSoon`].
    pub fn with_warning_threshold(mut self, threshold: i32) -> Self {
        self.warning_threshold = threshold;
        self
    }

    /// The weekend days.
    pub fn weekend(&self) -> WeekendSet {
        self.weekend
    }

    /// The holiday table.
    pub fn holidays(&self) -> &HolidayTable {
        &self.holidays
    }

    /// The due-soon threshold.
    pub fn warning_threshold(&self) -> i32 {
        self.warning_threshold
    }

    /// Count working days from `start` through `end`, accepting dates or
    /// ISO 8601 text. `end = None` means today.
    ///
    /// ```
    /// use bc_time::BusinessCalendar;
    ///
    /// let cal = BusinessCalendar::israel();
    /// let r = cal
    ///     .day_counter("2026-02-22", Some("2026-02-28".into()), Some(3))
    ///     .unwrap();
    /// assert_eq!((r.working_days, r.weekend_days, r.total_days), (5, 2, 7));
    /// assert!(r.is_overdue);
    /// ```
    pub fn day_counter<'a>(
        &self,
        start: impl Into<DateInput<'a>>,
        end: Option<DateInput<'a>>,
        target_working_days: Option<u32>,
    ) -> Result<DayCounterResult> {
        let start = parse_date(start)?;
        let end = match end {
            Some(end) => parse_date(end)?,
            None => Date::today()?,
        };
        Ok(self.compute_range(start, end, target_working_days))
    }

    /// [`project_target_date`](Calendar::project_target_date) over date or
    /// text input.
    pub fn target_date<'a>(&self, start: impl Into<DateInput<'a>>, working_days: u32) -> Result<Date> {
        self.project_target_date(parse_date(start)?, working_days)
    }

    /// [`countdown`](Calendar::countdown) over date or text input.
    /// `today = None` means the host's current date.
    pub fn countdown_to<'a>(
        &self,
        deadline: impl Into<DateInput<'a>>,
        today: Option<DateInput<'a>>,
    ) -> Result<Countdown> {
        let deadline = parse_date(deadline)?;
        let today = match today {
            Some(today) => parse_date(today)?,
            None => Date::today()?,
        };
        Ok(self.countdown(today, deadline))
    }

    /// Classify with this calendar's warning threshold.
    pub fn severity<U: Urgency + ?Sized>(&self, measure: &U) -> Severity {
        classify_severity_with(measure, self.warning_threshold)
    }
}

impl Default for BusinessCalendar {
    fn default() -> Self {
        Self::israel()
    }
}

impl Calendar for BusinessCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_weekend(&self, date: Date) -> bool {
        self.weekend.contains(date.weekday())
    }

    fn holiday_info(&self, date: Date) -> Option<HolidayInfo<'_>> {
        self.holidays.get(date).map(|definition| HolidayInfo {
            definition,
            is_eve: false,
        })
    }

    fn eve_of(&self, date: Date) -> Option<&HolidayDefinition> {
        self.holidays.eve_of(date)
    }

    fn counts_eves(&self) -> bool {
        self.include_eves
    }

    fn covers(&self, date: Date) -> bool {
        self.holidays.is_empty() || self.holidays.covers(date)
    }

    fn holidays_between(&self, from: Date, to: Date) -> Vec<HolidayInfo<'_>> {
        self.holidays
            .between(from, to)
            .map(|definition| HolidayInfo {
                definition,
                is_eve: false,
            })
            .collect()
    }
}
