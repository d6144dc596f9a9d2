//! `Date` type and the text-parsing boundary.
//!
//! Dates are civil dates with no time of day, stored as a serial number of
//! days. Serial 1 is January 1, 1900; the valid range is 1900-01-01 to
//! 2199-12-31. Because there is no time component, two callers in different
//! time zones that name the same calendar day always get the same `Date`.
//!
//! Text enters the library through [`Date::parse`] (or [`parse_date`]), which
//! accepts ISO 8601 dates and timestamps. A timestamp contributes the
//! calendar date written in its own offset: `2026-02-22T23:30:00+02:00` is
//! February 22 regardless of the host's time zone.

use bc_core::errors::{Error, Result};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::weekday::Weekday;

/// A civil calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1900..=2199).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1900, 2199]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Const constructor for dates known to be valid, such as entries of a
    /// compiled-in holiday table.
    ///
    /// # Panics
    /// Panics if the components do not form a date in the valid range; in a
    /// `const` or `static` initializer this is a compile error.
    pub const fn ymd(year: u16, month: u8, day: u8) -> Self {
        assert!(year >= 1900 && year <= 2199, "year out of range [1900, 2199]");
        assert!(month >= 1 && month <= 12, "month out of range [1, 12]");
        assert!(day >= 1 && day <= days_in_month(year, month), "day out of range");
        Date(serial_from_ymd(year, month, day))
    }

    /// Create a date from a serial number (1 = 1900-01-01).
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!("serial {serial} out of range")));
        }
        Ok(d)
    }

    /// Parse an ISO 8601 date or timestamp.
    ///
    /// Accepted forms:
    /// * `YYYY-MM-DD`
    /// * RFC 3339 timestamps (`2026-02-22T10:15:00Z`, `…+02:00`)
    /// * PostgreSQL-style timestamps (`2026-02-22 10:15:00.123+00`)
    /// * naive timestamps (`2026-02-22T10:15`, `2026-02-22T10:15:00.5`)
    ///
    /// Timestamps contribute the date as written in their own offset.
    pub fn parse(input: &str) -> Result<Self> {
        let s = input.trim();
        if s.is_empty() {
            return Err(Error::parse(input, "empty input"));
        }
        if !has_iso_date_prefix(s) {
            return Err(Error::parse(input, "expected a zero-padded YYYY-MM-DD date"));
        }
        let naive = if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            d
        } else if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            dt.date_naive()
        } else if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f%#z") {
            dt.date_naive()
        } else if let Some(dt) = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        {
            dt.date()
        } else {
            return Err(Error::parse(
                input,
                "expected an ISO 8601 date (YYYY-MM-DD) or timestamp",
            ));
        };
        Self::try_from(naive).map_err(|e| Error::parse(input, e))
    }

    /// Today's civil date in the host's local time zone.
    ///
    /// This is the only impure function in the crate; everything else takes
    /// the reference date explicitly.
    pub fn today() -> Result<Self> {
        Self::try_from(chrono::Local::now().date_naive())
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // 1900-01-01 (serial 1) was a Monday.
        let w = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        Weekday::ALL[w as usize - 1]
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0.checked_add(n).unwrap_or(i32::MAX);
        if serial < Self::MIN.0 || serial > Self::MAX.0 {
            return Err(Error::Date(format!(
                "{self} {n:+} days is out of range [{}, {}]",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Date(serial))
    }

    /// The following civil day.
    pub fn succ(self) -> Result<Self> {
        self.add_days(1)
    }

    /// Number of calendar days from `self` to `other`; positive if
    /// `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Iterate every civil day from `self` to `end`, both inclusive.
    ///
    /// Empty when `end < self`.
    pub fn iter_to(self, end: Date) -> DateRange {
        DateRange {
            next: self.0,
            last: end.0,
        }
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

/// Inclusive iterator over consecutive dates, from [`Date::iter_to`].
#[derive(Debug, Clone)]
pub struct DateRange {
    next: i32,
    last: i32,
}

impl Iterator for DateRange {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        if self.next > self.last {
            return None;
        }
        let d = Date(self.next);
        self.next += 1;
        Some(d)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.last - self.next + 1).max(0) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for DateRange {}

// ── chrono interop ────────────────────────────────────────────────────────────

impl TryFrom<NaiveDate> for Date {
    type Error = Error;

    fn try_from(d: NaiveDate) -> Result<Self> {
        let year = u16::try_from(d.year())
            .map_err(|_| Error::Date(format!("year {} out of range [1900, 2199]", d.year())))?;
        Date::from_ymd(year, d.month() as u8, d.day() as u8)
    }
}

impl From<Date> for NaiveDate {
    fn from(d: Date) -> Self {
        let (y, m, day) = ymd_from_serial(d.0);
        // Every in-range `Date` is a valid proleptic Gregorian date.
        NaiveDate::from_ymd_opt(y as i32, m as u32, day as u32).unwrap_or_default()
    }
}

impl std::str::FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Date::parse(s)
    }
}

// ── Parsing boundary ──────────────────────────────────────────────────────────

/// Anything the public API accepts where a date is expected: an already
/// normalized [`Date`], a chrono date, or ISO 8601 text.
#[derive(Debug, Clone, Copy)]
pub enum DateInput<'a> {
    /// A normalized date.
    Date(Date),
    /// A chrono civil date.
    Naive(NaiveDate),
    /// Text to be parsed with [`Date::parse`].
    Text(&'a str),
}

impl From<Date> for DateInput<'_> {
    fn from(d: Date) -> Self {
        DateInput::Date(d)
    }
}

impl From<NaiveDate> for DateInput<'_> {
    fn from(d: NaiveDate) -> Self {
        DateInput::Naive(d)
    }
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(s: &'a str) -> Self {
        DateInput::Text(s)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(s: &'a String) -> Self {
        DateInput::Text(s.as_str())
    }
}

/// Normalize any [`DateInput`] to a [`Date`].
pub fn parse_date<'a>(input: impl Into<DateInput<'a>>) -> Result<Date> {
    match input.into() {
        DateInput::Date(d) => Ok(d),
        DateInput::Naive(d) => Date::try_from(d),
        DateInput::Text(s) => Date::parse(s),
    }
}

// ── Display / serde ───────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Date::parse(&s).map_err(serde::de::Error::custom)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// `s` starts with `YYYY-MM-DD` and then ends or continues with a time part.
fn has_iso_date_prefix(s: &str) -> bool {
    let b = s.as_bytes();
    let digits = |r: std::ops::Range<usize>| b[r].iter().all(u8::is_ascii_digit);
    b.len() >= 10
        && digits(0..4)
        && b[4] == b'-'
        && digits(5..7)
        && b[7] == b'-'
        && digits(8..10)
        && matches!(b.get(10), None | Some(b'T' | b't' | b' '))
}

/// Whether a given year is a leap year.
pub const fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub const fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Convert (year, month, day) to a serial number.  Serial 1 = 1900-01-01.
const fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = year as i32;
    // Leap days in [1900, year); 1900 itself is not a leap year.
    let leap_days = (y - 1901) / 4 - (y - 1901) / 100 + (y - 1601) / 400;
    let mut serial = (y - 1900) * 365 + leap_days;
    serial += MONTH_OFFSET[month as usize - 1] as i32;
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    let mut y = (serial / 365 + 1900) as u16;
    loop {
        if serial < serial_from_ymd(y, 1, 1) {
            y -= 1;
        } else if serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1;
    let mut m = 1u8;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────
