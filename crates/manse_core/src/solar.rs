//! Solar (Gregorian) date arithmetic over the table's leap-year flags.
//!
//! The table carries the solar leap-year bit for every covered year, so no
//! independent leap-year rule is applied here.

use std::fmt;

use manse_table::{BASE_YEAR, YearEntry};

use crate::date_key;
use crate::error::DateError;

/// Month lengths; index 12 holds leap-year February.
const SOLAR_MONTH_DAYS: [u32; 13] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31, 29];

/// Days in a common solar year.
const SMALL_YEAR_DAYS: i64 = 365;

/// Days in a solar leap year.
const BIG_YEAR_DAYS: i64 = 366;

/// Offset aligning the solar day count with the lunar epoch: lunar
/// 1000-01-01 precedes the solar reference by 43 days.
const SOLAR_LUNAR_DAY_DIFF: i64 = 43;

/// Earliest representable solar date, as a `y*10000 + m*100 + d` key.
const SOLAR_MIN_KEY: i64 = 1000_02_13;

/// Latest representable solar date.
const SOLAR_MAX_KEY: i64 = 2050_12_31;

/// A validated Gregorian calendar date within the table span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl SolarDate {
    /// Validate a candidate Gregorian date.
    ///
    /// The usable span is 1000-02-13 through 2050-12-31. October 1582
    /// carries the reform gap: days 5-14 are rejected and the month's
    /// effective day limit is extended by 10 to compensate.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        if !(SOLAR_MIN_KEY..=SOLAR_MAX_KEY).contains(&date_key(year, month, day)) {
            return Err(DateError::OutOfRange);
        }
        if !(1..=12).contains(&month) {
            return Err(DateError::InvalidMonth);
        }
        if day == 0 {
            return Err(DateError::InvalidDay);
        }
        let mut limit = month_days(year, month);
        if year == 1582 && month == 10 {
            if (5..=14).contains(&day) {
                return Err(DateError::ReformGap);
            }
            limit += 10;
        }
        if day > limit {
            return Err(DateError::InvalidDay);
        }
        Ok(Self { year, month, day })
    }

    /// Absolute day index of this date, counted from the lunar epoch.
    pub fn absolute_days(self) -> i64 {
        absolute_days(self.year, self.month, self.day)
    }
}

impl fmt::Display for SolarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Days in a solar month of a covered year. `None` outside the table span
/// or for a month outside 1-12.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    if !(1..=12).contains(&month) {
        return None;
    }
    YearEntry::for_year(year).map(|_| month_days(year, month))
}

/// Days in a solar month; table-driven February.
fn month_days(year: i32, month: u32) -> u32 {
    if month == 2 && is_leap_year(year) {
        SOLAR_MONTH_DAYS[12]
    } else {
        SOLAR_MONTH_DAYS[(month - 1) as usize]
    }
}

/// Solar leap-year flag from the table.
fn is_leap_year(year: i32) -> bool {
    YearEntry::for_year(year).is_some_and(YearEntry::solar_leap_year)
}

/// Total days in a solar year.
fn year_days(year: i32) -> i64 {
    if is_leap_year(year) {
        BIG_YEAR_DAYS
    } else {
        SMALL_YEAR_DAYS
    }
}

/// Sum of whole solar year lengths for `BASE_YEAR..=year`.
fn days_through_year(year: i32) -> i64 {
    (BASE_YEAR..=year).map(year_days).sum()
}

/// Absolute day index for an unvalidated (year, month, day) triple.
///
/// The conversion scans probe month starts, including month 1 of the year
/// after the table's last, so this deliberately skips validation.
pub(crate) fn absolute_days(year: i32, month: u32, day: u32) -> i64 {
    let mut days = days_through_year(year - 1);
    for m in 1..month {
        days += i64::from(month_days(year, m));
    }
    days + i64::from(day) - SOLAR_LUNAR_DAY_DIFF
}
