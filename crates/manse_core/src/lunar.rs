//! Lunar date arithmetic over the encoded month-size data.

use std::fmt;

use manse_table::{BASE_YEAR, YearEntry};

use crate::date_key;
use crate::error::DateError;

/// Earliest representable lunar date, as a `y*10000 + m*100 + d` key.
const LUNAR_MIN_KEY: i64 = 1000_01_01;

/// Latest representable lunar date (the table's usable span ends at the
/// lunar date pairing with solar 2050-12-31).
const LUNAR_MAX_KEY: i64 = 2050_11_18;

/// A validated Korean lunar calendar date.
///
/// `intercalary` is true only when the date is the leap occurrence of
/// `month`; the constructor normalizes it against the year table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub intercalary: bool,
}

impl LunarDate {
    /// Validate a candidate lunar date.
    ///
    /// The usable span is 1000-01-01 through 2050-11-18. The day limit is
    /// the leap occurrence's length only when `intercalary` is set and the
    /// table's leap month for `year` equals `month`; the flag is then kept
    /// on the constructed date, and silently dropped otherwise.
    pub fn new(year: i32, month: u32, day: u32, intercalary: bool) -> Result<Self, DateError> {
        if !(LUNAR_MIN_KEY..=LUNAR_MAX_KEY).contains(&date_key(year, month, day)) {
            return Err(DateError::OutOfRange);
        }
        if !(1..=12).contains(&month) {
            return Err(DateError::InvalidMonth);
        }
        let entry = YearEntry::for_year(year).ok_or(DateError::OutOfRange)?;
        if day == 0 || day > entry.occurrence_days(month, intercalary) {
            return Err(DateError::InvalidDay);
        }
        let intercalary = intercalary && entry.leap_month() == Some(month);
        Ok(Self { year, month, day, intercalary })
    }

    /// Absolute day index of this date, counted from the lunar epoch
    /// (lunar 1000-01-01 is day 1).
    pub fn absolute_days(self) -> i64 {
        absolute_days(self.year, self.month, self.day, self.intercalary)
    }
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)?;
        if self.intercalary {
            write!(f, " Intercalation")?;
        }
        Ok(())
    }
}

/// Days in a lunar month of a covered year. The leap occurrence's length
/// is returned only when `intercalary` is set and the year's leap month
/// equals `month`. `None` outside the table span or for a month outside
/// 1-12.
pub fn days_in_month(year: i32, month: u32, intercalary: bool) -> Option<u32> {
    if !(1..=12).contains(&month) {
        return None;
    }
    YearEntry::for_year(year).map(|e| e.occurrence_days(month, intercalary))
}

/// Total days in a lunar year, 0 outside the table.
fn year_days(year: i32) -> i64 {
    YearEntry::for_year(year).map_or(0, |e| i64::from(e.year_days()))
}

/// Sum of whole lunar year lengths for `BASE_YEAR..=year`.
fn days_through_year(year: i32) -> i64 {
    (BASE_YEAR..=year).map(year_days).sum()
}

/// Days in months 1..=month of `year`, counting the intercalary month
/// when it falls within that span. An intercalary month at or before
/// `month` is always part of the elapsed timeline, whichever occurrence
/// the caller is addressing.
fn days_through_month(year: i32, month: u32) -> i64 {
    let Some(entry) = YearEntry::for_year(year) else {
        return 0;
    };
    let mut days: i64 = (1..=month).map(|m| i64::from(entry.month_days(m))).sum();
    if let Some(leap) = entry.leap_month() {
        if leap <= month {
            days += i64::from(entry.occurrence_days(leap, true));
        }
    }
    days
}

/// Absolute day index for an unvalidated lunar (year, month, day) triple.
///
/// The conversion scans probe month starts directly, so this skips
/// validation. When the requested month is itself the leap month and the
/// leap occurrence is addressed, the ordinary occurrence's full length is
/// added so the leap occurrence sits after its sibling on the timeline.
pub(crate) fn absolute_days(year: i32, month: u32, day: u32, intercalary: bool) -> i64 {
    let mut days = days_through_year(year - 1) + days_through_month(year, month - 1) + i64::from(day);
    if intercalary {
        if let Some(entry) = YearEntry::for_year(year) {
            if entry.leap_month() == Some(month) {
                days += i64::from(entry.month_days(month));
            }
        }
    }
    days
}
