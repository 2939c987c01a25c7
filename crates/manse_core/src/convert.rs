//! Conversion between the two calendars through the absolute day index.
//!
//! Both directions reduce a date to days elapsed since the lunar epoch
//! (lunar 1000-01-01 = day 1), then rebuild the other calendar's triple by
//! scanning month starts. Scans are linear and bounded; correctness, not
//! speed, is the concern here.

use manse_table::YearEntry;

use crate::lunar::{self, LunarDate};
use crate::solar::{self, SolarDate};

/// Convert a solar date to its lunar counterpart.
pub fn solar_to_lunar(date: SolarDate) -> LunarDate {
    let target = date.absolute_days();

    // Lunar day 1 of year Y falls inside solar year Y, so the candidate is
    // Y itself or the year before.
    let year = if target >= lunar::absolute_days(date.year, 1, 1, false) {
        date.year
    } else {
        date.year - 1
    };

    let mut month = 12;
    while month > 1 && target < lunar::absolute_days(year, month, 1, false) {
        month -= 1;
    }

    let intercalary = YearEntry::for_year(year)
        .is_some_and(|e| e.leap_month() == Some(month))
        && target >= lunar::absolute_days(year, month, 1, true);
    let day = (target - lunar::absolute_days(year, month, 1, intercalary) + 1) as u32;

    LunarDate { year, month, day, intercalary }
}

/// Convert a lunar date to its solar counterpart.
pub fn lunar_to_solar(date: LunarDate) -> SolarDate {
    let target = date.absolute_days();

    // The tail of lunar year Y spills into solar year Y+1.
    let year = if target < solar::absolute_days(date.year + 1, 1, 1) {
        date.year
    } else {
        date.year + 1
    };

    let mut month = 12;
    while month > 1 && target < solar::absolute_days(year, month, 1) {
        month -= 1;
    }
    let day = (target - solar::absolute_days(year, month, 1) + 1) as u32;

    SolarDate { year, month, day }
}
