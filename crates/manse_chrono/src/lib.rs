//! Adapter between `chrono::NaiveDate` and the conversion engine.
//!
//! This is the only place a platform date type appears. The adapter
//! performs no calendar logic of its own: the engine's validation decides
//! whether a date is representable, and `None` propagates "no
//! corresponding date in the other calendar".

use chrono::{Datelike, NaiveDate};

use manse_core::{LunarDate, SolarDate, lunar_to_solar, solar_to_lunar};

/// Lunar counterpart of a chrono date. `None` when the date falls outside
/// the engine's span.
pub fn to_lunar(date: NaiveDate) -> Option<LunarDate> {
    let solar = SolarDate::new(date.year(), date.month(), date.day()).ok()?;
    Some(solar_to_lunar(solar))
}

/// Chrono date for a lunar triple. `None` when the lunar date is invalid.
pub fn from_lunar(year: i32, month: u32, day: u32, intercalary: bool) -> Option<NaiveDate> {
    let lunar = LunarDate::new(year, month, day, intercalary).ok()?;
    let solar = lunar_to_solar(lunar);
    NaiveDate::from_ymd_opt(solar.year, solar.month, solar.day)
}

/// Today's solar/lunar pair from the system clock. `None` only outside the
/// engine's span.
pub fn today() -> Option<(SolarDate, LunarDate)> {
    let now = chrono::Local::now().date_naive();
    let solar = SolarDate::new(now.year(), now.month(), now.day()).ok()?;
    Some((solar, solar_to_lunar(solar)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_lunar_known_date() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        let lunar = to_lunar(date).unwrap();
        assert_eq!((lunar.year, lunar.month, lunar.day), (2025, 3, 4));
        assert!(!lunar.intercalary);
    }

    #[test]
    fn from_lunar_known_date() {
        let date = from_lunar(2025, 3, 4, false).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
    }

    #[test]
    fn round_trip() {
        let date = NaiveDate::from_ymd_opt(2020, 5, 23).unwrap();
        let lunar = to_lunar(date).unwrap();
        assert!(lunar.intercalary);
        let back = from_lunar(lunar.year, lunar.month, lunar.day, lunar.intercalary).unwrap();
        assert_eq!(back, date);
    }

    #[test]
    fn out_of_span_is_none() {
        let date = NaiveDate::from_ymd_opt(999, 12, 31).unwrap();
        assert!(to_lunar(date).is_none());
        let date = NaiveDate::from_ymd_opt(2051, 1, 1).unwrap();
        assert!(to_lunar(date).is_none());
        assert!(from_lunar(2050, 12, 1, false).is_none());
    }

    #[test]
    fn reform_gap_is_none() {
        // chrono's proleptic Gregorian calendar has 1582-10-10; the engine
        // does not.
        let date = NaiveDate::from_ymd_opt(1582, 10, 10).unwrap();
        assert!(to_lunar(date).is_none());
    }
}
