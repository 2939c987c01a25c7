//! Stateful converter mirroring the engine's original API shape.
//!
//! All conversion work happens in the pure layer (`convert`); this type
//! only holds the last successfully set pair and collapses validation
//! errors to `bool`, which is the contract the original engine exposes.

use crate::convert::{lunar_to_solar, solar_to_lunar};
use crate::lunar::LunarDate;
use crate::solar::SolarDate;

/// Holds the last successfully set lunar/solar pair.
///
/// Both triples are replaced together on every successful set, since one
/// determines the other; a failed set leaves prior state untouched. Not
/// meant for sharing across concurrent mutators.
#[derive(Debug, Clone, Copy, Default)]
pub struct LunarSolarConverter {
    pair: Option<(LunarDate, SolarDate)>,
}

impl LunarSolarConverter {
    /// A converter with no date set. Scalar accessors read 0/false until a
    /// set succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set from a Gregorian date; `false` when the date is invalid.
    pub fn set_solar_date(&mut self, year: i32, month: u32, day: u32) -> bool {
        match SolarDate::new(year, month, day) {
            Ok(solar) => {
                self.pair = Some((solar_to_lunar(solar), solar));
                true
            }
            Err(_) => false,
        }
    }

    /// Set from a lunar date; `false` when the date is invalid. The
    /// intercalary flag is normalized against the year's actual leap month.
    pub fn set_lunar_date(&mut self, year: i32, month: u32, day: u32, intercalary: bool) -> bool {
        match LunarDate::new(year, month, day, intercalary) {
            Ok(lunar) => {
                self.pair = Some((lunar, lunar_to_solar(lunar)));
                true
            }
            Err(_) => false,
        }
    }

    /// The stored lunar date, if any set has succeeded.
    pub fn lunar_date(&self) -> Option<LunarDate> {
        self.pair.map(|(l, _)| l)
    }

    /// The stored solar date, if any set has succeeded.
    pub fn solar_date(&self) -> Option<SolarDate> {
        self.pair.map(|(_, s)| s)
    }

    pub fn lunar_year(&self) -> i32 {
        self.lunar_date().map_or(0, |d| d.year)
    }

    pub fn lunar_month(&self) -> u32 {
        self.lunar_date().map_or(0, |d| d.month)
    }

    pub fn lunar_day(&self) -> u32 {
        self.lunar_date().map_or(0, |d| d.day)
    }

    /// Whether the stored lunar date is an intercalary occurrence.
    pub fn intercalation(&self) -> bool {
        self.lunar_date().is_some_and(|d| d.intercalary)
    }

    pub fn solar_year(&self) -> i32 {
        self.solar_date().map_or(0, |d| d.year)
    }

    pub fn solar_month(&self) -> u32 {
        self.solar_date().map_or(0, |d| d.month)
    }

    pub fn solar_day(&self) -> u32 {
        self.solar_date().map_or(0, |d| d.day)
    }

    /// Zero-padded `YYYY-MM-DD` lunar rendering, with an ` Intercalation`
    /// suffix for a leap occurrence. `0000-00-00` while unset.
    pub fn lunar_iso_format(&self) -> String {
        match self.lunar_date() {
            Some(d) => d.to_string(),
            None => String::from("0000-00-00"),
        }
    }

    /// Zero-padded `YYYY-MM-DD` solar rendering. `0000-00-00` while unset.
    pub fn solar_iso_format(&self) -> String {
        match self.solar_date() {
            Some(d) => d.to_string(),
            None => String::from("0000-00-00"),
        }
    }
}
