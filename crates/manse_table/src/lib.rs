//! Encoded Korean lunisolar calendar table, years 1000 through 2050.
//!
//! One `u32` word per year. Bit layout (bit 0 = LSB):
//! - bits 0-11: size flags for lunar months 1-12; the flag for month `m`
//!   sits at position `12 - m`; set = 30 days ("big"), clear = 29 ("small")
//! - bits 12-15: intercalary month number for the year, 0 when none
//! - bit 16: size flag for the intercalary month (set = 30 days)
//! - bits 17-25: total days in the lunar year, intercalary month included
//! - bit 30: solar leap-year flag for the same year index
//!
//! Every entry is internally consistent: the month sizes implied by the
//! flag bits sum to the stored total. The table tests check this for all
//! 1051 entries.

pub mod data;

pub use data::{BASE_YEAR, LUNAR_TABLE, MAX_YEAR};

/// Days in a small lunar month.
pub const SMALL_MONTH_DAYS: u32 = 29;

/// Days in a big lunar month.
pub const BIG_MONTH_DAYS: u32 = 30;

/// Decoded view over one year's table word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearEntry(u32);

impl YearEntry {
    /// Look up the entry for a calendar year. `None` outside 1000-2050.
    pub fn for_year(year: i32) -> Option<Self> {
        if (BASE_YEAR..=MAX_YEAR).contains(&year) {
            Some(Self(LUNAR_TABLE[(year - BASE_YEAR) as usize]))
        } else {
            None
        }
    }

    /// The raw table word.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Intercalary month number for the year, if it has one (1-12).
    pub const fn leap_month(self) -> Option<u32> {
        let m = (self.0 >> 12) & 0x000F;
        if m == 0 { None } else { Some(m) }
    }

    /// Days in the ordinary occurrence of lunar month 1-12.
    pub fn month_days(self, month: u32) -> u32 {
        debug_assert!((1..=12).contains(&month));
        if (self.0 >> (12 - month)) & 0x01 != 0 {
            BIG_MONTH_DAYS
        } else {
            SMALL_MONTH_DAYS
        }
    }

    /// Days in the given occurrence of a month: the intercalary occurrence
    /// when `intercalary` is set and the year's leap month equals `month`,
    /// the ordinary occurrence otherwise.
    pub fn occurrence_days(self, month: u32, intercalary: bool) -> u32 {
        if intercalary && self.leap_month() == Some(month) {
            if (self.0 >> 16) & 0x01 != 0 {
                BIG_MONTH_DAYS
            } else {
                SMALL_MONTH_DAYS
            }
        } else {
            self.month_days(month)
        }
    }

    /// Total days in the lunar year (12 ordinary months plus the
    /// intercalary month when present).
    pub const fn year_days(self) -> u32 {
        (self.0 >> 17) & 0x01FF
    }

    /// Whether the same-numbered solar year is a leap year.
    pub const fn solar_leap_year(self) -> bool {
        (self.0 >> 30) & 0x01 != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last_entries() {
        assert_eq!(YearEntry::for_year(1000).unwrap().raw(), 0x82c6_0a57);
        assert_eq!(YearEntry::for_year(2050).unwrap().raw(), 0x8301_38b6);
    }

    #[test]
    fn out_of_range_years() {
        assert!(YearEntry::for_year(999).is_none());
        assert!(YearEntry::for_year(2051).is_none());
    }

    #[test]
    fn entries_internally_consistent() {
        for year in BASE_YEAR..=MAX_YEAR {
            let e = YearEntry::for_year(year).unwrap();
            let mut sum: u32 = (1..=12).map(|m| e.month_days(m)).sum();
            if let Some(leap) = e.leap_month() {
                sum += e.occurrence_days(leap, true);
            }
            assert_eq!(sum, e.year_days(), "year {year}");
        }
    }

    #[test]
    fn leap_months_in_range() {
        for year in BASE_YEAR..=MAX_YEAR {
            let e = YearEntry::for_year(year).unwrap();
            if let Some(leap) = e.leap_month() {
                assert!((1..=12).contains(&leap), "year {year} leap {leap}");
            }
        }
    }

    #[test]
    fn known_leap_months() {
        assert_eq!(YearEntry::for_year(1000).unwrap().leap_month(), None);
        assert_eq!(YearEntry::for_year(1900).unwrap().leap_month(), Some(8));
        assert_eq!(YearEntry::for_year(2020).unwrap().leap_month(), Some(4));
        assert_eq!(YearEntry::for_year(2025).unwrap().leap_month(), Some(6));
        assert_eq!(YearEntry::for_year(2033).unwrap().leap_month(), Some(11));
        assert_eq!(YearEntry::for_year(2050).unwrap().leap_month(), Some(3));
    }

    #[test]
    fn month_days_2025() {
        let e = YearEntry::for_year(2025).unwrap();
        let lengths: Vec<u32> = (1..=12).map(|m| e.month_days(m)).collect();
        assert_eq!(lengths, [30, 29, 30, 29, 29, 30, 30, 29, 30, 30, 30, 29]);
    }

    #[test]
    fn leap_occurrence_days() {
        // 2020's leap month 4 is small; 2050's leap month 3 is big.
        let e = YearEntry::for_year(2020).unwrap();
        assert_eq!(e.occurrence_days(4, true), SMALL_MONTH_DAYS);
        assert_eq!(e.occurrence_days(4, false), BIG_MONTH_DAYS);

        let e = YearEntry::for_year(2050).unwrap();
        assert_eq!(e.occurrence_days(3, true), BIG_MONTH_DAYS);
    }

    #[test]
    fn intercalary_flag_ignored_for_non_leap_month() {
        // 2020's leap month is 4; asking for the leap occurrence of month 3
        // falls back to the ordinary length.
        let e = YearEntry::for_year(2020).unwrap();
        assert_eq!(e.occurrence_days(3, true), e.month_days(3));
    }

    #[test]
    fn solar_leap_flags() {
        assert!(YearEntry::for_year(1988).unwrap().solar_leap_year());
        assert!(YearEntry::for_year(2000).unwrap().solar_leap_year());
        assert!(YearEntry::for_year(2020).unwrap().solar_leap_year());
        assert!(!YearEntry::for_year(1582).unwrap().solar_leap_year());
        assert!(!YearEntry::for_year(2025).unwrap().solar_leap_year());
    }

    #[test]
    fn year_days_bounds() {
        for year in BASE_YEAR..=MAX_YEAR {
            let e = YearEntry::for_year(year).unwrap();
            let days = e.year_days();
            assert!((353..=385).contains(&days), "year {year}: {days} days");
        }
    }
}
