//! Error type for date validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Reasons a candidate date is rejected.
///
/// Validation is all-or-nothing: a rejected date commits no state anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DateError {
    /// Date falls outside the span covered by the year table.
    OutOfRange,
    /// Month outside 1-12.
    InvalidMonth,
    /// Day outside the valid length of the month.
    InvalidDay,
    /// One of the ten days removed by the 1582 Gregorian reform.
    ReformGap,
}

impl Display for DateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange => write!(f, "date outside the 1000-2050 table span"),
            Self::InvalidMonth => write!(f, "month must be 1-12"),
            Self::InvalidDay => write!(f, "day outside the month's length"),
            Self::ReformGap => write!(f, "1582-10-05 through 1582-10-14 do not exist"),
        }
    }
}

impl Error for DateError {}
