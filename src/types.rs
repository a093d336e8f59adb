use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    LONG_LUNAR_MONTH, MAX_MONTH, MAX_YEAR,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// Conversions shared by the bounded newtypes: `get`, `TryFrom` through
/// `new`, `From` back to the raw integer (for serde) and `Display`.
macro_rules! bounded_newtype {
    ($name:ident, $raw:ty) => {
        impl $name {
            #[inline]
            pub const fn get(self) -> $raw {
                self.0.get()
            }
        }

        impl TryFrom<$raw> for $name {
            type Error = ParseError;

            fn try_from(value: $raw) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for $raw {
            fn from(value: $name) -> Self {
                value.get()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

/// A Gregorian or lunisolar year, `1..=MAX_YEAR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        NonZeroU16::new(value)
            .filter(|_| value <= MAX_YEAR)
            .map(Self)
            .ok_or(ParseError::InvalidYear(value.into()))
    }

    /// Like [`Year::new`] but accepts any signed year, as produced by `chrono`.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is outside `1..=MAX_YEAR`.
    pub fn from_i64(value: i64) -> Result<Self, ParseError> {
        u16::try_from(value)
            .map_err(|_| ParseError::InvalidYear(value))
            .and_then(Self::new)
    }
}

bounded_newtype!(Year, u16);

/// A month number, `1..=MAX_MONTH`. Shared by both calendars: a lunar leap
/// month carries the number of the month it repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        NonZeroU8::new(value)
            .filter(|_| value <= MAX_MONTH)
            .map(Self)
            .ok_or(ParseError::InvalidMonth(value))
    }
}

bounded_newtype!(Month, u8);

/// A Gregorian day of month, checked against its year and month on
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the day does not exist in that
    /// month, or the month is not 1-12.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, ParseError> {
        let exists = (1..=MAX_MONTH).contains(&month) && value <= days_in_month(year, month);
        NonZeroU8::new(value)
            .filter(|_| exists)
            .map(Self)
            .ok_or(ParseError::InvalidDay {
                month,
                day: value,
                year,
            })
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

/// Deserialization has no year or month at hand, so only the lower bound is
/// checked here; [`GregorianDate`](crate::GregorianDate) revalidates.
impl TryFrom<u8> for Day {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        NonZeroU8::new(value).map(Self).ok_or(ParseError::InvalidDay {
            month: 0,
            day:   value,
            year:  0,
        })
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A lunar day of month, `1..=30`. Whether day 30 exists depends on the
/// month, which only the calendar table knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LunarDay(NonZeroU8);

impl LunarDay {
    /// # Errors
    /// Returns `ParseError::InvalidLunarDay` if the value is 0 or > 30.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        NonZeroU8::new(value)
            .filter(|_| value <= LONG_LUNAR_MONTH)
            .map(Self)
            .ok_or(ParseError::InvalidLunarDay(value))
    }
}

bounded_newtype!(LunarDay, u8);

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub(crate) const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(2000).is_ok());
        assert!(Year::new(9999).is_ok());
    }

    #[test]
    fn test_year_new_invalid() {
        assert!(matches!(Year::new(0), Err(ParseError::InvalidYear(0))));
        assert!(matches!(
            Year::new(10000),
            Err(ParseError::InvalidYear(10000))
        ));
    }

    #[test]
    fn test_year_from_i64() {
        assert_eq!(Year::from_i64(2023).unwrap().get(), 2023);
        assert!(matches!(
            Year::from_i64(-44),
            Err(ParseError::InvalidYear(-44))
        ));
        assert!(matches!(
            Year::from_i64(70_000),
            Err(ParseError::InvalidYear(70_000))
        ));
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(2024).unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "2024");

        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);
        assert!(serde_json::from_str::<Year>("0").is_err());
    }

    #[test]
    fn test_month_new() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
        assert!(matches!(Month::new(0), Err(ParseError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(ParseError::InvalidMonth(13))));
    }

    #[test]
    fn test_newtypes_convert_back_to_raw() {
        let month: Month = 8.try_into().unwrap();
        assert_eq!(u8::from(month), 8);
        assert_eq!(u16::from(Year::new(1984).unwrap()), 1984);
        assert_eq!(LunarDay::try_from(15).unwrap().to_string(), "15");
        assert!(Month::try_from(13).is_err());
    }

    #[test]
    fn test_day_deserializes_without_context() {
        // 31 is accepted alone and rejected once a month is known
        let day: Day = serde_json::from_str("31").unwrap();
        assert_eq!(day.get(), 31);
        assert!(serde_json::from_str::<Day>("0").is_err());
        assert!(Day::new(day.get(), 2024, 4).is_err());
    }

    #[test]
    fn test_day_new_valid() {
        // January - 31 days
        assert!(Day::new(1, 2024, 1).is_ok());
        assert!(Day::new(31, 2024, 1).is_ok());

        // February non-leap - 28 days
        assert!(Day::new(28, 2023, 2).is_ok());
        assert!(Day::new(29, 2023, 2).is_err());

        // February leap year - 29 days
        assert!(Day::new(29, 2024, 2).is_ok());
        assert!(Day::new(30, 2024, 2).is_err());

        // April - 30 days
        assert!(Day::new(30, 2024, 4).is_ok());
        assert!(Day::new(31, 2024, 4).is_err());
    }

    #[test]
    fn test_day_new_invalid() {
        assert!(matches!(
            Day::new(0, 2024, 1),
            Err(ParseError::InvalidDay { .. })
        ));
        assert!(matches!(
            Day::new(32, 2024, 1),
            Err(ParseError::InvalidDay {
                month: 1,
                day: 32,
                year: 2024
            })
        ));
        // month out of range is reported rather than indexing past the table
        assert!(matches!(
            Day::new(1, 2024, 13),
            Err(ParseError::InvalidDay { month: 13, .. })
        ));
    }

    #[test]
    fn test_lunar_day_bounds() {
        assert_eq!(LunarDay::new(1).unwrap().get(), 1);
        assert_eq!(LunarDay::new(30).unwrap().get(), 30);
        assert!(matches!(
            LunarDay::new(0),
            Err(ParseError::InvalidLunarDay(0))
        ));
        assert!(matches!(
            LunarDay::new(31),
            Err(ParseError::InvalidLunarDay(31))
        ));
    }

    #[test]
    fn test_is_leap_year_cases() {
        let cases = [
            (2020, true, "divisible by 4"),
            (2023, false, "not divisible by 4"),
            (1900, false, "century not divisible by 400"),
            (2100, false, "century not divisible by 400"),
            (2000, true, "divisible by 400"),
        ];

        for (year, is_leap, description) in cases {
            assert_eq!(
                is_leap_year(year),
                is_leap,
                "Year {year} ({description}): expected leap = {is_leap}"
            );
        }
    }

    #[test]
    fn test_all_months_have_valid_days() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12 {
            assert_eq!(
                days_in_month(2023, month),
                expected[month as usize],
                "Month {month} has incorrect day count"
            );
        }
        assert_eq!(days_in_month(2024, 2), 29);
    }
}
