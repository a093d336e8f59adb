use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::consts::DATE_SEPARATOR;
use crate::types::{Day, Month, Year};
use crate::{ParseError, prelude::*};

/// A validated Gregorian calendar date.
///
/// Field order makes the derived ordering chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct GregorianDate {
    year:  Year,
    month: Month,
    day:   Day,
}

impl GregorianDate {
    /// Creates a date from raw components.
    ///
    /// # Errors
    /// Returns `ParseError` if any component is out of range or the day does
    /// not exist in that month.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year:  Year::new(year)?,
            month: Month::new(month)?,
            day:   Day::new(day, year, month)?,
        })
    }

    /// Creates a date from already validated parts.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if `day` does not exist in that month.
    pub fn from_parts(year: Year, month: Month, day: Day) -> Result<Self, ParseError> {
        Self::new(year.get(), month.get(), day.get())
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Day count from the proleptic Gregorian epoch; 0001-01-01 is day 1.
    pub fn day_number(&self) -> i32 {
        self.to_naive().num_days_from_ce()
    }

    /// Inverse of [`GregorianDate::day_number`].
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the day falls outside years
    /// `1..=MAX_YEAR`.
    pub fn from_day_number(days: i32) -> Result<Self, ParseError> {
        NaiveDate::from_num_days_from_ce_opt(days)
            .ok_or_else(|| ParseError::InvalidFormat(format!("day number {days}")))
            .and_then(Self::try_from)
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(&self, other: &Self) -> i32 {
        other.day_number() - self.day_number()
    }

    /// The following day, or `None` past the end of year `MAX_YEAR`.
    pub fn succ(&self) -> Option<Self> {
        self.to_naive().succ_opt().and_then(|d| Self::try_from(d).ok())
    }

    /// The preceding day, or `None` before 0001-01-01.
    pub fn pred(&self) -> Option<Self> {
        self.to_naive().pred_opt().and_then(|d| Self::try_from(d).ok())
    }

    /// Converts to a `chrono` date.
    pub fn to_naive(&self) -> NaiveDate {
        // every validated date lies well inside chrono's supported years
        NaiveDate::from_ymd_opt(
            i32::from(self.year()),
            u32::from(self.month()),
            u32::from(self.day()),
        )
        .unwrap_or(NaiveDate::MIN)
    }
}

impl TryFrom<NaiveDate> for GregorianDate {
    type Error = ParseError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        let year = Year::from_i64(date.year().into())?;
        let month = u8::try_from(date.month()).map_err(|_| ParseError::InvalidFormat(date.to_string()))?;
        let day = u8::try_from(date.day()).map_err(|_| ParseError::InvalidFormat(date.to_string()))?;
        Self::new(year.get(), month, day)
    }
}

impl TryFrom<(u16, u8, u8)> for GregorianDate {
    type Error = ParseError;

    fn try_from((year, month, day): (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl FromStr for GregorianDate {
    type Err = ParseError;

    /// Parses strict ISO `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} parts: {s}",
                parts.len()
            )));
        };

        let year = parse_number::<u16>(year)?;
        let month = parse_number::<u8>(month)?;
        let day = parse_number::<u8>(day)?;
        Self::new(year, month, day)
    }
}

/// Helper to parse an integer with better error messages
pub(crate) fn parse_number<T: FromStr>(s: &str) -> Result<T, ParseError> {
    s.parse::<T>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
