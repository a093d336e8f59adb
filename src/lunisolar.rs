use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{DATE_SEPARATOR, LEAP_MARKER, SEXAGENARY_CYCLE};
use crate::gregorian::parse_number;
use crate::types::{LunarDay, Month, Year};
use crate::{ParseError, prelude::*};

/// A date in the Korean/Chinese lunisolar calendar.
///
/// A leap month carries the number of the common month it follows, so
/// `2023-L02-01` comes right after the last day of common month 2. Field
/// order makes the derived ordering chronological within a year.
///
/// Only the component ranges are checked on construction; whether the date
/// exists (leap month present, 30th day present) is decided by the table
/// during conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LunisolarDate {
    year:          Year,
    month:         Month,
    is_leap_month: bool,
    day:           LunarDay,
}

impl LunisolarDate {
    /// # Errors
    /// Returns `ParseError` if year, month (1-12) or day (1-30) is out of range.
    pub fn new(year: u16, month: u8, day: u8, is_leap_month: bool) -> Result<Self, ParseError> {
        Ok(Self {
            year: Year::new(year)?,
            month: Month::new(month)?,
            is_leap_month,
            day: LunarDay::new(day)?,
        })
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

    pub const fn is_leap_month(&self) -> bool {
        self.is_leap_month
    }

    /// Stem-branch name of the lunar year.
    pub fn sexagenary_year(&self) -> Sexagenary {
        Sexagenary::for_year(self.year())
    }
}

impl std::fmt::Display for LunisolarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}{DATE_SEPARATOR}", self.year())?;
        if self.is_leap_month {
            write!(f, "{LEAP_MARKER}")?;
        }
        write!(f, "{:02}{DATE_SEPARATOR}{:02}", self.month(), self.day())
    }
}

impl FromStr for LunisolarDate {
    type Err = ParseError;

    /// Parses `YYYY-MM-DD`, with `YYYY-LMM-DD` for a leap month.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        };
        let (month, is_leap) = match month.strip_prefix(LEAP_MARKER) {
            Some(rest) => (rest, true),
            None => (*month, false),
        };

        Self::new(
            parse_number(year)?,
            parse_number(month)?,
            parse_number(day)?,
            is_leap,
        )
    }
}

/// Heavenly stems, 甲 through 癸.
const STEMS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];
/// Earthly branches, 子 through 亥.
const BRANCHES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// Position in the 60-year stem-branch cycle, numbered from 1 (甲子) to 60 (癸亥).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Sexagenary(u8);

impl Sexagenary {
    /// # Errors
    /// Returns `ParseError::InvalidSexagenary` outside `1..=60`.
    pub fn new(number: u8) -> Result<Self, ParseError> {
        if (1..=SEXAGENARY_CYCLE).contains(&number) {
            Ok(Self(number))
        } else {
            Err(ParseError::InvalidSexagenary(number))
        }
    }

    /// Cycle position of a lunar year. 1984 is 甲子.
    pub fn for_year(year: u16) -> Self {
        // 1984 % 60 == 4, so the offset aligns 1984 with position 1
        let n = (u32::from(year) + 56) % u32::from(SEXAGENARY_CYCLE);
        Self(u8::try_from(n).unwrap_or_default() + 1)
    }

    pub const fn number(self) -> u8 {
        self.0
    }

    /// Stem index, 0 (甲) to 9 (癸).
    pub const fn stem(self) -> u8 {
        (self.0 - 1) % 10
    }

    /// Branch index, 0 (子) to 11 (亥).
    pub const fn branch(self) -> u8 {
        (self.0 - 1) % 12
    }

    pub const fn zodiac(self) -> Zodiac {
        Zodiac::ALL[self.branch() as usize]
    }
}

impl TryFrom<u8> for Sexagenary {
    type Error = ParseError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number)
    }
}

impl From<Sexagenary> for u8 {
    fn from(s: Sexagenary) -> Self {
        s.0
    }
}

impl std::fmt::Display for Sexagenary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}",
            STEMS[self.stem() as usize],
            BRANCHES[self.branch() as usize]
        )
    }
}

/// Zodiac animal of an earthly branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Zodiac {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

impl Zodiac {
    const ALL: [Self; 12] = [
        Self::Rat,
        Self::Ox,
        Self::Tiger,
        Self::Rabbit,
        Self::Dragon,
        Self::Snake,
        Self::Horse,
        Self::Goat,
        Self::Monkey,
        Self::Rooster,
        Self::Dog,
        Self::Pig,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_components() {
        assert!(LunisolarDate::new(2023, 2, 30, true).is_ok());
        assert!(matches!(
            LunisolarDate::new(2023, 13, 1, false),
            Err(ParseError::InvalidMonth(13))
        ));
        assert!(matches!(
            LunisolarDate::new(2023, 1, 31, false),
            Err(ParseError::InvalidLunarDay(31))
        ));
        assert!(matches!(
            LunisolarDate::new(0, 1, 1, false),
            Err(ParseError::InvalidYear(0))
        ));
    }

    #[test]
    fn test_display_and_parse() {
        let common = LunisolarDate::new(2023, 5, 1, false).unwrap();
        let leap = LunisolarDate::new(2023, 2, 1, true).unwrap();
        assert_eq!(common.to_string(), "2023-05-01");
        assert_eq!(leap.to_string(), "2023-L02-01");
        assert_eq!("2023-L02-01".parse::<LunisolarDate>().unwrap(), leap);
        assert_eq!(" 2023-05-01 ".parse::<LunisolarDate>().unwrap(), common);
        assert!(matches!(
            "2023-X02-01".parse::<LunisolarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_leap_month_orders_after_its_common_month() {
        let common_end = LunisolarDate::new(2023, 2, 29, false).unwrap();
        let leap_start = LunisolarDate::new(2023, 2, 1, true).unwrap();
        let next_common = LunisolarDate::new(2023, 3, 1, false).unwrap();
        assert!(common_end < leap_start);
        assert!(leap_start < next_common);
    }

    #[test]
    fn test_serde_field_names() {
        let leap = LunisolarDate::new(2023, 2, 1, true).unwrap();
        let json = serde_json::to_value(leap).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"year": 2023, "month": 2, "isLeapMonth": true, "day": 1})
        );
        let back: LunisolarDate = serde_json::from_value(json).unwrap();
        assert_eq!(back, leap);
        assert!(
            serde_json::from_str::<LunisolarDate>(
                r#"{"year":2023,"month":2,"isLeapMonth":false,"day":31}"#
            )
            .is_err()
        );
    }

    #[test]
    fn test_sexagenary_years() {
        let cases = [
            (1984, 1, "甲子", Zodiac::Rat),
            (2000, 17, "庚辰", Zodiac::Dragon),
            (2023, 40, "癸卯", Zodiac::Rabbit),
            (2043, 60, "癸亥", Zodiac::Pig),
            (1900, 37, "庚子", Zodiac::Rat),
        ];
        for (year, number, name, zodiac) in cases {
            let s = Sexagenary::for_year(year);
            assert_eq!(s.number(), number, "{year}");
            assert_eq!(s.to_string(), name, "{year}");
            assert_eq!(s.zodiac(), zodiac, "{year}");
        }
    }

    #[test]
    fn test_sexagenary_rejects_out_of_cycle_numbers() {
        assert_eq!(Sexagenary::new(60).unwrap().to_string(), "癸亥");
        assert_eq!(Sexagenary::new(0), Err(ParseError::InvalidSexagenary(0)));
        assert_eq!(serde_json::to_string(&Sexagenary::for_year(2023)).unwrap(), "40");
        assert_eq!(serde_json::from_str::<Sexagenary>("1").unwrap(), Sexagenary::for_year(1984));
        assert!(serde_json::from_str::<Sexagenary>("0").is_err());
        assert!(serde_json::from_str::<Sexagenary>("61").is_err());
    }

    #[test]
    fn test_zodiac_display() {
        assert_eq!(Zodiac::Rooster.to_string(), "Rooster");
    }
}
