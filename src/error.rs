use crate::{GregorianDate, MAX_MONTH, MAX_YEAR, prelude::*};

/// Error produced when a date value fails validation or parsing.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(i64),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Invalid lunar day: {_0} (must be 1-30)")]
    InvalidLunarDay(u8),
    #[display(fmt = "Invalid sexagenary number: {_0} (must be 1-60)")]
    InvalidSexagenary(u8),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// Error type for conversions between the Gregorian and lunisolar calendars.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Gregorian date is outside the years covered by the table.
    #[error("Date {date} is outside the supported range {first}..={last}")]
    DateOutOfRange {
        date:  GregorianDate,
        first: GregorianDate,
        last:  GregorianDate,
    },

    /// Lunisolar year has no table record.
    #[error("Lunar year {0} is outside the supported table")]
    YearOutOfRange(u16),

    /// Leap flag set on a month that is not the leap month of its year.
    #[error("Lunar year {year} has no leap month {month}")]
    NotALeapMonth { year: u16, month: u8 },

    /// Day number exceeds the length of the lunar month.
    #[error("Lunar month {year}-{month:02} has {len} days, got day {day}")]
    DayOutOfMonth { year: u16, month: u8, day: u8, len: u8 },

    /// Input components do not form a valid date.
    #[error(transparent)]
    InvalidDate(#[from] ParseError),

    /// The calendar table failed validation and cannot serve conversions.
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Internal consistency failure of a calendar table, detected at load.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// Table holds no records.
    #[error("Calendar table is empty")]
    Empty,

    /// A month is neither 29 nor 30 days long.
    #[error("Lunar year {year}: month slot {slot} has {len} days")]
    MonthLength { year: u16, slot: usize, len: u8 },

    /// Leap month number outside 1-11; month 12 is never repeated.
    #[error("Lunar year {year}: invalid leap month {month}")]
    LeapMonth { year: u16, month: u8 },

    /// Number of month slots disagrees with the leap month.
    #[error("Lunar year {year}: expected {expected} months, found {found}")]
    MonthCount { year: u16, expected: usize, found: usize },

    /// Records are not consecutive years.
    #[error("Calendar table jumps from year {previous} to {next}")]
    NotContiguous { previous: u16, next: u16 },

    /// A record's first day is not a valid Gregorian date.
    #[error("Lunar year {year}: invalid first day ({source})")]
    FirstDay { year: u16, source: ParseError },

    /// Month lengths do not fill the span up to the next year's first day.
    #[error("Lunar year {year}: months sum to {months} days but the year spans {span}")]
    Span { year: u16, months: i32, span: i32 },
}

/// Raised by a [`Timer`](crate::Timer) that cannot honour a deadline,
/// e.g. when exact alarms are not permitted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Scheduler unavailable: {reason}")]
pub struct SchedulerUnavailable {
    pub reason: String,
}

impl SchedulerUnavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Error type for refresh scheduling.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchedulerError {
    /// Wall clock is at the edge of the representable calendar.
    #[error("No local midnight follows {0}")]
    NoNextMidnight(String),
}

/// Error type for loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Stored preference value that names no known option.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreferenceError {
    #[error("Unknown language code: {0:?}")]
    UnknownLanguage(String),

    #[error("Unknown theme: {0:?}")]
    UnknownTheme(String),
}
