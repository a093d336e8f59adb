//! Table-driven Korean lunisolar dates for home-screen widgets.
//!
//! [`ConversionEngine`] maps Gregorian dates onto the lunisolar calendar and
//! back for lunar years 1900-2100. [`RefreshScheduler`] decides when the
//! displayed date goes stale and re-runs the conversion at local midnight.

mod clock;
mod config;
mod consts;
mod engine;
mod error;
mod gregorian;
mod lunisolar;
mod prelude;
mod preferences;
mod range;
mod scheduler;
mod table;
mod types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::SchedulerConfig;
pub use consts::*;
pub use engine::ConversionEngine;
pub use error::{
    ConfigError, ConversionError, ParseError, PreferenceError, SchedulerError,
    SchedulerUnavailable, TableError,
};
pub use gregorian::GregorianDate;
pub use lunisolar::{LunisolarDate, Sexagenary, Zodiac};
pub use preferences::{
    DARK_MODE_KEY, EmptyStore, LANGUAGE_KEY, LEGACY_DARK_MODE_KEY, LEGACY_LANGUAGE_KEY, Language,
    PreferenceResolver, PreferenceStore, Preferences, Theme,
};
pub use range::{DateRange, Days, RangeError};
pub use scheduler::{
    Precision, Refresh, RefreshDeadline, RefreshReason, RefreshScheduler, SchedulerState, Timer,
    next_refresh,
};
pub use table::{CalendarTable, MonthSlot, YearRecord};
pub use types::{Day, LunarDay, Month, Year, is_leap_year};

/// Converts a Gregorian date using the built-in table.
///
/// # Errors
/// Returns `ConversionError::InvalidDate` if the components do not form a
/// real date and `ConversionError::DateOutOfRange` outside
/// 1900-01-31..=2101-01-28.
pub fn solar_to_lunar(year: u16, month: u8, day: u8) -> Result<LunisolarDate, ConversionError> {
    ConversionEngine::new()?.solar_to_lunar(&GregorianDate::new(year, month, day)?)
}

/// Converts a lunisolar date back to the Gregorian calendar using the
/// built-in table.
///
/// # Errors
/// As [`ConversionEngine::lunar_to_solar`], plus `ConversionError::InvalidDate`
/// for a month outside 1-12 or a day outside 1-30.
pub fn lunar_to_solar(
    year: u16,
    month: u8,
    day: u8,
    is_leap_month: bool,
) -> Result<GregorianDate, ConversionError> {
    ConversionEngine::new()?.lunar_to_solar(&LunisolarDate::new(year, month, day, is_leap_month)?)
}

/// Lunar date of the host's current local day.
///
/// # Errors
/// Returns `ConversionError::DateOutOfRange` once the system clock leaves
/// the supported range.
pub fn today_lunar() -> Result<LunisolarDate, ConversionError> {
    ConversionEngine::new()?.today(&SystemClock)
}
