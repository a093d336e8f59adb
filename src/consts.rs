/// Maximum valid Gregorian year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

/// Marker written before the month number of a leap month (`2023-L02-01`)
pub const LEAP_MARKER: char = 'L';

/// Length of a short ("small") lunar month
pub const SHORT_LUNAR_MONTH: u8 = 29;
/// Length of a long ("big") lunar month
pub const LONG_LUNAR_MONTH: u8 = 30;

/// Common months in every lunisolar year
pub const LUNAR_MONTHS_PER_YEAR: u8 = 12;

/// First lunisolar year covered by the built-in table
pub const MIN_LUNAR_YEAR: u16 = 1900;
/// Last lunisolar year covered by the built-in table
pub const MAX_LUNAR_YEAR: u16 = 2100;

/// Seconds past local midnight at which the widget refreshes
pub const DEFAULT_REFRESH_OFFSET_SECS: u32 = 5;
/// Upper bound for a configured refresh offset
pub const MAX_REFRESH_OFFSET_SECS: u32 = 3600;

/// Length of the sexagenary (stem-branch) cycle
pub const SEXAGENARY_CYCLE: u8 = 60;
