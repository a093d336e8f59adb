//! Per-year lunisolar calendar table.
//!
//! Leap-month placement follows new-moon and solar-term timing that cannot
//! be reproduced exactly without an ephemeris, so the calendar is baked in
//! as data ([`data::YEARS`]) and checked for internal consistency once, the
//! first time it is used.

mod data;

use std::sync::OnceLock;

use crate::consts::{LONG_LUNAR_MONTH, LUNAR_MONTHS_PER_YEAR, SHORT_LUNAR_MONTH};
use crate::{ConversionError, DateRange, GregorianDate, TableError};

const MAX_SLOTS: usize = LUNAR_MONTHS_PER_YEAR as usize + 1;

/// One lunisolar year: month lengths in calendar order, leap month position
/// and the Gregorian date of New Year's day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRecord {
    year:       u16,
    lengths:    [u8; MAX_SLOTS],
    slots:      u8,
    leap_month: u8,
    first_day:  (u16, u8, u8),
}

/// A month position inside a [`YearRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthSlot {
    pub month:   u8,
    pub is_leap: bool,
    pub days:    u8,
}

impl YearRecord {
    /// Builds a record from explicit month lengths. Only the first `slots`
    /// entries of `lengths` are used.
    pub const fn new(
        year: u16,
        lengths: [u8; MAX_SLOTS],
        slots: u8,
        leap_month: u8,
        first_day: (u16, u8, u8),
    ) -> Self {
        Self {
            year,
            lengths,
            slots,
            leap_month,
            first_day,
        }
    }

    /// Unpacks the 17-bit encoding used by [`data::YEARS`].
    pub const fn from_packed(year: u16, packed: u32, first_day: (u16, u8, u8)) -> Self {
        let leap_month = (packed & 0xf) as u8;
        let leap_days = if packed & 0x1_0000 == 0 {
            SHORT_LUNAR_MONTH
        } else {
            LONG_LUNAR_MONTH
        };

        let mut lengths = [0; MAX_SLOTS];
        let mut slots = 0;
        let mut month = 1;
        while month <= LUNAR_MONTHS_PER_YEAR {
            lengths[slots] = if packed & (0x1_0000 >> month) == 0 {
                SHORT_LUNAR_MONTH
            } else {
                LONG_LUNAR_MONTH
            };
            slots += 1;
            if month == leap_month {
                lengths[slots] = leap_days;
                slots += 1;
            }
            month += 1;
        }

        Self {
            year,
            lengths,
            slots: slots as u8,
            leap_month,
            first_day,
        }
    }

    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Number of the month that is repeated as a leap month, 0 when none.
    pub const fn leap_month(&self) -> u8 {
        self.leap_month
    }

    pub const fn has_leap_month(&self) -> bool {
        self.leap_month != 0
    }

    /// Zero-based slot holding the leap month. A leap month follows the
    /// common month of the same number, so it never occupies slot 0.
    pub const fn leap_slot(&self) -> Option<usize> {
        if self.has_leap_month() {
            Some(self.leap_month as usize)
        } else {
            None
        }
    }

    /// Month lengths in calendar order, 12 or 13 entries.
    pub fn month_lengths(&self) -> &[u8] {
        &self.lengths[..usize::from(self.slots).min(MAX_SLOTS)]
    }

    /// Months in calendar order with their number and leap flag.
    pub fn months(&self) -> impl Iterator<Item = MonthSlot> + '_ {
        let leap_slot = self.leap_slot();
        self.month_lengths()
            .iter()
            .enumerate()
            .map(move |(slot, &days)| {
                let (month, is_leap) = match leap_slot {
                    Some(leap) if slot == leap => (self.leap_month, true),
                    Some(leap) if slot > leap => (slot as u8, false),
                    _ => (slot as u8 + 1, false),
                };
                MonthSlot {
                    month,
                    is_leap,
                    days,
                }
            })
    }

    /// Length of a month, or `None` if the year has no such month.
    pub fn month_days(&self, month: u8, is_leap: bool) -> Option<u8> {
        self.months()
            .find(|slot| slot.month == month && slot.is_leap == is_leap)
            .map(|slot| slot.days)
    }

    /// Length of the leap month, 0 when the year has none.
    pub fn leap_month_days(&self) -> u8 {
        self.leap_slot()
            .and_then(|slot| self.month_lengths().get(slot).copied())
            .unwrap_or(0)
    }

    /// Days in the lunar year (353-355 common, 383-385 with a leap month).
    pub fn total_days(&self) -> u16 {
        self.month_lengths().iter().map(|&d| u16::from(d)).sum()
    }

    /// Gregorian date of the first day of the year.
    ///
    /// # Errors
    /// Returns `ParseError` if the stored date is not a real Gregorian date.
    pub fn first_day(&self) -> Result<GregorianDate, crate::ParseError> {
        GregorianDate::try_from(self.first_day)
    }

    fn check_months(&self) -> Result<(), TableError> {
        let year = self.year;
        // a leap month repeats the month before it, and the year ends on a
        // common twelfth month
        if self.leap_month >= LUNAR_MONTHS_PER_YEAR {
            return Err(TableError::LeapMonth {
                year,
                month: self.leap_month,
            });
        }

        let expected = usize::from(LUNAR_MONTHS_PER_YEAR) + usize::from(self.has_leap_month());
        let found = usize::from(self.slots);
        if found != expected {
            return Err(TableError::MonthCount {
                year,
                expected,
                found,
            });
        }

        for (slot, &len) in self.month_lengths().iter().enumerate() {
            if len != SHORT_LUNAR_MONTH && len != LONG_LUNAR_MONTH {
                return Err(TableError::MonthLength { year, slot, len });
            }
        }
        Ok(())
    }
}

/// A validated, read-only calendar table.
///
/// Holds the records plus the day number of every New Year's day, so
/// locating the lunar year of a date is a binary search.
#[derive(Debug, Clone)]
pub struct CalendarTable {
    records: &'static [YearRecord],
    /// `records.len() + 1` entries; the last is the day after coverage ends.
    starts:  Vec<i32>,
    range:   DateRange,
}

static KOREAN: OnceLock<Result<CalendarTable, TableError>> = OnceLock::new();

impl CalendarTable {
    /// Validates `records`, which must cover consecutive lunar years, and
    /// `end`, the Gregorian day right after the last covered day.
    ///
    /// # Errors
    /// Returns the first `TableError` found.
    pub fn new(records: &'static [YearRecord], end: (u16, u8, u8)) -> Result<Self, TableError> {
        let (first, last) = match records {
            [] => return Err(TableError::Empty),
            [first, .., last] => (first, last),
            [only] => (only, only),
        };

        for pair in records.windows(2) {
            if pair[0].year.checked_add(1) != Some(pair[1].year) {
                return Err(TableError::NotContiguous {
                    previous: pair[0].year,
                    next:     pair[1].year,
                });
            }
        }

        let mut starts = Vec::with_capacity(records.len() + 1);
        for record in records {
            record.check_months()?;
            let start = record.first_day().map_err(|source| TableError::FirstDay {
                year: record.year,
                source,
            })?;
            starts.push(start.day_number());
        }

        let after_last = |source| TableError::FirstDay {
            year: last.year.saturating_add(1),
            source,
        };
        let end = GregorianDate::try_from(end).map_err(after_last)?;
        starts.push(end.day_number());

        for (record, span) in records.iter().zip(starts.windows(2)) {
            let months = i32::from(record.total_days());
            let span = span[1] - span[0];
            if months != span {
                return Err(TableError::Span {
                    year: record.year,
                    months,
                    span,
                });
            }
        }

        // spans matched non-empty month lists, so coverage is at least one year long
        let first_day = GregorianDate::from_day_number(starts[0]).map_err(after_last)?;
        let last_day = GregorianDate::from_day_number(end.day_number() - 1).map_err(after_last)?;
        let range = DateRange::new(first_day, last_day).map_err(|_| TableError::Span {
            year:   first.year,
            months: i32::from(first.total_days()),
            span:   first_day.days_until(&end),
        })?;

        Ok(Self {
            records,
            starts,
            range,
        })
    }

    /// The built-in Korean lunisolar table, validated on first use.
    ///
    /// # Errors
    /// Returns the validation failure on every call if the built-in data is
    /// inconsistent; no conversion may be served in that case.
    pub fn korean() -> Result<&'static Self, TableError> {
        let table = KOREAN.get_or_init(|| {
            let table = Self::new(&data::YEARS, data::TABLE_END);
            match &table {
                Ok(t) => tracing::debug!(range = %t.range, years = t.records.len(), "calendar table validated"),
                Err(e) => tracing::error!(error = %e, "calendar table failed validation"),
            }
            table
        });
        table.as_ref().map_err(Clone::clone)
    }

    /// All records in year order.
    pub const fn records(&self) -> &'static [YearRecord] {
        self.records
    }

    /// First lunar year in the table.
    pub fn first_year(&self) -> u16 {
        self.records.first().map_or(0, YearRecord::year)
    }

    /// Last lunar year in the table.
    pub fn last_year(&self) -> u16 {
        self.records.last().map_or(0, YearRecord::year)
    }

    /// Gregorian days the table can convert.
    pub const fn supported_range(&self) -> DateRange {
        self.range
    }

    /// Record for lunar `year`.
    ///
    /// # Errors
    /// Returns `ConversionError::YearOutOfRange` outside the table.
    pub fn lookup(&self, year: u16) -> Result<&'static YearRecord, ConversionError> {
        let index = year
            .checked_sub(self.first_year())
            .map(usize::from)
            .ok_or(ConversionError::YearOutOfRange(year))?;
        self.records
            .get(index)
            .ok_or(ConversionError::YearOutOfRange(year))
    }

    /// Day number of New Year's day of the record at `index`.
    pub(crate) fn start_of(&self, index: usize) -> Option<i32> {
        self.starts.get(index).copied()
    }

    /// Index of the first record (for [`CalendarTable::start_of`]) of `year`.
    pub(crate) fn index_of(&self, year: u16) -> Option<usize> {
        let index = usize::from(year.checked_sub(self.first_year())?);
        (index < self.records.len()).then_some(index)
    }

    /// Lunar year containing `date` and the day offset from its New Year.
    /// A year's first day belongs to that year.
    ///
    /// # Errors
    /// Returns `ConversionError::DateOutOfRange` outside
    /// [`CalendarTable::supported_range`].
    pub fn locate(&self, date: &GregorianDate) -> Result<(&'static YearRecord, u16), ConversionError> {
        let out_of_range = || ConversionError::DateOutOfRange {
            date:  *date,
            first: self.range.start(),
            last:  self.range.end(),
        };
        if !self.range.contains(date) {
            return Err(out_of_range());
        }

        let day = date.day_number();
        let index = self
            .starts
            .partition_point(|&start| start <= day)
            .checked_sub(1)
            .ok_or_else(out_of_range)?;
        let record = self.records.get(index).ok_or_else(out_of_range)?;
        let offset = u16::try_from(day - self.starts[index]).map_err(|_| out_of_range())?;
        Ok((record, offset))
    }
}
