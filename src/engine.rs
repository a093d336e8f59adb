//! Conversion between Gregorian and lunisolar dates.

use crate::clock::Clock;
use crate::table::{CalendarTable, YearRecord};
use crate::{ConversionError, GregorianDate, LunisolarDate};

/// Stateless converter over a validated [`CalendarTable`].
///
/// Cheap to copy and safe to share between threads; the table is never
/// mutated.
#[derive(Debug, Clone, Copy)]
pub struct ConversionEngine {
    table: &'static CalendarTable,
}

impl ConversionEngine {
    /// Engine over the built-in Korean table.
    ///
    /// # Errors
    /// Returns `ConversionError::Table` if the built-in table failed
    /// validation.
    pub fn new() -> Result<Self, ConversionError> {
        Ok(Self::with_table(CalendarTable::korean()?))
    }

    pub const fn with_table(table: &'static CalendarTable) -> Self {
        Self { table }
    }

    pub const fn table(&self) -> &'static CalendarTable {
        self.table
    }

    /// Converts a Gregorian date to the lunisolar calendar.
    ///
    /// # Errors
    /// Returns `ConversionError::DateOutOfRange` outside the table's
    /// supported range.
    pub fn solar_to_lunar(&self, date: &GregorianDate) -> Result<LunisolarDate, ConversionError> {
        let (record, offset) = self.table.locate(date)?;

        let mut remaining = offset;
        for slot in record.months() {
            let days = u16::from(slot.days);
            if remaining < days {
                let day = u8::try_from(remaining + 1).unwrap_or(u8::MAX);
                return Ok(LunisolarDate::new(record.year(), slot.month, day, slot.is_leap)?);
            }
            remaining -= days;
        }

        // locate() only returns offsets within the year, which validation
        // proved equal to the sum of its months
        Err(ConversionError::DateOutOfRange {
            date:  *date,
            first: self.table.supported_range().start(),
            last:  self.table.supported_range().end(),
        })
    }

    /// Converts a lunisolar date back to the Gregorian calendar.
    ///
    /// # Errors
    /// Returns `ConversionError::YearOutOfRange` for years outside the table,
    /// `ConversionError::NotALeapMonth` when the leap flag names a month that
    /// is not repeated that year, and `ConversionError::DayOutOfMonth` for a
    /// 30th day of a 29-day month.
    pub fn lunar_to_solar(&self, date: &LunisolarDate) -> Result<GregorianDate, ConversionError> {
        let year = date.year();
        let record = self.table.lookup(year)?;
        let start = self
            .table
            .index_of(year)
            .and_then(|index| self.table.start_of(index))
            .ok_or(ConversionError::YearOutOfRange(year))?;

        let mut offset = 0i32;
        for slot in record.months() {
            if slot.month == date.month() && slot.is_leap == date.is_leap_month() {
                if date.day() > slot.days {
                    return Err(ConversionError::DayOutOfMonth {
                        year,
                        month: slot.month,
                        day: date.day(),
                        len: slot.days,
                    });
                }
                offset += i32::from(date.day()) - 1;
                return Ok(GregorianDate::from_day_number(start + offset)?);
            }
            offset += i32::from(slot.days);
        }

        Err(ConversionError::NotALeapMonth {
            year,
            month: date.month(),
        })
    }

    /// Record for lunar `year`.
    ///
    /// # Errors
    /// Returns `ConversionError::YearOutOfRange` outside the table.
    pub fn year(&self, year: u16) -> Result<&'static YearRecord, ConversionError> {
        self.table.lookup(year)
    }

    /// Number of the leap month of lunar `year`, 0 when there is none.
    ///
    /// # Errors
    /// Returns `ConversionError::YearOutOfRange` outside the table.
    pub fn leap_month(&self, year: u16) -> Result<u8, ConversionError> {
        Ok(self.table.lookup(year)?.leap_month())
    }

    /// Length of a lunar month, 29 or 30.
    ///
    /// # Errors
    /// Returns `ConversionError::YearOutOfRange` outside the table and
    /// `ConversionError::NotALeapMonth` for a leap month the year lacks.
    pub fn month_days(&self, year: u16, month: u8, is_leap: bool) -> Result<u8, ConversionError> {
        self.table
            .lookup(year)?
            .month_days(month, is_leap)
            .ok_or(ConversionError::NotALeapMonth { year, month })
    }

    /// Lunar date of the clock's current local day.
    ///
    /// # Errors
    /// Returns `ConversionError::InvalidDate` if the clock reads outside years
    /// 1-9999, otherwise as [`ConversionEngine::solar_to_lunar`].
    pub fn today<C: Clock + ?Sized>(&self, clock: &C) -> Result<LunisolarDate, ConversionError> {
        self.solar_to_lunar(&clock.today()?)
    }
}
