use crate::{GregorianDate, prelude::*};

/// An inclusive span of Gregorian days.
/// The start date must be less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateRange {
    start: GregorianDate,
    end:   GregorianDate,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: GregorianDate, end: GregorianDate },
}

impl DateRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: GregorianDate, end: GregorianDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the first day of the range
    pub const fn start(&self) -> GregorianDate {
        self.start
    }

    /// Returns the last day of the range (inclusive)
    pub const fn end(&self) -> GregorianDate {
        self.end
    }

    /// Checks if the range contains a given date
    pub fn contains(&self, date: &GregorianDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Number of days in the range, counting both ends.
    pub fn len_days(&self) -> u32 {
        // start <= end is guaranteed by construction
        self.start.days_until(&self.end).unsigned_abs() + 1
    }

    /// Iterates every day from start to end.
    pub const fn days(&self) -> Days {
        Days {
            next: Some(self.start),
            end:  self.end,
        }
    }
}

/// Iterator over the days of a [`DateRange`].
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<GregorianDate>,
    end:  GregorianDate,
}

impl Iterator for Days {
    type Item = GregorianDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if current < self.end { current.succ() } else { None };
        Some(current)
    }
}

impl IntoIterator for DateRange {
    type Item = GregorianDate;
    type IntoIter = Days;

    fn into_iter(self) -> Self::IntoIter {
        self.days()
    }
}
