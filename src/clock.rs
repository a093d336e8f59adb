//! Wall-clock abstraction.
//!
//! The conversion engine only ever needs "today" as a calendar date; the
//! refresh scheduler additionally needs the current instant and the local
//! time zone to find the next midnight. Hosts plug in their own clock, or use
//! [`SystemClock`].

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Duration, FixedOffset, Local, TimeZone};

use crate::{GregorianDate, ParseError};

/// Source of the current local time.
pub trait Clock: Send + Sync {
    type Tz: TimeZone;

    fn now(&self) -> DateTime<Self::Tz>;

    /// Current local calendar date.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the clock reads outside years
    /// 1-9999.
    fn today(&self) -> Result<GregorianDate, ParseError> {
        GregorianDate::try_from(self.now().date_naive())
    }
}

/// The host's clock in its local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    type Tz = Local;

    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock that only moves when told to. Used to drive the scheduler
/// deterministically, e.g. from a host that replays alarm deliveries.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<FixedOffset>>,
}

impl ManualClock {
    pub const fn new(now: DateTime<FixedOffset>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// # Errors
    /// Returns `chrono::ParseError` if `s` is not an RFC 3339 timestamp.
    pub fn from_rfc3339(s: &str) -> Result<Self, chrono::ParseError> {
        DateTime::parse_from_rfc3339(s).map(Self::new)
    }

    pub fn set(&self, now: DateTime<FixedOffset>) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = now;
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }
}

impl Clock for ManualClock {
    type Tz = FixedOffset;

    fn now(&self) -> DateTime<FixedOffset> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
