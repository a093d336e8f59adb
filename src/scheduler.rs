//! Midnight refresh scheduling.
//!
//! The displayed lunar date goes stale exactly when the local date changes.
//! [`RefreshScheduler`] keeps one pending deadline (next local midnight plus a
//! small offset), hands it to a host [`Timer`], and re-arms itself every time
//! the deadline fires because host timers are not assumed to repeat.
//!
//! State transitions happen under a single lock. Timer registration and
//! listener callbacks run after the lock is released; a generation counter
//! lets the last transition win if several callers race through the timer.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::clock::Clock;
use crate::config::SchedulerConfig;
use crate::engine::ConversionEngine;
use crate::{
    ConversionError, GregorianDate, LunisolarDate, SchedulerError, SchedulerUnavailable,
    prelude::*,
};

/// How punctually the host timer should deliver a deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Precision {
    Exact,
    Inexact,
}

/// The instant at which the displayed date must be recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{at} ({precision})")]
pub struct RefreshDeadline {
    at:        DateTime<Utc>,
    local_day: NaiveDate,
    precision: Precision,
}

impl RefreshDeadline {
    pub const fn at(&self) -> DateTime<Utc> {
        self.at
    }

    /// Local date that begins just before the deadline.
    pub const fn local_day(&self) -> NaiveDate {
        self.local_day
    }

    pub const fn precision(&self) -> Precision {
        self.precision
    }

    #[must_use]
    pub const fn with_precision(self, precision: Precision) -> Self {
        Self { precision, ..self }
    }

    /// Whether `now` has reached the deadline.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        now >= self.at
    }
}

/// Next local midnight after `now`, plus `offset`.
///
/// A midnight that falls into a DST gap rolls forward in half-hour steps to
/// the first local time that exists; an ambiguous one takes the earlier
/// instant.
///
/// # Errors
/// Returns `SchedulerError::NoNextMidnight` at the end of the representable
/// calendar.
pub fn next_refresh<Tz: TimeZone>(
    now: &DateTime<Tz>,
    offset: Duration,
) -> Result<RefreshDeadline, SchedulerError> {
    let no_midnight = || SchedulerError::NoNextMidnight(now.naive_local().to_string());
    let local_day = now.date_naive().succ_opt().ok_or_else(no_midnight)?;
    let target = local_day.and_time(NaiveTime::MIN) + offset;
    let tz = now.timezone();

    let at = (0..=4)
        .find_map(|step| {
            tz.from_local_datetime(&(target + Duration::minutes(30 * step)))
                .earliest()
        })
        .ok_or_else(no_midnight)?;

    Ok(RefreshDeadline {
        at: at.with_timezone(&Utc),
        local_day,
        precision: Precision::Exact,
    })
}

/// Host timer facility, e.g. a platform alarm service.
///
/// A timer holds at most one registration: `schedule_at` replaces any
/// earlier one and `cancel` clears it. The host must call
/// [`RefreshScheduler::fire`] at or after the registered instant; early,
/// late and duplicate calls are tolerated.
pub trait Timer: Send + Sync {
    /// # Errors
    /// Returns `SchedulerUnavailable` if the deadline cannot be registered
    /// with the requested precision.
    fn schedule_at(&self, deadline: &RefreshDeadline) -> Result<(), SchedulerUnavailable>;

    fn cancel(&self);
}

/// Scheduler state: no pending refresh, or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Armed(RefreshDeadline),
}

/// Why the pipeline re-ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum RefreshReason {
    Enabled,
    Deadline,
    LanguageChanged,
    ThemeChanged,
    ClockChanged,
    Manual,
}

/// Result of one pipeline run, handed to every listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refresh {
    pub reason: RefreshReason,
    /// Local date read from the clock, if it was representable.
    pub solar:  Option<GregorianDate>,
    /// Lunar date to display; on error the consumer shows its fallback.
    pub lunar:  Result<LunisolarDate, ConversionError>,
}

type Listener = Arc<dyn Fn(&Refresh) + Send + Sync>;

#[derive(Debug)]
struct Inner {
    state:      SchedulerState,
    generation: u64,
}

/// Idle/Armed refresh state machine driving the conversion pipeline.
pub struct RefreshScheduler<C: Clock, T: Timer> {
    clock:     C,
    timer:     T,
    engine:    ConversionEngine,
    config:    SchedulerConfig,
    inner:     Mutex<Inner>,
    listeners: Mutex<Vec<Listener>>,
}

impl<C: Clock, T: Timer> RefreshScheduler<C, T> {
    pub const fn new(clock: C, timer: T, engine: ConversionEngine, config: SchedulerConfig) -> Self {
        Self {
            clock,
            timer,
            engine,
            config,
            inner: Mutex::new(Inner {
                state:      SchedulerState::Idle,
                generation: 0,
            }),
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Scheduler over the built-in table with default configuration.
    ///
    /// # Errors
    /// Returns `ConversionError::Table` if the built-in table is invalid.
    pub fn with_defaults(clock: C, timer: T) -> Result<Self, ConversionError> {
        Ok(Self::new(
            clock,
            timer,
            ConversionEngine::new()?,
            SchedulerConfig::default(),
        ))
    }

    /// Registers a consumer that re-renders on every refresh.
    pub fn on_deadline(&self, listener: impl Fn(&Refresh) + Send + Sync + 'static) {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(listener));
    }

    pub fn state(&self) -> SchedulerState {
        self.lock_inner().state
    }

    /// Pending deadline, if armed.
    pub fn deadline(&self) -> Option<RefreshDeadline> {
        match self.state() {
            SchedulerState::Armed(deadline) => Some(deadline),
            SchedulerState::Idle => None,
        }
    }

    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Arms (or re-arms) the next midnight refresh and runs the pipeline
    /// once. Also the right response to a clock or time zone change.
    ///
    /// Returns the deadline that ended up armed, or `None` if a concurrent
    /// [`RefreshScheduler::disable`] committed after this call armed.
    ///
    /// # Errors
    /// Returns `SchedulerError::NoNextMidnight` if the clock is at the end of
    /// the calendar; the state is left unchanged.
    pub fn enable(&self) -> Result<Option<RefreshDeadline>, SchedulerError> {
        let deadline = self.requested_deadline()?;
        {
            let mut inner = self.lock_inner();
            inner.generation += 1;
            inner.state = SchedulerState::Armed(deadline);
        }
        let armed = self.sync_timer();
        match armed {
            Some(deadline) => tracing::info!(%deadline, "refresh scheduler enabled"),
            None => tracing::info!("refresh scheduler disabled while enabling"),
        }

        self.notify(RefreshReason::Enabled);
        Ok(armed)
    }

    /// Handles delivery of the pending deadline: re-arms for the following
    /// midnight, then recomputes from the current clock.
    ///
    /// Returns `None` when idle, so a delivery that arrives after
    /// [`RefreshScheduler::disable`] does nothing.
    ///
    /// # Errors
    /// Returns `SchedulerError::NoNextMidnight` if the clock is at the end of
    /// the calendar.
    pub fn fire(&self) -> Result<Option<Refresh>, SchedulerError> {
        let next = self.requested_deadline()?;
        {
            let mut inner = self.lock_inner();
            if inner.state == SchedulerState::Idle {
                tracing::debug!("refresh deadline delivered while idle, ignoring");
                return Ok(None);
            }
            inner.generation += 1;
            inner.state = SchedulerState::Armed(next);
        }
        self.sync_timer();

        Ok(Some(self.notify(RefreshReason::Deadline)))
    }

    /// Cancels the pending deadline. Returns it, if there was one.
    pub fn disable(&self) -> Option<RefreshDeadline> {
        let previous = {
            let mut inner = self.lock_inner();
            inner.generation += 1;
            std::mem::replace(&mut inner.state, SchedulerState::Idle)
        };
        self.sync_timer();
        tracing::info!("refresh scheduler disabled");

        match previous {
            SchedulerState::Armed(deadline) => Some(deadline),
            SchedulerState::Idle => None,
        }
    }

    /// Re-runs the pipeline immediately, e.g. after a language or theme
    /// change. The pending deadline is left untouched.
    pub fn invalidate(&self, reason: RefreshReason) -> Refresh {
        self.notify(reason)
    }

    fn requested_deadline(&self) -> Result<RefreshDeadline, SchedulerError> {
        let precision = if self.config.prefer_exact {
            Precision::Exact
        } else {
            Precision::Inexact
        };
        Ok(next_refresh(&self.clock.now(), self.config.refresh_offset())?.with_precision(precision))
    }

    /// Brings the timer in line with the committed state. Retries until no
    /// other transition slipped in while the timer was being updated, then
    /// records the precision actually obtained.
    fn sync_timer(&self) -> Option<RefreshDeadline> {
        loop {
            let (state, generation) = {
                let inner = self.lock_inner();
                (inner.state, inner.generation)
            };

            let applied = match state {
                SchedulerState::Idle => {
                    self.timer.cancel();
                    SchedulerState::Idle
                },
                SchedulerState::Armed(deadline) => SchedulerState::Armed(self.register(deadline)),
            };

            let mut inner = self.lock_inner();
            if inner.generation == generation {
                inner.state = applied;
                return match applied {
                    SchedulerState::Armed(deadline) => Some(deadline),
                    SchedulerState::Idle => None,
                };
            }
        }
    }

    /// Registers `deadline`, falling back to inexact delivery when exact
    /// delivery is refused. A deadline the timer refuses outright stays
    /// armed; the next enable or clock-change notification re-registers it.
    fn register(&self, deadline: RefreshDeadline) -> RefreshDeadline {
        if deadline.precision == Precision::Exact {
            match self.timer.schedule_at(&deadline) {
                Ok(()) => {
                    tracing::debug!(%deadline, "refresh deadline armed");
                    return deadline;
                },
                Err(error) => {
                    tracing::warn!(%error, "exact refresh refused, falling back to inexact");
                },
            }
        }

        let inexact = deadline.with_precision(Precision::Inexact);
        match self.timer.schedule_at(&inexact) {
            Ok(()) => tracing::debug!(deadline = %inexact, "refresh deadline armed"),
            Err(error) => tracing::error!(%error, deadline = %inexact, "refresh deadline not registered"),
        }
        inexact
    }

    fn notify(&self, reason: RefreshReason) -> Refresh {
        let solar = self.clock.today().map_err(ConversionError::from);
        let refresh = Refresh {
            reason,
            solar: solar.as_ref().ok().copied(),
            lunar: solar.and_then(|date| self.engine.solar_to_lunar(&date)),
        };
        if let Err(error) = &refresh.lunar {
            tracing::warn!(%error, %reason, "lunar date unavailable");
        }

        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for listener in &listeners {
            listener(&refresh);
        }
        refresh
    }

    fn lock_inner(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<C: Clock + std::fmt::Debug, T: Timer + std::fmt::Debug> std::fmt::Debug for RefreshScheduler<C, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshScheduler")
            .field("clock", &self.clock)
            .field("timer", &self.timer)
            .field("config", &self.config)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}
