use moondate::{
    CalendarTable, Clock, ConversionEngine, ConversionError, GregorianDate, LunisolarDate, ManualClock,
    RefreshReason, RefreshScheduler, SchedulerConfig, SchedulerState, SchedulerUnavailable, Timer,
};
use std::sync::Mutex;

fn engine() -> ConversionEngine {
    ConversionEngine::new().unwrap()
}

fn solar(y: u16, m: u8, d: u8) -> GregorianDate {
    GregorianDate::new(y, m, d).unwrap()
}

fn lunar(y: u16, m: u8, d: u8, leap: bool) -> LunisolarDate {
    LunisolarDate::new(y, m, d, leap).unwrap()
}

#[test]
fn every_supported_day_round_trips() {
    let engine = engine();
    let range = CalendarTable::korean().unwrap().supported_range();
    assert_eq!(range.start(), solar(1900, 1, 31));
    assert_eq!(range.end(), solar(2101, 1, 28));

    let mut count = 0u32;
    for date in range {
        let converted = engine.solar_to_lunar(&date).unwrap();
        assert_eq!(engine.lunar_to_solar(&converted).unwrap(), date, "{date} -> {converted}");
        count += 1;
    }
    assert_eq!(count, range.len_days());
}

#[test]
fn consecutive_days_advance_without_gaps() {
    let engine = engine();
    let range = CalendarTable::korean().unwrap().supported_range();
    let mut previous = engine.solar_to_lunar(&range.start()).unwrap();
    assert_eq!(previous, lunar(1900, 1, 1, false));

    for date in range.days().skip(1) {
        let current = engine.solar_to_lunar(&date).unwrap();
        if current.day() == 1 {
            let month_len = engine
                .month_days(previous.year(), previous.month(), previous.is_leap_month())
                .unwrap();
            assert_eq!(previous.day(), month_len, "{date}: month ended early");
            let leap_follows = current.is_leap_month()
                && current.year() == previous.year()
                && current.month() == previous.month()
                && !previous.is_leap_month();
            let next_month = !current.is_leap_month()
                && current.year() == previous.year()
                && current.month() == previous.month() + 1;
            let new_year = !current.is_leap_month()
                && current.year() == previous.year() + 1
                && current.month() == 1
                && previous.month() == 12;
            assert!(leap_follows || next_month || new_year, "{previous} -> {current}");
        } else {
            assert_eq!(current.year(), previous.year());
            assert_eq!(current.month(), previous.month());
            assert_eq!(current.is_leap_month(), previous.is_leap_month());
            assert_eq!(current.day(), previous.day() + 1, "{date}");
        }
        previous = current;
    }
}

#[test]
fn year_2023_scenarios() {
    let engine = engine();
    assert_eq!(engine.solar_to_lunar(&solar(2023, 1, 22)), Ok(lunar(2023, 1, 1, false)));
    assert_eq!(engine.solar_to_lunar(&solar(2023, 3, 22)), Ok(lunar(2023, 2, 1, true)));
    assert_eq!(engine.solar_to_lunar(&solar(2023, 6, 18)), Ok(lunar(2023, 5, 1, false)));
    assert_eq!(engine.solar_to_lunar(&solar(2023, 7, 19)), Ok(lunar(2023, 6, 2, false)));
    assert_eq!(engine.solar_to_lunar(&solar(2024, 2, 9)), Ok(lunar(2023, 12, 30, false)));

    assert!(matches!(
        engine.lunar_to_solar(&lunar(2023, 5, 1, true)),
        Err(ConversionError::NotALeapMonth { year: 2023, month: 5 })
    ));
}

#[test]
fn range_boundaries() {
    let engine = engine();
    assert_eq!(
        engine.solar_to_lunar(&solar(1900, 1, 31)),
        Ok(lunar(1900, 1, 1, false))
    );
    assert_eq!(
        engine.solar_to_lunar(&solar(2101, 1, 28)),
        Ok(lunar(2100, 12, 29, false))
    );
    for date in [solar(1900, 1, 30), solar(2101, 1, 29), solar(1, 1, 1), solar(9999, 12, 31)] {
        assert!(matches!(
            engine.solar_to_lunar(&date),
            Err(ConversionError::DateOutOfRange { .. })
        ));
    }
}

#[test]
fn free_functions_match_engine() {
    assert_eq!(moondate::solar_to_lunar(2017, 7, 23), Ok(lunar(2017, 6, 1, true)));
    assert_eq!(moondate::lunar_to_solar(2017, 6, 1, true), Ok(solar(2017, 7, 23)));
}

#[test]
fn json_contract() {
    let value = serde_json::to_value(moondate::solar_to_lunar(2023, 3, 22).unwrap()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"year": 2023, "month": 2, "day": 1, "isLeapMonth": true})
    );
    assert_eq!(serde_json::to_value(solar(2023, 3, 22)).unwrap(), "2023-03-22");
}

#[derive(Default)]
struct SingleSlotTimer {
    slot: Mutex<Option<moondate::RefreshDeadline>>,
}

impl Timer for SingleSlotTimer {
    fn schedule_at(&self, deadline: &moondate::RefreshDeadline) -> Result<(), SchedulerUnavailable> {
        *self.slot.lock().unwrap() = Some(*deadline);
        Ok(())
    }

    fn cancel(&self) {
        *self.slot.lock().unwrap() = None;
    }
}

#[test]
fn widget_day_cycle() {
    let config = SchedulerConfig::from_toml_str("refresh_offset_secs = 5").unwrap();
    let scheduler = RefreshScheduler::new(
        ManualClock::from_rfc3339("2023-07-17T21:00:00+09:00").unwrap(),
        SingleSlotTimer::default(),
        engine(),
        config,
    );

    let rendered = std::sync::Arc::new(Mutex::new(Vec::new()));
    let sink = std::sync::Arc::clone(&rendered);
    scheduler.on_deadline(move |refresh| {
        sink.lock().unwrap().push(refresh.lunar.clone().unwrap().to_string());
    });

    let deadline = scheduler.enable().unwrap().unwrap();
    assert_eq!(deadline.at().to_rfc3339(), "2023-07-17T15:00:05+00:00");

    scheduler.clock().set(chrono::DateTime::parse_from_rfc3339("2023-07-18T00:00:05+09:00").unwrap());
    assert!(deadline.is_due(scheduler.clock().now().with_timezone(&chrono::Utc)));
    scheduler.fire().unwrap();

    scheduler.clock().set(chrono::DateTime::parse_from_rfc3339("2023-07-19T00:00:06+09:00").unwrap());
    scheduler.fire().unwrap();
    scheduler.invalidate(RefreshReason::ThemeChanged);

    assert_eq!(
        *rendered.lock().unwrap(),
        ["2023-05-30", "2023-06-01", "2023-06-02", "2023-06-02"]
    );

    scheduler.disable();
    assert_eq!(scheduler.state(), SchedulerState::Idle);
    assert_eq!(scheduler.fire(), Ok(None));
}
