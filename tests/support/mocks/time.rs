// tests/support/mocks/time.rs
use article_desk::application::ports::time::Clock;
use chrono::{DateTime, TimeZone, Utc};

/// Deterministic timestamp for tests.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

#[derive(Clone, Default)]
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}
