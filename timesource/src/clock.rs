use time::OffsetDateTime;

/// Source of the current UTC time, swappable so tests can pin it.
pub trait Clock {
    fn now_utc(&self) -> OffsetDateTime;
}

#[derive(Clone)]
pub struct SystemClock {}

impl Clock for SystemClock {
    fn now_utc(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}
