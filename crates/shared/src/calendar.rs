use chrono::{DateTime, FixedOffset, Local, TimeZone, Timelike, Utc};
use tracing::warn;

/// Calendar comparisons over millisecond timestamps.
pub trait DayCalendar {
    fn same_day(&self, a_millis: i64, b_millis: i64) -> bool;
    fn same_minute(&self, a_millis: i64, b_millis: i64) -> bool;
}

impl<C: DayCalendar + ?Sized> DayCalendar for &C {
    fn same_day(&self, a_millis: i64, b_millis: i64) -> bool {
        (**self).same_day(a_millis, b_millis)
    }

    fn same_minute(&self, a_millis: i64, b_millis: i64) -> bool {
        (**self).same_minute(a_millis, b_millis)
    }
}

/// Compares timestamps as wall-clock dates in a fixed time zone.
#[derive(Debug, Clone)]
pub struct ZonedCalendar<Tz: TimeZone> {
    tz: Tz,
}

impl<Tz: TimeZone> ZonedCalendar<Tz> {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn time_zone(&self) -> &Tz {
        &self.tz
    }

    fn local(&self, millis: i64) -> Option<DateTime<Tz>> {
        let local =
            DateTime::<Utc>::from_timestamp_millis(millis).map(|utc| utc.with_timezone(&self.tz));
        if local.is_none() {
            warn!(millis, "timestamp outside the representable calendar range");
        }
        local
    }
}

impl ZonedCalendar<Utc> {
    pub fn utc() -> Self {
        Self::new(Utc)
    }
}

impl ZonedCalendar<Local> {
    pub fn local_zone() -> Self {
        Self::new(Local)
    }
}

impl ZonedCalendar<FixedOffset> {
    /// `None` when the offset is a day or more away from UTC.
    pub fn with_offset_minutes(minutes: i32) -> Option<Self> {
        FixedOffset::east_opt(minutes.checked_mul(60)?).map(Self::new)
    }
}

impl<Tz: TimeZone> DayCalendar for ZonedCalendar<Tz> {
    fn same_day(&self, a_millis: i64, b_millis: i64) -> bool {
        match (self.local(a_millis), self.local(b_millis)) {
            (Some(a), Some(b)) => a.date_naive() == b.date_naive(),
            _ => false,
        }
    }

    fn same_minute(&self, a_millis: i64, b_millis: i64) -> bool {
        match (self.local(a_millis), self.local(b_millis)) {
            (Some(a), Some(b)) => {
                a.date_naive() == b.date_naive() && a.hour() == b.hour() && a.minute() == b.minute()
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "tests/calendar_tests.rs"]
mod tests;
