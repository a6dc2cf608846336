//! Wall-clock snapshots for schedule evaluation.

use chrono::{Datelike, Local, Timelike};

/// The current time broken into the five cron-relevant components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSnapshot {
    /// 0–59.
    pub minute: u32,
    /// 0–23.
    pub hour: u32,
    /// 1–31.
    pub day_of_month: u32,
    /// 1–12.
    pub month: u32,
    /// Days since Sunday, 0–6.
    pub weekday: u32,
}

impl TimeSnapshot {
    pub fn from_datetime<Tz: chrono::TimeZone>(dt: &chrono::DateTime<Tz>) -> Self {
        Self {
            minute: dt.minute(),
            hour: dt.hour(),
            day_of_month: dt.day(),
            month: dt.month(),
            weekday: dt.weekday().num_days_from_sunday(),
        }
    }
}

/// Source of the current time, injectable so tests can fix the clock.
pub trait TimeSource: Send + Sync {
    fn now(&self) -> TimeSnapshot;
}

/// Reads the host's local wall clock.
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> TimeSnapshot {
        TimeSnapshot::from_datetime(&Local::now())
    }
}
