//! Opening-hours window math.
//!
//! An opening window is a daily recurring `[start, end]` range of
//! wall-clock times. When `start` is later than `end` the window crosses
//! midnight (22:00 - 06:00 is open late in the evening and early in the
//! morning). Windows carry no date and no timezone; an instant is tested by
//! its time of day alone.

use crate::error::{FilterError, Result};
use chrono::{NaiveDateTime, NaiveTime, Timelike};
use place_store::{OpeningHours, parse_clock_time};

/// A parsed daily opening window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningWindow {
    start: NaiveTime,
    end: NaiveTime,
}

impl OpeningWindow {
    /// Create a window; seconds and sub-seconds of both ends are dropped.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            start: truncate_to_minute(start),
            end: truncate_to_minute(end),
        }
    }

    /// Parse a window from its "HH:MM" string form
    pub fn from_hours(hours: &OpeningHours) -> Result<Self> {
        let parse = |value: &str| {
            parse_clock_time(value).map_err(|_| FilterError::InvalidTimeFormat {
                value: value.to_string(),
            })
        };
        Ok(Self::new(parse(&hours.start)?, parse(&hours.end)?))
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Whether the window crosses midnight
    pub fn wraps_midnight(&self) -> bool {
        self.start > self.end
    }

    /// Whether the window is open at `now`.
    ///
    /// Only the time of day matters, so no date arithmetic is done and
    /// every representable `now` is accepted.
    /// - If `start <= end`: open iff `start <= now <= end`
    /// - Otherwise the window wraps: open from `start` until midnight
    ///   (the head opened today) or from midnight until `end` (the tail
    ///   of the window opened yesterday)
    ///
    /// `start == end` takes the non-wrapping branch and is open only at
    /// that exact minute (zero seconds).
    pub fn is_open_at(&self, now: NaiveDateTime) -> bool {
        let time = now.time();
        if self.start <= self.end {
            self.start <= time && time <= self.end
        } else {
            self.start <= time || time <= self.end
        }
    }
}

/// Whether a place with these opening hours is open at `now`.
///
/// Fails with [`FilterError::InvalidTimeFormat`] if either end is malformed.
pub fn open_now(hours: &OpeningHours, now: NaiveDateTime) -> Result<bool> {
    Ok(OpeningWindow::from_hours(hours)?.is_open_at(now))
}

fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}
