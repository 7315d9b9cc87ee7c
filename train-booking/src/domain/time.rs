//! Time-of-day handling.
//!
//! Trains run on a single-day timetable, so times carry no date. Adding
//! hours wraps around midnight explicitly (mod 24h) instead of relying on
//! whatever a date library happens to do.

use chrono::{NaiveTime, Timelike};
use std::fmt;

const MINUTES_PER_HOUR: u16 = 60;
const MINUTES_PER_DAY: u16 = 24 * MINUTES_PER_HOUR;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A wall-clock time of day with minute precision.
///
/// Stored as minutes since midnight, always in `0..1440`.
///
/// # Examples
///
/// ```
/// use train_booking::domain::ClockTime;
///
/// let time = ClockTime::parse_hhmm("23:00").unwrap();
/// assert_eq!(time.plus_hours(3).to_string(), "02:00");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClockTime(u16);

impl ClockTime {
    /// Create a time from hour and minute, or `None` if out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self((hour * 60 + minute) as u16))
    }

    /// Parse "HH:MM", or "HH:MM:SS" with the seconds dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use train_booking::domain::ClockTime;
    ///
    /// assert_eq!(ClockTime::parse("09:00:45").unwrap().to_string(), "09:00");
    /// assert!(ClockTime::parse("9:00").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        if s.len() == 5 {
            return Self::parse_hhmm(s);
        }
        NaiveTime::parse_from_str(s, "%H:%M:%S")
            .map(Self::from)
            .map_err(|_| TimeError::new("expected HH:MM or HH:MM:SS format"))
    }

    /// Parse a time from "HH:MM" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use train_booking::domain::ClockTime;
    ///
    /// assert!(ClockTime::parse_hhmm("00:00").is_ok());
    /// assert!(ClockTime::parse_hhmm("23:59").is_ok());
    ///
    /// assert!(ClockTime::parse_hhmm("0900").is_err());
    /// assert!(ClockTime::parse_hhmm("9:00").is_err());
    /// assert!(ClockTime::parse_hhmm("24:00").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        Self::from_hm(hour, minute).ok_or_else(|| TimeError::new("invalid time"))
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        u32::from(self.0 / MINUTES_PER_HOUR)
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        u32::from(self.0 % MINUTES_PER_HOUR)
    }

    /// Minutes since midnight.
    pub fn minutes_from_midnight(&self) -> u16 {
        self.0
    }

    /// Add whole hours, wrapping past midnight.
    pub fn plus_hours(self, hours: usize) -> Self {
        let hours = (hours % 24) as u16;
        Self((self.0 + hours * MINUTES_PER_HOUR) % MINUTES_PER_DAY)
    }

    /// True if `start < self < end`. Both bounds are excluded.
    pub fn is_strictly_between(&self, start: ClockTime, end: ClockTime) -> bool {
        start < *self && *self < end
    }
}

/// Seconds and sub-second components are dropped.
impl From<NaiveTime> for ClockTime {
    fn from(time: NaiveTime) -> Self {
        Self((time.hour() * 60 + time.minute()) as u16)
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
