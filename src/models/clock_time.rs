//! Clock-time value type.
//!
//! This module defines the ClockTime struct representing a time of day
//! with minute resolution, parsed from and formatted as "HH:mm" strings.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::EngineError;

/// The number of minutes in a day. Every [`ClockTime`] is in `[0, 1440)`.
pub const MINUTES_PER_DAY: u16 = 1440;

/// A time of day with minute resolution, stored as a minute-of-day integer.
///
/// Parses from and formats to zero-padded `"HH:mm"` strings, the same
/// representation shift times are stored in. The hour must be 00-23 and the
/// minute 00-59; `"24:00"` is not a valid clock time.
///
/// # Example
///
/// ```
/// use shift_engine::models::ClockTime;
///
/// let time: ClockTime = "08:30".parse().unwrap();
/// assert_eq!(time.minutes(), 510);
/// assert_eq!(time.to_string(), "08:30");
/// assert!("24:00".parse::<ClockTime>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    /// Creates a clock time from a minute-of-day value.
    ///
    /// Returns `None` if `minutes` is not in `[0, 1440)`.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes))
    }

    /// Returns the minute-of-day value, in `[0, 1440)`.
    pub fn minutes(self) -> u16 {
        self.0
    }

    /// Returns the hour component, 0-23.
    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    /// Returns the minute component, 0-59.
    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl FromStr for ClockTime {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidClockTime {
            value: s.to_string(),
        };

        // Zero-padded two-digit fields only: "9:5" and "9:05" are rejected.
        let (hh, mm) = s.split_once(':').ok_or_else(invalid)?;
        if hh.len() != 2 || mm.len() != 2 {
            return Err(invalid());
        }

        let hour: u16 = hh.parse().map_err(|_| invalid())?;
        let minute: u16 = mm.parse().map_err(|_| invalid())?;
        if hour > 23 || minute > 59 {
            return Err(invalid());
        }

        Ok(Self(hour * 60 + minute))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl From<NaiveTime> for ClockTime {
    /// Truncates a `chrono` time to minute resolution.
    fn from(time: NaiveTime) -> Self {
        Self((time.hour() * 60 + time.minute()) as u16)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
