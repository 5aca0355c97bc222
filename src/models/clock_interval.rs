//! Clock-interval value type.
//!
//! This module defines the ClockInterval struct, a half-open time-of-day
//! range that may wrap past midnight. Containment and overlap questions are
//! answered by the free functions in [`crate::schedule`], not by methods
//! here, so the value type stays trivially testable.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::ClockTime;

/// A half-open time-of-day range `[start, end)`.
///
/// If `end <= start`, the interval wraps past midnight: start=22:00,
/// end=02:00 covers 22:00-24:00 and 00:00-02:00. A zero-length interval
/// (`start == end`) carries no meaning and is rejected by shift validation
/// before any interval math runs.
///
/// # Example
///
/// ```
/// use shift_engine::models::ClockInterval;
///
/// let overnight = ClockInterval::parse("22:00", "02:00").unwrap();
/// assert!(overnight.is_wrapping());
/// assert_eq!(overnight.to_string(), "22:00\u{2013}02:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockInterval {
    /// The inclusive start of the interval.
    pub start: ClockTime,
    /// The exclusive end of the interval.
    pub end: ClockTime,
}

impl ClockInterval {
    /// Creates an interval from two clock times.
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    /// Parses an interval from two "HH:mm" strings.
    pub fn parse(start: &str, end: &str) -> crate::error::EngineResult<Self> {
        Ok(Self {
            start: start.parse()?,
            end: end.parse()?,
        })
    }

    /// Returns true if the interval spans midnight (`end <= start`).
    pub fn is_wrapping(&self) -> bool {
        self.end <= self.start
    }
}

impl fmt::Display for ClockInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\u{2013}{}", self.start, self.end)
    }
}
