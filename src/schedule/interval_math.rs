//! Interval math over possibly-wrapping clock intervals.
//!
//! This module provides the pure containment and overlap predicates the
//! validator and resolver are built on. Intervals are half-open: the start
//! minute belongs to the interval, the end minute does not, so back-to-back
//! shifts (one ending 16:00, the next starting 16:00) are adjacent, never
//! overlapping. An interval whose end is at or before its start wraps past
//! midnight.

use crate::models::{ClockInterval, ClockTime, MINUTES_PER_DAY};

/// Returns true if `instant` falls within `interval`.
///
/// The boundary at `start` is inclusive and the boundary at `end` is
/// exclusive: an instant exactly at a shift's end belongs to the next
/// shift, not this one.
///
/// # Example
///
/// ```
/// use shift_engine::models::ClockInterval;
/// use shift_engine::schedule::contains;
///
/// let overnight = ClockInterval::parse("22:00", "02:00").unwrap();
/// assert!(contains(overnight, "23:45".parse().unwrap()));
/// assert!(contains(overnight, "01:59".parse().unwrap()));
/// assert!(!contains(overnight, "02:00".parse().unwrap()));
/// assert!(!contains(overnight, "10:00".parse().unwrap()));
/// ```
pub fn contains(interval: ClockInterval, instant: ClockTime) -> bool {
    if interval.is_wrapping() {
        instant >= interval.start || instant < interval.end
    } else {
        instant >= interval.start && instant < interval.end
    }
}

/// Returns true if some instant is contained by both intervals.
///
/// Each interval is normalized into one or two non-wrapping half-open
/// minute ranges and every range of `a` is tested against every range of
/// `b` with the standard half-open intersection check. This handles
/// wrap/wrap, wrap/non-wrap, and non-wrap/non-wrap pairs uniformly.
///
/// # Example
///
/// ```
/// use shift_engine::models::ClockInterval;
/// use shift_engine::schedule::overlaps;
///
/// let day = ClockInterval::parse("08:00", "16:00").unwrap();
/// let evening = ClockInterval::parse("16:00", "22:00").unwrap();
/// let overnight = ClockInterval::parse("22:00", "02:00").unwrap();
/// let early = ClockInterval::parse("01:00", "05:00").unwrap();
///
/// assert!(!overlaps(day, evening)); // touching boundary is not overlap
/// assert!(overlaps(overnight, early)); // 01:00-02:00 is shared
/// ```
pub fn overlaps(a: ClockInterval, b: ClockInterval) -> bool {
    for &(a_start, a_end) in unroll(a).iter().flatten() {
        for &(b_start, b_end) in unroll(b).iter().flatten() {
            if a_start < b_end && b_start < a_end {
                return true;
            }
        }
    }
    false
}

/// Splits an interval into its non-wrapping half-open minute ranges.
///
/// A non-wrapping interval yields one range. A wrapping interval yields its
/// pre-midnight range and, unless it ends exactly at midnight, its
/// post-midnight range.
fn unroll(interval: ClockInterval) -> [Option<(u16, u16)>; 2] {
    let start = interval.start.minutes();
    let end = interval.end.minutes();

    if interval.is_wrapping() {
        let after_midnight = (end > 0).then_some((0, end));
        [Some((start, MINUTES_PER_DAY)), after_midnight]
    } else {
        [Some((start, end)), None]
    }
}
