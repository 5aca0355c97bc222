//! No-overlap validation for candidate shift intervals.
//!
//! A business's active shifts must never overlap. Before a shift is created
//! or its times are changed, the candidate interval is checked against the
//! other active shifts of the same business. The validator has no notion of
//! shift identity: on update, the caller excludes the shift's own previous
//! state from `others` before calling in (see
//! [`crate::schedule::ShiftLifecycle`]).

use crate::error::{EngineError, EngineResult};
use crate::models::{ClockInterval, WorkShift};
use crate::schedule::interval_math::overlaps;

/// An existing active shift's interval, carrying just enough identity to
/// name it in a conflict message.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedInterval {
    /// The shift's human-readable name.
    pub name: String,
    /// The shift's time-of-day interval.
    pub interval: ClockInterval,
}

impl From<&WorkShift> for NamedInterval {
    fn from(shift: &WorkShift) -> Self {
        Self {
            name: shift.name.clone(),
            interval: shift.interval(),
        }
    }
}

/// Validates a candidate interval against a business's other active shifts.
///
/// Rejects zero-length candidates with [`EngineError::DegenerateInterval`]
/// and candidates that overlap any interval in `others` with
/// [`EngineError::OverlappingShift`] naming the first conflicting shift.
/// Exact boundary adjacency is allowed: an interval may start at the minute
/// another ends.
///
/// Only active shifts of the same business belong in `others`; inactive
/// shifts impose no constraint.
///
/// # Example
///
/// ```
/// use shift_engine::models::ClockInterval;
/// use shift_engine::schedule::{NamedInterval, validate_shift_times};
///
/// let morning = NamedInterval {
///     name: "Morning Shift".to_string(),
///     interval: ClockInterval::parse("08:00", "16:00").unwrap(),
/// };
///
/// let adjacent = ClockInterval::parse("16:00", "22:00").unwrap();
/// assert!(validate_shift_times(adjacent, &[morning.clone()]).is_ok());
///
/// let conflicting = ClockInterval::parse("15:00", "20:00").unwrap();
/// let error = validate_shift_times(conflicting, &[morning]).unwrap_err();
/// assert!(error.to_string().contains("Morning Shift"));
/// ```
pub fn validate_shift_times(
    candidate: ClockInterval,
    others: &[NamedInterval],
) -> EngineResult<()> {
    if candidate.start == candidate.end {
        return Err(EngineError::DegenerateInterval);
    }

    for other in others {
        if overlaps(candidate, other.interval) {
            return Err(EngineError::OverlappingShift {
                name: other.name.clone(),
                start: other.interval.start.to_string(),
                end: other.interval.end.to_string(),
            });
        }
    }

    Ok(())
}
