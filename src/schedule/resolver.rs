//! Instant-to-shift resolution.
//!
//! Answers which of a business's active shifts, if any, contains a given
//! instant. Because validation keeps active shifts disjoint, at most one
//! shift can match in a correctly-maintained set; if that invariant is ever
//! violated by a race, the resolver still returns the first match in the
//! supplied iteration order rather than erroring, since resolution feeds a
//! best-effort annotation, not a correctness gate.

use chrono::NaiveDateTime;

use crate::models::{ClockTime, WorkShift};
use crate::schedule::interval_math::contains;

/// Returns the first active shift containing `instant`, if any.
///
/// Inactive shifts are skipped. Callers should supply shifts ordered by
/// start time so that first-match resolution stays deterministic even on
/// an invariant-violating (overlapping) set.
///
/// # Example
///
/// ```
/// # use chrono::Utc;
/// # use uuid::Uuid;
/// use shift_engine::models::WorkShift;
/// use shift_engine::schedule::resolve_shift;
///
/// # let now = Utc::now();
/// # let overnight = WorkShift {
/// #     id: Uuid::new_v4(),
/// #     business_id: Uuid::new_v4(),
/// #     name: "Overnight".to_string(),
/// #     start_time: "22:00".parse().unwrap(),
/// #     end_time: "02:00".parse().unwrap(),
/// #     color: "#2196F3".to_string(),
/// #     description: None,
/// #     is_active: true,
/// #     created_at: now,
/// #     updated_at: now,
/// # };
/// let shifts = vec![overnight];
/// assert!(resolve_shift("23:45".parse().unwrap(), &shifts).is_some());
/// assert!(resolve_shift("10:00".parse().unwrap(), &shifts).is_none());
/// ```
pub fn resolve_shift(instant: ClockTime, shifts: &[WorkShift]) -> Option<&WorkShift> {
    shifts
        .iter()
        .filter(|shift| shift.is_active)
        .find(|shift| contains(shift.interval(), instant))
}

/// Resolves a transaction's wall-clock instant to a shift.
///
/// Only the time-of-day component of `timestamp` is used; the caller has
/// already normalized the instant to the business's locality.
pub fn find_shift_for_transaction(
    timestamp: NaiveDateTime,
    shifts: &[WorkShift],
) -> Option<&WorkShift> {
    resolve_shift(ClockTime::from(timestamp.time()), shifts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DEFAULT_SHIFT_COLOR, MINUTES_PER_DAY};
    use chrono::Utc;
    use uuid::Uuid;

    fn make_shift(name: &str, start: &str, end: &str, is_active: bool) -> WorkShift {
        let now = Utc::now();
        WorkShift {
            id: Uuid::new_v4(),
            business_id: Uuid::new_v4(),
            name: name.to_string(),
            start_time: start.parse().unwrap(),
            end_time: end.parse().unwrap(),
            color: DEFAULT_SHIFT_COLOR.to_string(),
            description: None,
            is_active,
            created_at: now,
            updated_at: now,
        }
    }

    fn minute(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    fn make_timestamp(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    // ==========================================================================
    // SR-001: overnight shift resolution
    // ==========================================================================
    #[test]
    fn test_sr_001_overnight_shift_resolution() {
        let shifts = vec![make_shift("Shift D", "22:00", "02:00", true)];

        assert_eq!(
            resolve_shift(minute("23:45"), &shifts).map(|s| s.name.as_str()),
            Some("Shift D")
        );
        assert!(resolve_shift(minute("10:00"), &shifts).is_none());
        // Exclusive end: 02:00 belongs to whatever comes next, not this shift.
        assert!(resolve_shift(minute("02:00"), &shifts).is_none());
    }

    // ==========================================================================
    // SR-002: full-day coverage resolves every minute exactly once
    // ==========================================================================
    #[test]
    fn test_sr_002_full_day_coverage_resolves_every_minute() {
        let shifts = vec![
            make_shift("Shift D", "22:00", "02:00", true),
            make_shift("Shift F", "02:00", "22:00", true),
        ];

        for m in 0..MINUTES_PER_DAY {
            let instant = ClockTime::from_minutes(m).unwrap();
            let matched = resolve_shift(instant, &shifts)
                .unwrap_or_else(|| panic!("minute {} resolved to no shift", m));
            let expected = if m < 2 * 60 || m >= 22 * 60 {
                "Shift D"
            } else {
                "Shift F"
            };
            assert_eq!(matched.name, expected, "minute {}", m);
        }
    }

    // ==========================================================================
    // SR-003: inactive shifts are excluded from resolution
    // ==========================================================================
    #[test]
    fn test_sr_003_inactive_shift_is_ignored() {
        let shifts = vec![make_shift("Dormant", "08:00", "16:00", false)];
        assert!(resolve_shift(minute("12:00"), &shifts).is_none());
    }

    #[test]
    fn test_no_shifts_resolves_to_none() {
        assert!(resolve_shift(minute("12:00"), &[]).is_none());
    }

    #[test]
    fn test_gap_in_coverage_resolves_to_none() {
        let shifts = vec![
            make_shift("Morning", "08:00", "12:00", true),
            make_shift("Evening", "14:00", "22:00", true),
        ];
        assert!(resolve_shift(minute("13:00"), &shifts).is_none());
    }

    #[test]
    fn test_boundary_minute_belongs_to_next_shift() {
        let shifts = vec![
            make_shift("Morning", "08:00", "16:00", true),
            make_shift("Evening", "16:00", "22:00", true),
        ];
        assert_eq!(
            resolve_shift(minute("16:00"), &shifts).map(|s| s.name.as_str()),
            Some("Evening")
        );
    }

    #[test]
    fn test_overlapping_set_returns_first_match_in_order() {
        // The no-overlap invariant can be violated by a create/create race;
        // resolution must stay well-defined and take the first match.
        let shifts = vec![
            make_shift("First", "08:00", "16:00", true),
            make_shift("Second", "10:00", "18:00", true),
        ];
        assert_eq!(
            resolve_shift(minute("12:00"), &shifts).map(|s| s.name.as_str()),
            Some("First")
        );
    }

    #[test]
    fn test_find_shift_for_transaction_uses_time_of_day() {
        let shifts = vec![make_shift("Overnight", "22:00", "02:00", true)];

        let late = make_timestamp("2026-01-15 23:45:12");
        assert_eq!(
            find_shift_for_transaction(late, &shifts).map(|s| s.name.as_str()),
            Some("Overnight")
        );

        let morning = make_timestamp("2026-01-16 10:00:00");
        assert!(find_shift_for_transaction(morning, &shifts).is_none());

        // Seconds are truncated: 02:00:59 is already past the exclusive end.
        let boundary = make_timestamp("2026-01-16 02:00:59");
        assert!(find_shift_for_transaction(boundary, &shifts).is_none());
    }
}
